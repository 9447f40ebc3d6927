use super::route::Route;
use super::selector::ModelSelector;
use crate::types::report::{Dashboard, Scatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatmapSource {
    Human,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterKind {
    Fine,
    Aggregate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Hover {
    #[default]
    Nothing,
    Cell {
        source: HeatmapSource,
        row: usize,
        entity: String,
    },
    Point {
        kind: ScatterKind,
        index: usize,
    },
}

impl FromStr for Hover {
    type Err = String;

    /// Parses `cell:<human|ai>:<row>:<entity>` or `point:<fine|aggregate>:<index>`.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = spec.splitn(4, ':').collect();
        match parts.as_slice() {
            ["cell", source, row, entity] => {
                let source = match *source {
                    "human" => HeatmapSource::Human,
                    "ai" => HeatmapSource::Ai,
                    other => return Err(format!("unknown heatmap source: {other}")),
                };
                let row = row
                    .parse()
                    .map_err(|_| format!("invalid heatmap row: {row}"))?;
                Ok(Hover::Cell {
                    source,
                    row,
                    entity: entity.to_string(),
                })
            }
            ["point", kind, index] => {
                let kind = match *kind {
                    "fine" => ScatterKind::Fine,
                    "aggregate" => ScatterKind::Aggregate,
                    other => return Err(format!("unknown scatter kind: {other}")),
                };
                let index = index
                    .parse()
                    .map_err(|_| format!("invalid point index: {index}"))?;
                Ok(Hover::Point { kind, index })
            }
            _ => Err(format!("unrecognized hover target: {spec}")),
        }
    }
}

/// Presentation state owned by the view; everything else is re-derived from data.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub route: Route,
    pub selector: ModelSelector,
    pub hover: Hover,
}

impl ViewState {
    pub fn new(route: Route, selector: ModelSelector) -> Self {
        Self {
            route,
            selector,
            hover: Hover::Nothing,
        }
    }

    pub fn hover(&mut self, hover: Hover) {
        self.hover = hover;
    }

    /// The selected model, or `None` when the current route hides the slider.
    pub fn active_model(&self) -> Option<&str> {
        if self.route.shows_model_selector() {
            self.selector.selected()
        } else {
            None
        }
    }

    /// Tooltip text for whatever is hovered.
    pub fn tooltip(&self, dashboard: &Dashboard) -> Option<String> {
        match &self.hover {
            Hover::Nothing => None,
            Hover::Cell { source, row, entity } => {
                let heatmap = match source {
                    HeatmapSource::Human => &dashboard.human_heatmap,
                    HeatmapSource::Ai => &dashboard.ai_heatmap,
                };
                let row_data = heatmap.rows.get(*row)?;
                let cell = heatmap.cell(*row, entity)?;
                let mut text = format!(
                    "{} / {} / {}: {}",
                    entity, row_data.category, row_data.subcategory, cell.score
                );
                if let Some(reasoning) = &cell.reasoning {
                    text.push('\n');
                    text.push_str(reasoning);
                }
                Some(text)
            }
            Hover::Point { kind, index } => {
                let scatter: &Scatter = match kind {
                    ScatterKind::Fine => &dashboard.fine_scatter,
                    ScatterKind::Aggregate => &dashboard.aggregate_scatter,
                };
                scatter.points.get(*index).map(|point| point.tooltip())
            }
        }
    }
}
