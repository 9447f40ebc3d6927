use crate::analyze::correlation::Correlation;
use crate::project::frame::Line;
use crate::project::heatmap::Heatmap;
use crate::project::points::ScatterPoint;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregate scores for one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySummary {
    pub entity: String,
    /// Weighted human score; `None` when the taxonomy carries no weight.
    pub human: Option<i64>,
    /// Precomputed vendor overall when available, else the weighted AI score.
    pub ai: Option<f64>,
    pub ai_precomputed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter {
    pub points: Vec<ScatterPoint>,
    pub correlation: Correlation,
    pub diagonal: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub entities: Vec<String>,
    pub summaries: Vec<EntitySummary>,
    pub human_heatmap: Heatmap,
    pub ai_heatmap: Heatmap,
    pub fine_scatter: Scatter,
    pub aggregate_scatter: Scatter,
}

impl Dashboard {
    /// Human-readable notes about statistics that came out undefined.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for summary in &self.summaries {
            if summary.human.is_none() {
                warnings.push(format!(
                    "weighted human score for {} is undefined (total weight is 0)",
                    summary.entity
                ));
            }
            if summary.ai.is_none() {
                warnings.push(format!(
                    "AI score for {} is undefined (total weight is 0)",
                    summary.entity
                ));
            }
        }
        for (label, scatter) in [
            ("fine-grained", &self.fine_scatter),
            ("aggregate", &self.aggregate_scatter),
        ] {
            if scatter.correlation == Correlation::InsufficientVariance {
                warnings.push(format!("{label} correlation is undefined (insufficient variance)"));
            }
        }
        warnings
    }
}
