use super::frame::{PlotFrame, Position};
use crate::types::matrix::Matrix;
use crate::types::report::EntitySummary;
use serde::Serialize;

/// A scatter point: human score on x, AI score on y.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub human: f64,
    pub ai: f64,
    pub position: Position,
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

impl ScatterPoint {
    pub fn tooltip(&self) -> String {
        let location = match (&self.category, &self.subcategory) {
            (Some(category), Some(subcategory)) => format!(" / {category} / {subcategory}"),
            _ => String::new(),
        };
        format!(
            "{}{}: human {}, AI {}",
            self.entity, location, self.human, self.ai
        )
    }
}

/// One point per (category, subcategory, entity) of the grid.
pub fn fine_points(human: &Matrix, ai: &Matrix, frame: &PlotFrame) -> Vec<ScatterPoint> {
    human
        .cells()
        .flat_map(|(ci, si, category, subcategory)| {
            human.entities.iter().map(move |entity| {
                let human_score = human.score(ci, si, entity) as f64;
                let ai_score = ai.score(ci, si, entity) as f64;
                ScatterPoint {
                    human: human_score,
                    ai: ai_score,
                    position: frame.project(human_score, ai_score),
                    entity: entity.clone(),
                    category: Some(category.name.clone()),
                    subcategory: Some(subcategory.name.clone()),
                }
            })
        })
        .collect()
}

/// One point per entity whose human and AI aggregates are both defined.
pub fn aggregate_points(summaries: &[EntitySummary], frame: &PlotFrame) -> Vec<ScatterPoint> {
    summaries
        .iter()
        .filter_map(|summary| {
            let (Some(human), Some(ai)) = (summary.human, summary.ai) else {
                tracing::warn!(
                    entity = %summary.entity,
                    "aggregate score undefined; entity left out of aggregate scatter"
                );
                return None;
            };
            let human = human as f64;
            Some(ScatterPoint {
                human,
                ai,
                position: frame.project(human, ai),
                entity: summary.entity.clone(),
                category: None,
                subcategory: None,
            })
        })
        .collect()
}

pub fn pairs(points: &[ScatterPoint]) -> Vec<(f64, f64)> {
    points.iter().map(|point| (point.human, point.ai)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::normalize::normalize_reference;
    use crate::types::taxonomy::ReferenceTaxonomy;
    use serde_json::json;

    fn frame() -> PlotFrame {
        PlotFrame {
            width: 100.0,
            height: 100.0,
            margin: 0.0,
        }
    }

    fn matrix(scores: serde_json::Value) -> Matrix {
        let reference: ReferenceTaxonomy = serde_json::from_value(json!([
            {"category": "A", "weight": 100, "subcategories": [
                {"name": "a1", "weight": 50, "scores": scores["a1"].clone()},
                {"name": "a2", "weight": 50, "scores": scores["a2"].clone()}
            ]}
        ]))
        .expect("reference should parse");
        normalize_reference(&reference, &["Meta".to_string(), "OpenAI".to_string()], "-")
    }

    #[test]
    fn fine_points_cover_every_cell_and_entity() {
        let human = matrix(json!({"a1": {"Meta": 10, "OpenAI": 80}, "a2": {"Meta": 20, "OpenAI": 60}}));
        let ai = matrix(json!({"a1": {"Meta": 30, "OpenAI": 90}, "a2": {"OpenAI": 50}}));

        let points = fine_points(&human, &ai, &frame());
        assert_eq!(points.len(), 4);

        let meta_a2 = points
            .iter()
            .find(|point| point.entity == "Meta" && point.subcategory.as_deref() == Some("a2"))
            .expect("point should exist");
        assert_eq!((meta_a2.human, meta_a2.ai), (20.0, 0.0));
        assert_eq!(meta_a2.position, Position { x: 20.0, y: 100.0 });
        assert_eq!(meta_a2.tooltip(), "Meta / A / a2: human 20, AI 0");
    }

    #[test]
    fn aggregate_points_skip_undefined_summaries() {
        let summaries = vec![
            EntitySummary {
                entity: "OpenAI".to_string(),
                human: Some(70),
                ai: Some(66.0),
                ai_precomputed: true,
            },
            EntitySummary {
                entity: "Meta".to_string(),
                human: None,
                ai: Some(10.0),
                ai_precomputed: false,
            },
        ];

        let points = aggregate_points(&summaries, &frame());
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].entity, "OpenAI");
        assert_eq!(points[0].position, Position { x: 70.0, y: 34.0 });
        assert_eq!(pairs(&points), vec![(70.0, 66.0)]);
        assert_eq!(points[0].tooltip(), "OpenAI: human 70, AI 66");
    }
}
