use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::correlation::Correlation;
    use crate::project::frame::PlotFrame;
    use crate::project::heatmap::Heatmap;
    use crate::types::report::{Dashboard, EntitySummary, Scatter};
    use chrono::Utc;

    fn scatter(correlation: Correlation) -> Scatter {
        let frame = PlotFrame {
            width: 100.0,
            height: 100.0,
            margin: 0.0,
        };
        Scatter {
            points: Vec::new(),
            correlation,
            diagonal: frame.diagonal(),
        }
    }

    #[test]
    fn json_dashboard_carries_summaries_and_correlation_status() {
        let empty = Heatmap {
            entities: vec!["OpenAI".to_string()],
            rows: Vec::new(),
        };
        let dashboard = Dashboard {
            title: "Scorecard".to_string(),
            generated_at: Utc::now(),
            entities: vec!["OpenAI".to_string()],
            summaries: vec![EntitySummary {
                entity: "OpenAI".to_string(),
                human: Some(70),
                ai: None,
                ai_precomputed: false,
            }],
            human_heatmap: empty.clone(),
            ai_heatmap: empty,
            fine_scatter: scatter(Correlation::Coefficient(0.5)),
            aggregate_scatter: scatter(Correlation::InsufficientVariance),
        };

        let rendered = to_json(&dashboard).expect("json should serialize");
        assert!(rendered.contains("\"human\": 70"));
        assert!(rendered.contains("\"ai\": null"));
        assert!(rendered.contains("\"status\": \"coefficient\""));
        assert!(rendered.contains("\"status\": \"insufficient_variance\""));
        assert!(rendered.contains("\"generated_at\""));
    }
}
