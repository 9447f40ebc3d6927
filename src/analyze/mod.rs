pub mod correlation;
pub mod normalize;
pub mod weighted;

use crate::load::DataSet;
use crate::project::frame::PlotFrame;
use crate::project::heatmap::heatmap;
use crate::project::points::{aggregate_points, fine_points, pairs};
use crate::types::config::ScorecardConfig;
use crate::types::matrix::Matrix;
use crate::types::report::{Dashboard, EntitySummary, Scatter};
use chrono::Utc;
use correlation::pearson;
use weighted::weighted_score;

/// Human and AI matrices, both shaped like the reference taxonomy.
#[derive(Debug, Clone)]
pub struct Matrices {
    pub human: Matrix,
    pub ai: Matrix,
}

pub fn matrices(data: &DataSet, config: &ScorecardConfig) -> Matrices {
    let placeholder = &config.taxonomy.reasoning_placeholder;
    Matrices {
        human: normalize::normalize_reference(&data.reference, &data.entities, placeholder),
        ai: normalize::normalize(&data.reference, &data.entities, &data.exports, placeholder),
    }
}

pub fn summaries(data: &DataSet, matrices: &Matrices) -> Vec<EntitySummary> {
    data.entities
        .iter()
        .map(|entity| {
            let precomputed = data
                .exports
                .get(entity)
                .and_then(|export| export.overall);
            let ai = precomputed.or_else(|| weighted_score(entity, &matrices.ai).map(|s| s as f64));
            EntitySummary {
                entity: entity.clone(),
                human: weighted_score(entity, &matrices.human),
                ai,
                ai_precomputed: precomputed.is_some(),
            }
        })
        .collect()
}

pub fn analyze(data: &DataSet, config: &ScorecardConfig) -> Dashboard {
    let matrices = matrices(data, config);
    let summaries = summaries(data, &matrices);
    let frame = PlotFrame::from(config.display);

    let fine = fine_points(&matrices.human, &matrices.ai, &frame);
    let fine_correlation = pearson(&pairs(&fine));
    let aggregate = aggregate_points(&summaries, &frame);
    let aggregate_correlation = pearson(&pairs(&aggregate));
    tracing::info!(
        fine_points = fine.len(),
        fine_correlation = %fine_correlation,
        aggregate_points = aggregate.len(),
        aggregate_correlation = %aggregate_correlation,
        "computed scatter statistics"
    );

    let human_heatmap = heatmap(&matrices.human);
    let ai_heatmap = heatmap(&matrices.ai);
    tracing::debug!(cells = human_heatmap.cell_count(), "built heatmaps");

    Dashboard {
        title: config.title().to_string(),
        generated_at: Utc::now(),
        entities: data.entities.clone(),
        summaries,
        human_heatmap,
        ai_heatmap,
        fine_scatter: Scatter {
            points: fine,
            correlation: fine_correlation,
            diagonal: frame.diagonal(),
        },
        aggregate_scatter: Scatter {
            points: aggregate,
            correlation: aggregate_correlation,
            diagonal: frame.diagonal(),
        },
    }
}
