use crate::project::color::bands;
use crate::project::heatmap::Heatmap;
use crate::types::report::{Dashboard, EntitySummary, Scatter};
use crate::view::View;

pub fn to_markdown(dashboard: &Dashboard) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", dashboard.title));
    output.push_str(&format!(
        "Generated: {}\n\n",
        dashboard.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output.push_str("## Weighted Scores\n\n");
    output.push_str(&scores_to_markdown(&dashboard.summaries));
    output.push('\n');

    output.push_str("## Correlation\n\n");
    output.push_str(&format!(
        "- fine-grained ({} points): {}\n- aggregate ({} points): {}\n\n",
        dashboard.fine_scatter.points.len(),
        dashboard.fine_scatter.correlation,
        dashboard.aggregate_scatter.points.len(),
        dashboard.aggregate_scatter.correlation
    ));

    output.push_str("## Human Heatmap\n\n");
    output.push_str(&legend());
    output.push_str(&heatmap_to_markdown(&dashboard.human_heatmap));
    output.push('\n');
    output.push_str("## AI Heatmap\n\n");
    output.push_str(&heatmap_to_markdown(&dashboard.ai_heatmap));

    let warnings = dashboard.warnings();
    if !warnings.is_empty() {
        output.push_str("\n## Warnings\n\n");
        for warning in warnings {
            output.push_str(&format!("- {warning}\n"));
        }
    }

    output
}

fn legend() -> String {
    let labels: Vec<String> = bands()
        .iter()
        .map(|band| format!("`{}` {}", band.label, band.hex))
        .collect();
    format!("Bands: {}. `*` marks cells with reasoning.\n\n", labels.join(", "))
}

pub fn scores_to_markdown(summaries: &[EntitySummary]) -> String {
    let mut output = String::from("| Entity | Human | AI |\n|---|---|---|\n");
    for summary in summaries {
        let human = summary
            .human
            .map(|score| score.to_string())
            .unwrap_or_else(|| "undefined".to_string());
        let ai = match summary.ai {
            Some(score) if summary.ai_precomputed => format!("{score} (overall)"),
            Some(score) => score.to_string(),
            None => "undefined".to_string(),
        };
        output.push_str(&format!("| {} | {} | {} |\n", summary.entity, human, ai));
    }
    output
}

pub fn heatmap_to_markdown(heatmap: &Heatmap) -> String {
    let mut output = String::from("| Category | Subcategory |");
    for entity in &heatmap.entities {
        output.push_str(&format!(" {entity} |"));
    }
    output.push_str("\n|---|---|");
    output.push_str(&"---|".repeat(heatmap.entities.len()));
    output.push('\n');

    for row in &heatmap.rows {
        output.push_str(&format!("| {} | {} |", row.category, row.subcategory));
        for cell in &row.cells {
            let marker = if cell.reasoning.is_some() { "*" } else { "" };
            output.push_str(&format!(" {}{} ({}) |", cell.score, marker, cell.band.label));
        }
        output.push('\n');
    }
    output
}

pub fn scatter_to_markdown(label: &str, scatter: &Scatter) -> String {
    let mut output = format!("## {label} scatter\n\n");
    output.push_str(&format!("Correlation: {}\n\n", scatter.correlation));
    output.push_str("| Entity | Subcategory | Human | AI | x | y |\n|---|---|---|---|---|---|\n");
    for point in &scatter.points {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {:.1} | {:.1} |\n",
            point.entity,
            point.subcategory.as_deref().unwrap_or("-"),
            point.human,
            point.ai,
            point.position.x,
            point.position.y
        ));
    }
    output
}

pub fn view_to_markdown(view: &View) -> String {
    match view {
        View::List { model, articles } => {
            let mut output = format!(
                "# Articles ({})\n\n",
                model.as_deref().unwrap_or("all models")
            );
            if articles.is_empty() {
                output.push_str("- none\n");
            }
            for article in articles {
                let score = article
                    .score
                    .map(|score| format!(" [score {score}]"))
                    .unwrap_or_default();
                output.push_str(&format!("- {}: {}{}\n", article.id, article.title, score));
            }
            output
        }
        View::Detail(detail) => {
            let mut output = format!("# {}\n\n", detail.title);
            if let Some(photo) = &detail.photo {
                output.push_str(&format!("![{}]({})\n\n", detail.title, photo));
            }
            if let Some(model) = &detail.model {
                output.push_str(&format!("Model: {model}\n\n"));
            }
            if detail.paragraphs.is_empty() {
                output.push_str("No content for this model.\n");
            }
            for paragraph in &detail.paragraphs {
                output.push_str(paragraph);
                output.push_str("\n\n");
            }
            if let Some(score) = detail.score {
                output.push_str(&format!("Score: {score}\n"));
            }
            if let Some(review) = &detail.review {
                output.push_str(&format!("\n## Review\n\n{review}\n"));
            }
            output
        }
        View::Scorecard(dashboard) => to_markdown(dashboard),
        View::NotFound { path } => format!("# Not found\n\nNo page at {path}\n"),
    }
}
