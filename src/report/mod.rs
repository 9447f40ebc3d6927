pub mod json;
pub mod md;

use crate::error::ScorecardError;
use crate::types::report::Dashboard;
use crate::view::View;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(dashboard: &Dashboard, format: OutputFormat) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Json => json::to_json(dashboard).map_err(ScorecardError::Json),
        OutputFormat::Md => Ok(md::to_markdown(dashboard)),
    }
}

pub fn render_view(view: &View, format: OutputFormat) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Json => json::to_json(view).map_err(ScorecardError::Json),
        OutputFormat::Md => Ok(md::view_to_markdown(view)),
    }
}
