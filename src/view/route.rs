/// The addressable views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(String),
    Scorecard,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default().trim();
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = trimmed.split('/').collect();
        match segments.as_slice() {
            [""] => Route::List,
            ["scorecard"] => Route::Scorecard,
            ["article", id] if !id.trim().is_empty() => Route::Detail(id.trim().to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// The model slider is only active on the article views.
    pub fn shows_model_selector(&self) -> bool {
        matches!(self, Route::List | Route::Detail(_))
    }
}
