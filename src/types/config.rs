use crate::error::ScorecardError;
use serde::Deserialize;
use std::collections::HashSet;

pub const DEFAULT_REASONING_PLACEHOLDER: &str = "No reasoning provided";

#[derive(Debug, Clone, Deserialize)]
pub struct ScorecardConfig {
    pub project: ProjectConfig,
    pub taxonomy: TaxonomyConfig,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub articles: ArticlesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyConfig {
    pub reference: String,
    #[serde(default = "default_placeholder")]
    pub reasoning_placeholder: String,
}

fn default_placeholder() -> String {
    DEFAULT_REASONING_PLACEHOLDER.to_string()
}

/// One declared `{entity, document}` pair: the vendor export scoring that entity.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub entity: String,
    pub document: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticlesConfig {
    #[serde(default = "default_articles_dir")]
    pub dir: String,
    #[serde(default)]
    pub models: Vec<String>,
    pub default_model: Option<String>,
    #[serde(default = "default_delimiter")]
    pub paragraph_delimiter: String,
}

impl Default for ArticlesConfig {
    fn default() -> Self {
        Self {
            dir: default_articles_dir(),
            models: Vec::new(),
            default_model: None,
            paragraph_delimiter: default_delimiter(),
        }
    }
}

fn default_articles_dir() -> String {
    "articles".to_string()
}

fn default_delimiter() -> String {
    "\n".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_extent")]
    pub width: f64,
    #[serde(default = "default_extent")]
    pub height: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            margin: default_margin(),
        }
    }
}

fn default_extent() -> f64 {
    400.0
}

fn default_margin() -> f64 {
    40.0
}

impl ScorecardConfig {
    pub fn title(&self) -> &str {
        self.project.title.as_deref().unwrap_or(&self.project.name)
    }

    /// The model shown first: `default_model`, else the first declared model.
    pub fn initial_model(&self) -> Option<&str> {
        self.articles
            .default_model
            .as_deref()
            .or_else(|| self.articles.models.first().map(String::as_str))
    }

    pub fn validate(&self) -> Result<(), ScorecardError> {
        if self.project.name.trim().is_empty() {
            return Err(ScorecardError::ConfigParse(
                "project.name must not be empty".to_string(),
            ));
        }
        if self.taxonomy.reference.trim().is_empty() {
            return Err(ScorecardError::ConfigParse(
                "taxonomy.reference must not be empty".to_string(),
            ));
        }

        let mut entities = HashSet::new();
        for source in &self.sources {
            let entity = source.entity.trim();
            if entity.is_empty() {
                return Err(ScorecardError::ConfigParse(
                    "sources.entity entries must be non-empty names".to_string(),
                ));
            }
            if source.document.trim().is_empty() {
                return Err(ScorecardError::ConfigParse(format!(
                    "sources.document for '{entity}' must not be empty"
                )));
            }
            if !entities.insert(entity.to_string()) {
                return Err(ScorecardError::ConfigParse(format!(
                    "sources contains duplicate entity: {entity}"
                )));
            }
        }

        let mut models = HashSet::new();
        for model in &self.articles.models {
            let model = model.trim();
            if model.is_empty() {
                return Err(ScorecardError::ConfigParse(
                    "articles.models entries must be non-empty keys".to_string(),
                ));
            }
            if !models.insert(model.to_string()) {
                return Err(ScorecardError::ConfigParse(format!(
                    "articles.models contains duplicate model: {model}"
                )));
            }
        }
        if let Some(default_model) = &self.articles.default_model {
            if !models.contains(default_model.trim()) {
                return Err(ScorecardError::ConfigParse(format!(
                    "articles.default_model '{default_model}' is not listed in articles.models"
                )));
            }
        }
        if self.articles.paragraph_delimiter.is_empty() {
            return Err(ScorecardError::ConfigParse(
                "articles.paragraph_delimiter must not be empty".to_string(),
            ));
        }

        let display = &self.display;
        for (key, value) in [("width", display.width), ("height", display.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScorecardError::ConfigParse(format!(
                    "display.{key} must be a positive number"
                )));
            }
        }
        if !display.margin.is_finite() || display.margin < 0.0 {
            return Err(ScorecardError::ConfigParse(
                "display.margin must be zero or positive".to_string(),
            ));
        }

        Ok(())
    }
}
