use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Per-article document: `title`, `photo`, and one object per model key.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleDocument {
    pub title: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(flatten)]
    pub rest: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ModelEntry {
    pub fn paragraphs(&self, delimiter: &str) -> Vec<String> {
        self.content
            .split(delimiter)
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub photo: Option<String>,
    pub entries: BTreeMap<String, ModelEntry>,
}

impl Article {
    /// Keeps the model entries among `models`; an empty list keeps every entry that parses.
    pub fn from_document(id: &str, document: ArticleDocument, models: &[String]) -> Self {
        let entries = document
            .rest
            .into_iter()
            .filter(|(key, _)| models.is_empty() || models.contains(key))
            .filter_map(|(key, value)| {
                serde_json::from_value::<ModelEntry>(value)
                    .ok()
                    .map(|entry| (key, entry))
            })
            .collect();

        Self {
            id: id.to_string(),
            title: document.title,
            photo: document.photo,
            entries,
        }
    }

    pub fn entry(&self, model: &str) -> Option<&ModelEntry> {
        self.entries.get(model)
    }
}
