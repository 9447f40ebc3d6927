use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    pub score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl ScoreRecord {
    pub fn missing() -> Self {
        Self {
            score: 0,
            reasoning: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subcategory {
    pub name: String,
    pub weight: f64,
    pub scores: BTreeMap<String, ScoreRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub weight: f64,
    pub subcategories: Vec<Subcategory>,
}

/// Taxonomy-shaped score grid with one record per entity in every subcategory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    pub entities: Vec<String>,
    pub categories: Vec<Category>,
}

impl Matrix {
    pub fn record(&self, category: usize, subcategory: usize, entity: &str) -> Option<&ScoreRecord> {
        self.categories
            .get(category)?
            .subcategories
            .get(subcategory)?
            .scores
            .get(entity)
    }

    pub fn score(&self, category: usize, subcategory: usize, entity: &str) -> i64 {
        self.record(category, subcategory, entity)
            .map(|record| record.score)
            .unwrap_or(0)
    }

    /// Every `(category index, subcategory index, category, subcategory)` in grid order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Category, &Subcategory)> {
        self.categories
            .iter()
            .enumerate()
            .flat_map(|(ci, category)| {
                category
                    .subcategories
                    .iter()
                    .enumerate()
                    .map(move |(si, subcategory)| (ci, si, category, subcategory))
            })
    }
}
