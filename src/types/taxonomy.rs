//! Document shapes as they appear on disk, before normalization.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    #[serde(alias = "name")]
    pub category: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub subcategories: Vec<RawSubcategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSubcategory {
    pub name: String,
    #[serde(default)]
    pub weight: Option<f64>,
    /// Entity scores in document order; the reference's order is the column order.
    #[serde(default)]
    pub scores: Map<String, Value>,
    /// Either one text for the whole subcategory or a per-entity object.
    #[serde(default)]
    pub reasoning: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
}

impl RawSubcategory {
    /// Reasoning text for `entity`, preferring `reasoning` over `description`.
    pub fn reasoning_for(&self, entity: &str) -> Option<&str> {
        self.reasoning
            .as_ref()
            .and_then(|value| text_for(value, entity))
            .or_else(|| {
                self.description
                    .as_ref()
                    .and_then(|value| text_for(value, entity))
            })
    }
}

fn text_for<'a>(value: &'a Value, entity: &str) -> Option<&'a str> {
    match value {
        Value::String(text) => Some(text.as_str()),
        Value::Object(map) => map.get(entity).and_then(Value::as_str),
        _ => None,
    }
}

/// The human evaluation set. Its shape is the grid every other source is aligned to.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTaxonomy {
    pub categories: Vec<RawCategory>,
}

impl ReferenceTaxonomy {
    /// Entity names from the first subcategory's score mapping.
    pub fn entities(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|category| category.subcategories.first())
            .next()
            .map(|subcategory| subcategory.scores.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn cell_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.subcategories.len())
            .sum()
    }
}

/// Vendor exports come either as a bare category list or wrapped under `categories`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VendorExport {
    Bare(Vec<RawCategory>),
    Wrapped {
        categories: Vec<RawCategory>,
        #[serde(default)]
        overall: BTreeMap<String, Value>,
    },
}

impl VendorExport {
    pub fn categories(&self) -> &[RawCategory] {
        match self {
            VendorExport::Wrapped { categories, .. } => categories,
            VendorExport::Bare(categories) => categories,
        }
    }

    pub fn overall_for(&self, entity: &str) -> Option<f64> {
        match self {
            VendorExport::Wrapped { overall, .. } => overall.get(entity).and_then(Value::as_f64),
            VendorExport::Bare(_) => None,
        }
    }
}

/// A vendor export re-indexed onto the reference grid.
///
/// `categories[i].subcategories[j]` is the vendor's data for reference category
/// `i`, subcategory `j`, or `None` when the vendor did not supply it.
#[derive(Debug, Clone, Default)]
pub struct AlignedExport {
    pub categories: Vec<Option<AlignedCategory>>,
    pub overall: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct AlignedCategory {
    pub subcategories: Vec<Option<RawSubcategory>>,
}

impl AlignedExport {
    pub fn subcategory(&self, category: usize, subcategory: usize) -> Option<&RawSubcategory> {
        self.categories
            .get(category)?
            .as_ref()?
            .subcategories
            .get(subcategory)?
            .as_ref()
    }
}
