use super::color::{color_for, ColorBand};
use crate::types::matrix::Matrix;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub entity: String,
    pub score: i64,
    pub band: ColorBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// One grid row: a subcategory with a cell per entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub category: String,
    pub subcategory: String,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub entities: Vec<String>,
    pub rows: Vec<HeatmapRow>,
}

impl Heatmap {
    pub fn cell(&self, row: usize, entity: &str) -> Option<&HeatmapCell> {
        self.rows
            .get(row)?
            .cells
            .iter()
            .find(|cell| cell.entity == entity)
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).sum()
    }
}

pub fn heatmap(matrix: &Matrix) -> Heatmap {
    let rows = matrix
        .cells()
        .map(|(ci, si, category, subcategory)| HeatmapRow {
            category: category.name.clone(),
            subcategory: subcategory.name.clone(),
            cells: matrix
                .entities
                .iter()
                .map(|entity| {
                    let record = matrix.record(ci, si, entity);
                    let score = record.map(|record| record.score).unwrap_or(0);
                    HeatmapCell {
                        entity: entity.clone(),
                        score,
                        band: color_for(score),
                        reasoning: record.and_then(|record| record.reasoning.clone()),
                    }
                })
                .collect(),
        })
        .collect();

    Heatmap {
        entities: matrix.entities.clone(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::normalize::normalize_reference;
    use crate::types::taxonomy::ReferenceTaxonomy;
    use serde_json::json;

    #[test]
    fn one_cell_per_subcategory_and_entity() {
        let reference: ReferenceTaxonomy = serde_json::from_value(json!([
            {"category": "A", "weight": 50, "subcategories": [
                {"name": "a1", "weight": 50, "reasoning": "why", "scores": {"Meta": 0, "OpenAI": 55, "xAI": 100}},
                {"name": "a2", "weight": 50, "scores": {"OpenAI": 5}}
            ]},
            {"category": "B", "weight": 50, "subcategories": [
                {"name": "b1", "weight": 100, "scores": {}}
            ]}
        ]))
        .expect("reference should parse");
        let matrix = normalize_reference(&reference, &reference.entities(), "none");

        let grid = heatmap(&matrix);
        assert_eq!(grid.rows.len(), 3);
        assert_eq!(grid.cell_count(), 9);
        assert_eq!(grid.rows[2].category, "B");

        let openai = grid.cell(0, "OpenAI").expect("cell should exist");
        assert_eq!(openai.band.label, "≤60");
        assert_eq!(openai.reasoning.as_deref(), Some("why"));
        assert_eq!(grid.cell(0, "Meta").map(|cell| cell.band.label), Some("0"));
        assert_eq!(grid.cell(0, "xAI").map(|cell| cell.band.label), Some(">90"));
        assert_eq!(grid.cell(1, "xAI").map(|cell| cell.score), Some(0));
    }
}
