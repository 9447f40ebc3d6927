use crate::types::matrix::{Category, Matrix, ScoreRecord, Subcategory};
use crate::types::taxonomy::{AlignedExport, RawSubcategory, ReferenceTaxonomy};
use serde_json::Value;
use std::collections::BTreeMap;

/// The reference taxonomy as a matrix, with its own scores and rubric text.
pub fn normalize_reference(
    reference: &ReferenceTaxonomy,
    entities: &[String],
    placeholder: &str,
) -> Matrix {
    build_matrix(reference, entities, placeholder, |ci, si, _| {
        reference.categories.get(ci)?.subcategories.get(si)
    })
}

/// Overlays each entity's vendor export onto the reference grid.
///
/// Anything the export lacks degrades to score 0 without reasoning.
pub fn normalize(
    reference: &ReferenceTaxonomy,
    entities: &[String],
    exports: &BTreeMap<String, AlignedExport>,
    placeholder: &str,
) -> Matrix {
    build_matrix(reference, entities, placeholder, |ci, si, entity| {
        exports.get(entity)?.subcategory(ci, si)
    })
}

fn build_matrix<'a, F>(
    reference: &ReferenceTaxonomy,
    entities: &[String],
    placeholder: &str,
    lookup: F,
) -> Matrix
where
    F: Fn(usize, usize, &str) -> Option<&'a RawSubcategory>,
{
    let categories = reference
        .categories
        .iter()
        .enumerate()
        .map(|(ci, category)| Category {
            name: category.category.clone(),
            weight: category.weight.unwrap_or(0.0),
            subcategories: category
                .subcategories
                .iter()
                .enumerate()
                .map(|(si, subcategory)| Subcategory {
                    name: subcategory.name.clone(),
                    weight: subcategory.weight.unwrap_or(0.0),
                    scores: entities
                        .iter()
                        .map(|entity| {
                            let record = lookup(ci, si, entity.as_str())
                                .map(|source| record_for(source, entity, placeholder))
                                .unwrap_or_else(ScoreRecord::missing);
                            (entity.clone(), record)
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    Matrix {
        entities: entities.to_vec(),
        categories,
    }
}

fn record_for(source: &RawSubcategory, entity: &str, placeholder: &str) -> ScoreRecord {
    let score = source.scores.get(entity).map(score_value).unwrap_or(0);
    let reasoning = source
        .reasoning_for(entity)
        .map(str::trim)
        .filter(|text| !text.is_empty() && *text != placeholder.trim())
        .map(str::to_string);
    ScoreRecord { score, reasoning }
}

fn score_value(value: &Value) -> i64 {
    value
        .as_f64()
        .filter(|score| score.is_finite())
        .map(|score| score.round() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::export::align;
    use crate::types::taxonomy::VendorExport;
    use serde_json::json;

    const PLACEHOLDER: &str = "No reasoning provided";

    fn reference() -> ReferenceTaxonomy {
        serde_json::from_value(json!([
            {
                "category": "Risk assessment",
                "weight": 100,
                "subcategories": [
                    {"name": "Evals", "weight": 50, "description": "rubric text", "scores": {"Meta": 20, "OpenAI": 80}},
                    {"name": "Red-teaming", "weight": 50, "scores": {"Meta": 40}}
                ]
            },
            {
                "category": "Planning",
                "weight": null,
                "subcategories": [
                    {"name": "Safety plan", "scores": {"OpenAI": 30}}
                ]
            }
        ]))
        .expect("reference should parse")
    }

    fn exports(entries: Vec<(&str, serde_json::Value)>) -> BTreeMap<String, AlignedExport> {
        let reference = reference();
        entries
            .into_iter()
            .map(|(entity, document)| {
                let export: VendorExport =
                    serde_json::from_value(document).expect("export should parse");
                let aligned =
                    align("test", entity, &reference, &export).expect("export should align");
                (entity.to_string(), aligned)
            })
            .collect()
    }

    #[test]
    fn reference_matrix_fills_missing_entities_with_zero() {
        let reference = reference();
        let entities = reference.entities();
        let matrix = normalize_reference(&reference, &entities, PLACEHOLDER);

        assert_eq!(matrix.entities, vec!["Meta".to_string(), "OpenAI".to_string()]);
        assert_eq!(matrix.score(0, 0, "OpenAI"), 80);
        assert_eq!(matrix.score(0, 1, "OpenAI"), 0);
        assert_eq!(matrix.score(1, 0, "Meta"), 0);
        assert_eq!(matrix.categories[1].weight, 0.0);
        assert_eq!(
            matrix.record(0, 0, "Meta").and_then(|record| record.reasoning.as_deref()),
            Some("rubric text")
        );
    }

    #[test]
    fn every_entity_has_a_record_in_every_subcategory() {
        let reference = reference();
        let entities = reference.entities();
        let matrix = normalize(&reference, &entities, &BTreeMap::new(), PLACEHOLDER);

        for (_, _, _, subcategory) in matrix.cells() {
            for entity in &entities {
                let record = subcategory.scores.get(entity).expect("record should exist");
                assert_eq!(record, &ScoreRecord::missing());
            }
        }
    }

    #[test]
    fn vendor_missing_category_degrades_to_zero_without_reasoning() {
        let reference = reference();
        let entities = reference.entities();
        let exports = exports(vec![(
            "OpenAI",
            json!([{"category": "Risk assessment", "subcategories": [
                {"name": "Evals", "scores": {"OpenAI": 91}, "reasoning": "detailed"}
            ]}]),
        )]);

        let matrix = normalize(&reference, &entities, &exports, PLACEHOLDER);
        assert_eq!(matrix.score(0, 0, "OpenAI"), 91);
        assert_eq!(
            matrix.record(1, 0, "OpenAI"),
            Some(&ScoreRecord::missing())
        );
        assert_eq!(matrix.record(0, 1, "OpenAI"), Some(&ScoreRecord::missing()));
    }

    #[test]
    fn placeholder_reasoning_is_suppressed_and_description_is_fallback() {
        let reference = reference();
        let entities = reference.entities();
        let exports = exports(vec![(
            "Meta",
            json!({"categories": [{"category": "Risk assessment", "subcategories": [
                {"name": "Evals", "scores": {"Meta": 12.5}, "reasoning": "No reasoning provided"},
                {"name": "Red-teaming", "scores": {"Meta": "n/a"}, "description": "internal red team"}
            ]}]}),
        )]);

        let matrix = normalize(&reference, &entities, &exports, PLACEHOLDER);
        let evals = matrix.record(0, 0, "Meta").expect("record should exist");
        assert_eq!(evals.score, 13);
        assert_eq!(evals.reasoning, None);
        let red_team = matrix.record(0, 1, "Meta").expect("record should exist");
        assert_eq!(red_team.score, 0);
        assert_eq!(red_team.reasoning.as_deref(), Some("internal red team"));
    }

    #[test]
    fn normalize_does_not_read_other_entities_scores() {
        let reference = reference();
        let entities = reference.entities();
        let exports = exports(vec![(
            "Meta",
            json!([{"category": "Risk assessment", "subcategories": [
                {"name": "Evals", "scores": {"OpenAI": 99}}
            ]}]),
        )]);

        let matrix = normalize(&reference, &entities, &exports, PLACEHOLDER);
        assert_eq!(matrix.score(0, 0, "Meta"), 0);
        assert_eq!(matrix.score(0, 0, "OpenAI"), 0);
    }
}
