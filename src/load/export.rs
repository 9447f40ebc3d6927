use crate::error::{Result, ScorecardError};
use crate::types::taxonomy::{
    AlignedCategory, AlignedExport, RawCategory, ReferenceTaxonomy, VendorExport,
};

/// Re-indexes `export` onto the reference grid by category and subcategory name.
///
/// Names the reference does not know fail the load. Reference positions the
/// vendor leaves out stay `None` and score 0 downstream.
pub fn align(
    source_name: &str,
    entity: &str,
    reference: &ReferenceTaxonomy,
    export: &VendorExport,
) -> Result<AlignedExport> {
    let mut categories: Vec<Option<AlignedCategory>> = vec![None; reference.categories.len()];

    for vendor_category in export.categories() {
        let Some(ci) = position_of(&reference.categories, &vendor_category.category) else {
            return Err(ScorecardError::Alignment {
                source_name: source_name.to_string(),
                level: "category",
                parent: "taxonomy".to_string(),
                found: vendor_category.category.clone(),
            });
        };
        if categories[ci].is_some() {
            tracing::warn!(
                source = source_name,
                category = %vendor_category.category,
                "duplicate category in vendor export; keeping the first"
            );
            continue;
        }

        let reference_category = &reference.categories[ci];
        let mut subcategories = vec![None; reference_category.subcategories.len()];
        for vendor_subcategory in &vendor_category.subcategories {
            let target = normalize_name(&vendor_subcategory.name);
            let Some(si) = reference_category
                .subcategories
                .iter()
                .position(|subcategory| normalize_name(&subcategory.name) == target)
            else {
                return Err(ScorecardError::Alignment {
                    source_name: source_name.to_string(),
                    level: "subcategory",
                    parent: reference_category.category.clone(),
                    found: vendor_subcategory.name.clone(),
                });
            };
            if subcategories[si].is_none() {
                subcategories[si] = Some(vendor_subcategory.clone());
            }
        }

        let supplied = subcategories.iter().filter(|slot| slot.is_some()).count();
        tracing::debug!(
            source = source_name,
            category = %reference_category.category,
            supplied,
            expected = subcategories.len(),
            "aligned vendor category"
        );
        categories[ci] = Some(AlignedCategory { subcategories });
    }

    Ok(AlignedExport {
        categories,
        overall: export.overall_for(entity),
    })
}

fn position_of(categories: &[RawCategory], name: &str) -> Option<usize> {
    let target = normalize_name(name);
    categories
        .iter()
        .position(|category| normalize_name(&category.category) == target)
}

fn normalize_name(name: &str) -> &str {
    name.trim()
}
