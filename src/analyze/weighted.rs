use crate::types::matrix::Matrix;

/// Weighted mean of `entity`'s cells, rounded to the nearest integer.
///
/// Each cell weighs `category.weight/100 * subcategory.weight/100`; the sum of
/// those products normalizes the result, so weights need not add up to 100.
/// Returns `None` when the total weight is zero.
pub fn weighted_score(entity: &str, matrix: &Matrix) -> Option<i64> {
    let (weighted_sum, total_weight) = matrix.cells().fold(
        (0.0_f64, 0.0_f64),
        |(sum, total), (ci, si, category, subcategory)| {
            let weight = (category.weight / 100.0) * (subcategory.weight / 100.0);
            let score = matrix.score(ci, si, entity) as f64;
            (sum + score * weight, total + weight)
        },
    );

    if total_weight == 0.0 || !total_weight.is_finite() {
        return None;
    }
    Some((weighted_sum / total_weight).round() as i64)
}
