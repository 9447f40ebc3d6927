use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Correlation {
    Coefficient(f64),
    /// One of the series is constant (or there are fewer than two points).
    InsufficientVariance,
}

impl Correlation {
    pub fn coefficient(&self) -> Option<f64> {
        match self {
            Correlation::Coefficient(r) => Some(*r),
            Correlation::InsufficientVariance => None,
        }
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correlation::Coefficient(r) => write!(f, "{r:.3}"),
            Correlation::InsufficientVariance => f.write_str("undefined (insufficient variance)"),
        }
    }
}

/// Pearson's r over paired observations, using the sum-based formula
/// `(nΣxy − ΣxΣy) / sqrt((nΣx² − (Σx)²)(nΣy² − (Σy)²))`.
pub fn pearson(pairs: &[(f64, f64)]) -> Correlation {
    let Some(&(first_x, first_y)) = pairs.first() else {
        return Correlation::InsufficientVariance;
    };
    // Cancellation in the sum formula leaves a tiny positive spread for some
    // constant fractional series, so constancy is checked on the values.
    if pairs.iter().all(|&(x, _)| x == first_x) || pairs.iter().all(|&(_, y)| y == first_y) {
        return Correlation::InsufficientVariance;
    }

    let n = pairs.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_x2, sum_y2) = pairs.iter().fold(
        (0.0, 0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sx2, sy2), (x, y)| (sx + x, sy + y, sxy + x * y, sx2 + x * x, sy2 + y * y),
    );

    let numerator = n * sum_xy - sum_x * sum_y;
    let spread_x = n * sum_x2 - sum_x * sum_x;
    let spread_y = n * sum_y2 - sum_y * sum_y;
    if spread_x <= 0.0 || spread_y <= 0.0 {
        return Correlation::InsufficientVariance;
    }

    let r = numerator / (spread_x * spread_y).sqrt();
    if !r.is_finite() {
        return Correlation::InsufficientVariance;
    }
    Correlation::Coefficient(r.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(correlation: Correlation, expected: f64) {
        let r = correlation
            .coefficient()
            .expect("correlation should be defined");
        assert!((r - expected).abs() < 1e-9, "expected {expected}, got {r}");
    }

    #[test]
    fn identical_series_correlate_perfectly() {
        let pairs: Vec<(f64, f64)> = [0.0, 12.0, 35.0, 50.0, 88.0, 100.0]
            .iter()
            .map(|x| (*x, *x))
            .collect();
        assert_close(pearson(&pairs), 1.0);
    }

    #[test]
    fn mirrored_series_correlate_negatively() {
        let pairs: Vec<(f64, f64)> = [3.0, 20.0, 41.0, 67.0, 90.0]
            .iter()
            .map(|x| (*x, 100.0 - x))
            .collect();
        assert_close(pearson(&pairs), -1.0);
    }

    #[test]
    fn constant_series_is_undefined_not_zero() {
        let pairs = [(10.0, 50.0), (20.0, 50.0), (70.0, 50.0)];
        assert_eq!(pearson(&pairs), Correlation::InsufficientVariance);

        let pairs = [(40.0, 10.0), (40.0, 30.0)];
        assert_eq!(pearson(&pairs), Correlation::InsufficientVariance);
    }

    #[test]
    fn fractional_constant_series_is_undefined() {
        for y in [0.1, 12.3, 57.9, 66.6] {
            let pairs: Vec<(f64, f64)> = (1..=6).map(|i| (f64::from(i) * 10.0, y)).collect();
            assert_eq!(
                pearson(&pairs),
                Correlation::InsufficientVariance,
                "constant y = {y} must not produce a coefficient"
            );
        }

        let pairs = [(33.3, 10.0), (33.3, 45.0), (33.3, 90.0)];
        assert_eq!(pearson(&pairs), Correlation::InsufficientVariance);
    }

    #[test]
    fn too_few_points_are_undefined() {
        assert_eq!(pearson(&[]), Correlation::InsufficientVariance);
        assert_eq!(pearson(&[(5.0, 9.0)]), Correlation::InsufficientVariance);
    }

    #[test]
    fn known_dataset_matches_reference_value() {
        let pairs = [(1.0, 2.0), (2.0, 4.0), (3.0, 5.0), (4.0, 4.0), (5.0, 5.0)];
        assert_close(pearson(&pairs), 0.7745966692414834);
    }

    #[test]
    fn display_uses_three_decimals() {
        assert_eq!(Correlation::Coefficient(0.77459).to_string(), "0.775");
        assert_eq!(
            Correlation::InsufficientVariance.to_string(),
            "undefined (insufficient variance)"
        );
    }
}
