//! Small numeric helpers shared by the report pipeline.
//!
//! These are total over their inputs: degenerate shapes (empty slices,
//! single samples, zero variance) produce a defined default instead of
//! an error, since the callers treat them as data-quality conditions.

/// Arithmetic mean. Empty input yields 0.0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
///
/// Fewer than two samples yields 0.0: no spread is computable.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Pearson product-moment correlation coefficient over paired samples.
///
/// Returns `None` when the coefficient is undefined: mismatched or
/// too-short series, or zero variance on either side. Callers gate on
/// variance before calling, so `None` here is a belt check, not a
/// user-visible outcome.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|b| b * b).sum();

    let denom = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    if denom == 0.0 {
        return None;
    }

    Some((n * sum_xy - sum_x * sum_y) / denom)
}
