//! Frequency outlier tests used to drop boilerplate terms.
//!
//! A term is excluded when its frequency has a sample z-score above
//! [`Z_SCORE_THRESHOLD`] or sits above the upper Tukey fence Q3 + 1.5·IQR.

/// Frequencies with a z-score above this are treated as boilerplate.
pub const Z_SCORE_THRESHOLD: f64 = 2.0;

/// Tukey fence multiplier.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Sample mean and standard deviation (n − 1). `None` for fewer than two values
/// or zero spread.
pub fn mean_and_stddev(values: &[f64]) -> Option<(f64, f64)> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    if !variance.is_finite() || variance <= 0.0 {
        return None;
    }
    Some((mean, variance.sqrt()))
}

/// Z-score of every value; all zeros when the spread is undefined.
pub fn zscores(values: &[f64]) -> Vec<f64> {
    match mean_and_stddev(values) {
        Some((mean, stddev)) => values.iter().map(|v| (v - mean) / stddev).collect(),
        None => vec![0.0; values.len()],
    }
}

/// Q3 + multiplier·IQR, or `None` with fewer than four values or zero IQR.
pub fn upper_fence(values: &[f64], multiplier: f64) -> Option<f64> {
    if values.len() < 4 {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let q1 = percentile(&sorted, 25.0);
    let q3 = percentile(&sorted, 75.0);
    let iqr = q3 - q1;
    if iqr <= 0.0 || !iqr.is_finite() {
        return None;
    }
    Some(q3 + multiplier * iqr)
}

/// `true` for each value flagged by either test.
pub fn boilerplate_mask(values: &[f64]) -> Vec<bool> {
    let z = zscores(values);
    let fence = upper_fence(values, IQR_MULTIPLIER);
    values
        .iter()
        .zip(z)
        .map(|(&v, z)| z > Z_SCORE_THRESHOLD || fence.is_some_and(|f| v > f))
        .collect()
}

/// Percentile of sorted data using linear interpolation.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}
