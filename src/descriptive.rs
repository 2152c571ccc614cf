//! Descriptive statistics over floating-point slices.
//!
//! Provides the arithmetic mean and population variance feeding the
//! hypothesis-testing module. Variance uses the population convention
//! (divisor n, no Bessel correction), equivalent to NumPy's `var` with
//! its default `ddof=0`.

/// Arithmetic mean of `data`.
///
/// Returns NaN for an empty slice.
///
/// # Examples
///
/// ```
/// use contrastar::descriptive::mean;
///
/// assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance of `data` (divisor n).
///
/// Returns NaN for an empty slice and 0.0 for a single observation.
#[must_use]
pub fn population_variance(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / data.len() as f64
}
