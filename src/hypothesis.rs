//! Independent two-sample Student's t-test.
//!
//! Implements the pooled-variance form: given two samples, test
//! H₀: μ₁ = μ₂ against the two-sided alternative H₁: μ₁ ≠ μ₂ under the
//! assumption of equal population variances.
//!
//! Pooling feeds on population variances (divisor n), so results
//! reproduce pipelines built on NumPy's default `ddof=0` rather than
//! textbook Bessel-corrected pooling.
//!
//! # Example
//!
//! ```
//! use contrastar::hypothesis::ttest_ind;
//!
//! let group1 = [2.0, 4.0, 6.0, 8.0];
//! let group2 = [1.0, 3.0, 5.0, 7.0];
//!
//! let result = ttest_ind(&group1, &group2).expect("valid t-test inputs");
//! assert!((result.statistic - 0.6324555320336759).abs() < 1e-12);
//! assert!((result.p_value - 0.5504150390625).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::descriptive::{mean, population_variance};
use crate::distribution::students_t_two_tailed_p;
use crate::error::{ContrastarError, Result};

/// Result of an independent two-sample t-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    /// t-statistic
    pub statistic: f64,

    /// p-value (two-tailed)
    pub p_value: f64,
}

/// Configuration for the independent two-sample t-test.
///
/// Carries the significance level `alpha` (default 0.05). The level is
/// validated by [`TTest::compute`] but does not enter the returned
/// statistic or p-value; callers compare `p_value < alpha` themselves.
///
/// # Examples
///
/// ```
/// use contrastar::hypothesis::TTest;
///
/// let test = TTest::new().with_alpha(0.01);
/// assert!((test.alpha() - 0.01).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTest {
    alpha: f64,
}

impl Default for TTest {
    fn default() -> Self {
        Self { alpha: 0.05 }
    }
}

impl TTest {
    /// Create a t-test configuration with the conventional alpha = 0.05.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the significance level.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Configured significance level.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Run the pooled-variance t-test on two independent samples.
    ///
    /// # Arguments
    ///
    /// * `sample1` - First sample
    /// * `sample2` - Second sample
    ///
    /// # Returns
    ///
    /// `TTestResult` with the t-statistic and two-tailed p-value.
    /// Non-finite observations are not screened; they propagate to NaN
    /// outputs the way they would through a NumPy pipeline.
    pub fn compute(&self, sample1: &[f64], sample2: &[f64]) -> Result<TTestResult> {
        if self.alpha.is_nan() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(ContrastarError::InvalidAlpha { value: self.alpha });
        }
        if sample1.is_empty() {
            return Err(ContrastarError::empty_sample("sample1"));
        }
        if sample2.is_empty() {
            return Err(ContrastarError::empty_sample("sample2"));
        }

        let n1 = sample1.len();
        let n2 = sample2.len();
        if n1 + n2 <= 2 {
            return Err(ContrastarError::InvalidSampleSize { n1, n2 });
        }

        let mean1 = mean(sample1);
        let mean2 = mean(sample2);
        let var1 = population_variance(sample1);
        let var2 = population_variance(sample2);

        let df = (n1 + n2 - 2) as f64;
        let pooled_var = ((n1 - 1) as f64 * var1 + (n2 - 1) as f64 * var2) / df;
        let s = pooled_var.sqrt();
        // Exact zero only: both samples are constant.
        if s == 0.0 {
            return Err(ContrastarError::DegenerateVariance { n1, n2 });
        }

        let statistic = (mean1 - mean2) / (s * (1.0 / n1 as f64 + 1.0 / n2 as f64).sqrt());
        let p_value = students_t_two_tailed_p(statistic, df);

        Ok(TTestResult { statistic, p_value })
    }
}

/// Independent two-sample t-test with the default configuration.
///
/// Equivalent to `TTest::new().compute(sample1, sample2)`.
///
/// # Arguments
///
/// * `sample1` - First sample
/// * `sample2` - Second sample
///
/// # Returns
///
/// `TTestResult` with the t-statistic and two-tailed p-value.
pub fn ttest_ind(sample1: &[f64], sample2: &[f64]) -> Result<TTestResult> {
    TTest::new().compute(sample1, sample2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        // mean1 = 5, mean2 = 4, var1 = var2 = 5 (population), df = 6,
        // s = √5, t = 1/√2.5, p = I_{15/16}(3, 1/2) = 4509/8192.
        let result = ttest_ind(&[2.0, 4.0, 6.0, 8.0], &[1.0, 3.0, 5.0, 7.0]).expect("valid input");
        assert!((result.statistic - 0.6324555320336759).abs() < 1e-12);
        assert!((result.p_value - 0.5504150390625).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry_negates_statistic() {
        let a = [1.2, 3.4, 5.6, 7.8];
        let b = [2.0, 2.5, 9.0];
        let ab = ttest_ind(&a, &b).expect("valid input");
        let ba = ttest_ind(&b, &a).expect("valid input");
        assert!((ab.statistic + ba.statistic).abs() < 1e-15);
        assert!((ab.p_value - ba.p_value).abs() < 1e-15);
    }

    #[test]
    fn test_identical_samples_give_zero_statistic() {
        let a = [1.0, 2.0, 3.0, 4.5];
        let result = ttest_ind(&a, &a).expect("valid input");
        assert!(result.statistic.abs() < 1e-15);
        assert!((result.p_value - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_shift_invariance() {
        let base = ttest_ind(&[2.0, 4.0, 6.0, 8.0], &[1.0, 3.0, 5.0, 7.0]).expect("valid input");
        let shifted =
            ttest_ind(&[102.0, 104.0, 106.0, 108.0], &[101.0, 103.0, 105.0, 107.0])
                .expect("valid input");
        assert!((base.statistic - shifted.statistic).abs() < 1e-12);
        assert!((base.p_value - shifted.p_value).abs() < 1e-12);
    }

    #[test]
    fn test_pvalue_within_unit_interval() {
        let cases: [(&[f64], &[f64]); 3] = [
            (&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]),
            (&[1.0, 1.1, 0.9], &[50.0, 51.0, 49.0]),
            (&[-3.0, 0.0, 3.0], &[-2.9, 0.1, 3.1]),
        ];
        for (a, b) in cases {
            let result = ttest_ind(a, b).expect("valid input");
            assert!(
                (0.0..=1.0).contains(&result.p_value),
                "p = {}",
                result.p_value
            );
        }
    }

    #[test]
    fn test_degenerate_variance_is_rejected() {
        let err = ttest_ind(&[5.0, 5.0, 5.0], &[5.0, 5.0, 5.0]).unwrap_err();
        assert!(matches!(
            err,
            ContrastarError::DegenerateVariance { n1: 3, n2: 3 }
        ));

        // Constant samples with different means are equally undefined.
        let err = ttest_ind(&[3.0, 3.0], &[7.0, 7.0, 7.0]).unwrap_err();
        assert!(matches!(err, ContrastarError::DegenerateVariance { .. }));
    }

    #[test]
    fn test_empty_sample_errors_name_the_argument() {
        let err = ttest_ind(&[], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            &err,
            ContrastarError::EmptySample { which } if which == "sample1"
        ));

        let err = ttest_ind(&[1.0, 2.0, 3.0], &[]).unwrap_err();
        assert!(err.to_string().contains("sample2 has 0 elements"));
    }

    #[test]
    fn test_insufficient_degrees_of_freedom() {
        let err = ttest_ind(&[1.0], &[2.0]).unwrap_err();
        assert!(matches!(
            err,
            ContrastarError::InvalidSampleSize { n1: 1, n2: 1 }
        ));
    }

    #[test]
    fn test_single_observation_against_triple() {
        // n1 = 1 is allowed as long as df = n1 + n2 - 2 > 0:
        // var1 = 0, pooled variance = var2 = 2/3, t = -3/√2, df = 2.
        let result = ttest_ind(&[1.0], &[2.0, 3.0, 4.0]).expect("valid input");
        assert!((result.statistic - (-2.1213203435596424)).abs() < 1e-12);
        assert!((result.p_value - 0.167_949_705_662_156).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_inputs_propagate_to_nan() {
        let result = ttest_ind(&[1.0, f64::NAN, 3.0], &[4.0, 5.0, 6.0]).expect("valid input");
        assert!(result.statistic.is_nan());
        assert!(result.p_value.is_nan());

        let result =
            ttest_ind(&[f64::INFINITY, 1.0, 2.0], &[3.0, 4.0, 5.0]).expect("valid input");
        assert!(result.statistic.is_nan());
        assert!(result.p_value.is_nan());
    }

    #[test]
    fn test_alpha_validation() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        for bad in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
            let err = TTest::new().with_alpha(bad).compute(&a, &b).unwrap_err();
            assert!(matches!(err, ContrastarError::InvalidAlpha { .. }), "alpha = {bad}");
        }
        assert!(TTest::new().with_alpha(0.5).compute(&a, &b).is_ok());
    }

    #[test]
    fn test_alpha_does_not_affect_outputs() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.5, 3.5, 4.5];
        let default = TTest::new().compute(&a, &b).expect("valid input");
        let strict = TTest::new().with_alpha(0.01).compute(&a, &b).expect("valid input");
        assert_eq!(default, strict);
    }

    #[test]
    fn test_builder_and_default() {
        assert!((TTest::new().alpha() - 0.05).abs() < 1e-15);
        assert!((TTest::new().with_alpha(0.01).alpha() - 0.01).abs() < 1e-15);
        assert_eq!(TTest::default(), TTest::new());
    }
}

#[cfg(test)]
#[path = "tests_hypothesis_contract.rs"]
mod tests_contract;
