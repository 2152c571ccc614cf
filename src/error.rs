//! Error types for contrastar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for contrastar operations.
///
/// Provides detailed context about failures: which sample was empty,
/// what the offending sample sizes were, and which configuration value
/// was out of range.
///
/// # Examples
///
/// ```
/// use contrastar::error::ContrastarError;
///
/// let err = ContrastarError::EmptySample {
///     which: "sample2".to_string(),
/// };
/// assert!(err.to_string().contains("sample2 has 0 elements"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ContrastarError {
    /// One of the input samples has no observations.
    EmptySample {
        /// Which argument was empty ("sample1" or "sample2")
        which: String,
    },

    /// Combined sample sizes leave no degrees of freedom.
    InvalidSampleSize {
        /// First sample size
        n1: usize,
        /// Second sample size
        n2: usize,
    },

    /// Pooled standard deviation is zero, so the t-statistic is undefined.
    DegenerateVariance {
        /// First sample size
        n1: usize,
        /// Second sample size
        n2: usize,
    },

    /// Significance level outside the open interval (0, 1).
    InvalidAlpha {
        /// Provided value
        value: f64,
    },
}

impl fmt::Display for ContrastarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContrastarError::EmptySample { which } => {
                write!(f, "empty sample: {which} has 0 elements")
            }
            ContrastarError::InvalidSampleSize { n1, n2 } => {
                write!(
                    f,
                    "invalid sample sizes: n1={n1}, n2={n2} leave no degrees of freedom (need n1 + n2 > 2)"
                )
            }
            ContrastarError::DegenerateVariance { n1, n2 } => {
                write!(
                    f,
                    "degenerate variance: pooled standard deviation of {n1}+{n2} observations is zero, t-statistic is undefined"
                )
            }
            ContrastarError::InvalidAlpha { value } => {
                write!(
                    f,
                    "invalid significance level: alpha = {value}, expected 0 < alpha < 1"
                )
            }
        }
    }
}

impl std::error::Error for ContrastarError {}

impl ContrastarError {
    /// Create an empty-sample error naming the offending argument
    #[must_use]
    pub fn empty_sample(which: &str) -> Self {
        Self::EmptySample {
            which: which.to_string(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for ContrastarError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<ContrastarError> for &str {
    fn eq(&self, other: &ContrastarError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ContrastarError>;
