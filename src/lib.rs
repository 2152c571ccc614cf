//! Contrastar: independent two-sample Student's t-test in pure Rust.
//!
//! Contrastar computes the pooled-variance two-sample t-test: a
//! t-statistic and its two-tailed p-value, with typed errors for the
//! inputs on which the test is undefined.
//!
//! Variance pooling follows the population convention (divisor n), so
//! results line up with NumPy/SciPy pipelines built on `np.var`'s
//! default `ddof=0`.
//!
//! # Quick Start
//!
//! ```
//! use contrastar::prelude::*;
//!
//! let group1 = [2.0, 4.0, 6.0, 8.0];
//! let group2 = [1.0, 3.0, 5.0, 7.0];
//!
//! let result = ttest_ind(&group1, &group2).unwrap();
//! assert!((result.statistic - 0.6325).abs() < 1e-4);
//! assert!((result.p_value - 0.5504).abs() < 1e-4);
//! assert!(result.p_value > 0.05); // no evidence the means differ
//! ```
//!
//! # Modules
//!
//! - [`hypothesis`]: The t-test itself (`TTest`, `ttest_ind`, `TTestResult`)
//! - [`descriptive`]: Mean and population variance
//! - [`distribution`]: Student's t CDF and supporting special functions
//! - [`error`]: Error and Result types

pub mod descriptive;
pub mod distribution;
pub mod error;
pub mod hypothesis;
pub mod prelude;

pub use error::{ContrastarError, Result};
pub use hypothesis::{ttest_ind, TTest, TTestResult};
