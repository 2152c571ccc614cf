//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use contrastar::prelude::*;
//! ```

pub use crate::error::{ContrastarError, Result};
pub use crate::hypothesis::{ttest_ind, TTest, TTestResult};
