//! Percentile estimation for bin-count rules
//!
//! The Freedman-Diaconis rule needs the first and third quartiles of a
//! sample. This crate provides the [`QuantileEstimator`] trait those rules are
//! generic over, plus [`LinearInterpolation`], the order-statistic
//! interpolation used by default.
//!
//! # Example
//!
//! ```rust
//! use binning_quantile::{LinearInterpolation, QuantileEstimator};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let est = LinearInterpolation::new();
//! let q1 = est.quantile_sorted(&data, 0.25).unwrap();
//! let q3 = est.quantile_sorted(&data, 0.75).unwrap();
//! assert_eq!(q3 - q1, 4.5);
//! ```

pub mod error;
pub mod estimators;
pub mod traits;

// Re-export main types
pub use error::{Error, Result};
pub use estimators::LinearInterpolation;
pub use traits::QuantileEstimator;
