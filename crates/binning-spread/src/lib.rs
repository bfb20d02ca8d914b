//! Spread and shape statistics
//!
//! The scale and asymmetry measures that bin-count rules feed on:
//!
//! - [`Iqr`] / [`iqr`]: interquartile range (Freedman-Diaconis bin width)
//! - [`classical_skewness`]: Fisher-Pearson `g1` (Doane's correction term)
//! - [`skewness_standard_error`]: the normal-theory standard error of `g1`
//!
//! # Example
//!
//! ```rust
//! use binning_spread::{classical_skewness, iqr};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! assert_eq!(iqr(&data).unwrap(), 4.5);
//! assert!(classical_skewness(&data).unwrap().abs() < 1e-12);
//! ```

pub mod iqr;
pub mod moments;

pub use iqr::{iqr, Iqr};
pub use moments::{classical_skewness, skewness_standard_error};

pub use binning_core::{Error, Result};
