//! Core types for histogram binning
//!
//! This crate holds the pieces every other binning-stats crate shares: the
//! unified [`Error`] type and the validated [`Sample`] that estimators and
//! the bin-edge calculator operate on.
//!
//! # Example
//!
//! ```rust
//! use binning_core::Sample;
//!
//! let sample = Sample::new(&[4.0, 1.0, 7.0]).unwrap();
//! assert_eq!(sample.min(), 1.0);
//! assert_eq!(sample.max(), 7.0);
//! assert!(Sample::new::<f64>(&[]).is_err());
//! ```

pub mod error;
pub mod sample;

// Re-export core types
pub use error::{Error, Result};
pub use sample::Sample;
