//! Histogram bin-edge calculation
//!
//! Given a numeric sample, this crate chooses how many bins a histogram
//! should have and returns the edges of that many equal-width bins spanning
//! the sample.
//!
//! # Key Features
//!
//! - **Classic bin-count rules**: Freedman-Diaconis, square root, Doane, Rice, Sturges
//! - **Forgiving estimation**: degenerate estimates (zero IQR, tiny samples,
//!   constant data) fall back to a default bin count instead of failing
//! - **Bounded output**: procedural estimates are capped at
//!   [`BinEdgeCalculator::MAX_BINS`]
//! - **Right-edge safety**: the last edge sits just above the sample maximum
//!   so the maximum is counted under half-open `[lo, hi)` binning
//!
//! # Examples
//!
//! ## Procedural Binning
//!
//! ```rust
//! use binning_histogram::{BinEdgeCalculator, BinningConfig, BinningProcedure};
//!
//! let data: Vec<f64> = (1..=10).map(f64::from).collect();
//! let config = BinningConfig::procedural(BinningProcedure::Sturges);
//! let edges = BinEdgeCalculator::new().compute(&data, &config).unwrap();
//!
//! assert_eq!(edges.num_bins(), 5);
//! assert_eq!(edges.lower(), 1.0);
//! assert_eq!(edges.upper(), 10.0 + BinEdgeCalculator::EPSILON);
//! ```
//!
//! ## Fixed Bin Count
//!
//! ```rust
//! use binning_histogram::{bin_edges, BinningConfig};
//!
//! let data: Vec<i64> = (1..=100).collect();
//! let edges = bin_edges(&data, &BinningConfig::fixed(4)).unwrap();
//! assert_eq!(edges.len(), 5);
//! ```
//!
//! ## Counting a Sample
//!
//! ```rust
//! use binning_histogram::{histogram, BinningConfig, BinningProcedure};
//!
//! let data = vec![1.0, 2.0, 2.5, 3.0, 3.2, 3.5, 9.0, 9.5, 10.0];
//! let hist = histogram(&data, &BinningConfig::procedural(BinningProcedure::SquareRoot)).unwrap();
//!
//! assert_eq!(hist.len(), 3);
//! assert_eq!(hist.total_count(), data.len());
//! for bin in hist.bins() {
//!     println!("{bin}");
//! }
//! ```
//!
//! ## Configuration Records
//!
//! ```rust
//! use binning_histogram::BinningConfig;
//!
//! let raw = r#"{"procedural": true, "procedure": "doane", "numBins": 10}"#;
//! let config: BinningConfig = serde_json::from_str(raw).unwrap();
//! assert_eq!(config.procedure, "doane");
//! ```

pub mod calculator;
pub mod config;
pub mod edges;
pub mod procedure;
pub mod rules;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use calculator::BinEdgeCalculator;
pub use config::{BinningConfig, BinningStrategy};
pub use edges::BinEdges;
pub use procedure::BinningProcedure;
pub use rules::{DoaneRule, FreedmanDiaconisRule, RiceRule, SquareRootRule, SturgesRule};
pub use traits::BinCountRule;
pub use types::{Histogram, HistogramBin};

pub use binning_core::{Error, Result, Sample};
use num_traits::ToPrimitive;

// Convenience functions
/// Compute bin edges with the default calculator limits
pub fn bin_edges<T: ToPrimitive>(sample: &[T], config: &BinningConfig) -> Result<BinEdges> {
    BinEdgeCalculator::new().compute(sample, config)
}

/// Compute bin edges and count the sample into them
pub fn histogram<T: ToPrimitive>(sample: &[T], config: &BinningConfig) -> Result<Histogram> {
    BinEdgeCalculator::new().histogram(sample, config)
}
