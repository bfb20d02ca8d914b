//! Histogram bin-edge estimation
//!
//! Umbrella crate re-exporting the binning-stats workspace:
//!
//! - [`base`]: error type and validated samples
//! - [`quantile`]: percentile estimation
//! - [`spread`]: IQR and skewness
//! - [`histogram`]: bin-count rules, configuration and the bin-edge calculator
//!
//! # Example
//!
//! ```rust
//! use binning_stats::{bin_edges, BinningConfig, BinningProcedure};
//!
//! let data = vec![2.0, 3.5, 3.9, 4.1, 4.4, 5.0, 6.2, 7.7, 9.8, 12.0];
//! let edges = bin_edges(&data, &BinningConfig::procedural(BinningProcedure::Sturges)).unwrap();
//! assert_eq!(edges.num_bins(), 5);
//! assert_eq!(edges.lower(), 2.0);
//! ```

pub use binning_core as base;
pub use binning_histogram as histogram;
pub use binning_quantile as quantile;
pub use binning_spread as spread;

pub use binning_core::{Error, Result, Sample};
pub use binning_histogram::{
    bin_edges, BinCountRule, BinEdgeCalculator, BinEdges, BinningConfig, BinningProcedure,
    BinningStrategy, Histogram, HistogramBin,
};
