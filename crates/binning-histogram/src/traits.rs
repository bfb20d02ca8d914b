//! Core traits for bin-count estimation

use binning_core::{Result, Sample};

/// A heuristic that estimates how many bins a histogram of a sample should have
pub trait BinCountRule {
    /// Short identifier used in diagnostics
    fn name(&self) -> &'static str;

    /// Raw estimate before flooring, clamping or fallback
    ///
    /// Rules do not guard against degenerate samples: a zero IQR or a sample
    /// too small for the formula yields `NaN`, an infinity or a value below
    /// one, and the caller decides what to do with it.
    fn raw_bin_count(&self, sample: &Sample) -> Result<f64>;
}
