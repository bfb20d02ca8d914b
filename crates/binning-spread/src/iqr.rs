//! Interquartile Range (IQR) estimator

use binning_core::{Error, Result};
use binning_quantile::{LinearInterpolation, QuantileEstimator};

/// Interquartile range `Q3 - Q1`
///
/// Generic over the quantile estimator so callers can pick the percentile
/// definition; defaults to linear interpolation between order statistics.
#[derive(Debug, Clone, Default)]
pub struct Iqr<Q = LinearInterpolation> {
    estimator: Q,
}

impl Iqr<LinearInterpolation> {
    pub fn new() -> Self {
        Self::with_estimator(LinearInterpolation)
    }
}

impl<Q: QuantileEstimator> Iqr<Q> {
    /// Create an IQR estimator backed by a specific quantile estimator
    pub fn with_estimator(estimator: Q) -> Self {
        Self { estimator }
    }

    /// IQR of data that is already sorted ascending
    pub fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        let quartiles = self
            .estimator
            .quantiles_sorted(sorted_data, &[0.25, 0.75])
            .map_err(|e| Error::Computation(format!("Quantile error: {e}")))?;
        Ok(quartiles[1] - quartiles[0])
    }

    /// IQR of unsorted data
    pub fn estimate(&self, data: &[f64]) -> Result<f64> {
        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.estimate_sorted(&sorted)
    }
}

/// IQR using linear-interpolation quartiles
pub fn iqr(data: &[f64]) -> Result<f64> {
    Iqr::new().estimate(data)
}
