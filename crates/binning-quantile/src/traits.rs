//! The quantile estimator abstraction

use crate::Result;

/// A rule for reading the `p`-quantile off a sample
pub trait QuantileEstimator {
    /// Short identifier used in diagnostics
    fn name(&self) -> &'static str;

    /// `p`-quantile of `sorted_data`, which must be sorted ascending
    ///
    /// Fails for an empty slice or `p` outside `[0, 1]`.
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// `p`-quantile of unsorted data; sorts a copy
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.quantile_sorted(&sorted, p)
    }

    /// Several quantiles of the same sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }
}
