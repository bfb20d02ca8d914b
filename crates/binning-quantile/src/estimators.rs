//! Concrete quantile estimators

use crate::error::{ensure_non_empty, ensure_probability};
use crate::traits::QuantileEstimator;
use crate::Result;

/// Linear interpolation between order statistics (Hyndman-Fan type 7)
///
/// The virtual index of probability `p` in a sample of size `n` is
/// `h = (n - 1) * p`; the estimate interpolates between `x[floor(h)]` and
/// `x[floor(h) + 1]`. This is the default percentile definition of most
/// numerical libraries, so IQR-based rules built on it reproduce the usual
/// reference values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

impl LinearInterpolation {
    pub fn new() -> Self {
        Self
    }
}

/// Interpolate from `a` toward `b`, evaluated from the nearer endpoint
///
/// Evaluating from `b` when `t >= 0.5` keeps `lerp(a, b, 1.0) == b` exact.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

impl QuantileEstimator for LinearInterpolation {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        ensure_non_empty(sorted_data)?;
        ensure_probability(p)?;

        let n = sorted_data.len();
        if n == 1 {
            return Ok(sorted_data[0]);
        }

        let h = (n - 1) as f64 * p;
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(n - 1);
        let t = h - lo as f64;

        Ok(lerp(sorted_data[lo], sorted_data[hi], t))
    }
}
