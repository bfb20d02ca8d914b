//! Higher-order moments
//!
//! Doane's rule needs the classical (moment-based) sample skewness.

use binning_core::{Error, Result};
use statrs::statistics::Statistics;

/// Fisher-Pearson coefficient of skewness `g1 = m3 / m2^(3/2)`
///
/// Uses the biased central moments (divisor `n`), i.e. no small-sample
/// correction. Returns `0.0` when the sample has zero variance.
pub fn classical_skewness(sample: &[f64]) -> Result<f64> {
    if sample.len() < 3 {
        return Err(Error::InsufficientData { expected: 3, actual: sample.len() });
    }

    let mean = sample.mean();
    let m2 = sample.population_variance();
    if m2 == 0.0 {
        return Ok(0.0);
    }

    let n = sample.len() as f64;
    let m3 = sample
        .iter()
        .map(|&x| {
            let d = x - mean;
            d * d * d
        })
        .sum::<f64>()
        / n;

    Ok(m3 / m2.powf(1.5))
}

/// Standard error of `g1` under normality, `sqrt(6(n-2) / ((n+1)(n+3)))`
///
/// Zero for `n == 2` and `NaN` for `n < 2`.
pub fn skewness_standard_error(n: usize) -> f64 {
    let n = n as f64;
    ((6.0 * (n - 2.0)) / ((n + 1.0) * (n + 3.0))).sqrt()
}
