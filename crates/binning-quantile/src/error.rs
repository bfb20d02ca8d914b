//! Quantile estimation errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("quantile of an empty sample is undefined")]
    EmptySample,

    /// Probability outside `[0, 1]`, or NaN
    #[error("probability {p} is outside [0, 1]")]
    ProbabilityOutOfRange { p: f64 },

    #[error(transparent)]
    Core(#[from] binning_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn ensure_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::ProbabilityOutOfRange { p })
    }
}

pub(crate) fn ensure_non_empty(sorted: &[f64]) -> Result<()> {
    if sorted.is_empty() {
        Err(Error::EmptySample)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_bounds() {
        assert!(ensure_probability(0.0).is_ok());
        assert!(ensure_probability(1.0).is_ok());
        assert_eq!(ensure_probability(1.5), Err(Error::ProbabilityOutOfRange { p: 1.5 }));
        assert!(ensure_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(ensure_non_empty(&[]), Err(Error::EmptySample));
        assert!(ensure_non_empty(&[1.0]).is_ok());
    }

    #[test]
    fn test_core_errors_pass_through() {
        let core = binning_core::Error::empty_input("quantile");
        let err: Error = core.clone().into();
        assert_eq!(err.to_string(), core.to_string());
    }
}
