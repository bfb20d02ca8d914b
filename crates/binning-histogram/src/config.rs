//! Binning configuration
//!
//! [`BinningConfig`] is the loosely-typed record callers hand in (it may come
//! straight from a JSON settings blob). [`BinningStrategy`] is the validated
//! form the calculator works with.

use crate::procedure::BinningProcedure;
use binning_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied binning options
///
/// `procedure` is kept as a name so that an unrecognised value only fails
/// when it is actually used, i.e. when `procedural` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BinningConfig {
    /// Derive the bin count from `procedure` (true) or use `num_bins` (false)
    pub procedural: bool,
    /// Name of the bin-count procedure
    pub procedure: String,
    /// Explicit bin count, used when `procedural` is false
    #[serde(alias = "num_bins")]
    pub num_bins: usize,
    /// Round edges to human-friendly values. Accepted but not applied.
    #[serde(alias = "nice_bins")]
    pub nice_bins: bool,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            procedural: true,
            procedure: BinningProcedure::Freedman.as_str().to_string(),
            num_bins: 10,
            nice_bins: true,
        }
    }
}

impl BinningConfig {
    /// Procedural binning with the given procedure
    pub fn procedural(procedure: BinningProcedure) -> Self {
        Self {
            procedural: true,
            procedure: procedure.as_str().to_string(),
            ..Self::default()
        }
    }

    /// A fixed number of equal-width bins
    pub fn fixed(num_bins: usize) -> Self {
        Self {
            procedural: false,
            num_bins,
            ..Self::default()
        }
    }

    /// Set the nice-bins flag
    pub fn with_nice_bins(mut self, nice_bins: bool) -> Self {
        self.nice_bins = nice_bins;
        self
    }

    /// Validate into a [`BinningStrategy`]
    pub fn strategy(&self) -> Result<BinningStrategy> {
        BinningStrategy::try_from(self)
    }
}

/// How the bin count is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinningStrategy {
    /// Estimate the count with a procedure, then floor, clamp and fall back
    Procedural(BinningProcedure),
    /// Use exactly this many bins
    Fixed(usize),
}

impl TryFrom<&BinningConfig> for BinningStrategy {
    type Error = Error;

    fn try_from(config: &BinningConfig) -> Result<Self> {
        if config.procedural {
            return Ok(Self::Procedural(config.procedure.parse()?));
        }
        if config.num_bins == 0 {
            return Err(Error::InvalidConfig(
                "num_bins must be positive when procedural binning is disabled".to_string(),
            ));
        }
        Ok(Self::Fixed(config.num_bins))
    }
}

impl From<BinningProcedure> for BinningStrategy {
    fn from(procedure: BinningProcedure) -> Self {
        Self::Procedural(procedure)
    }
}

impl fmt::Display for BinningStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Procedural(procedure) => write!(f, "procedural({procedure})"),
            Self::Fixed(num_bins) => write!(f, "fixed({num_bins})"),
        }
    }
}
