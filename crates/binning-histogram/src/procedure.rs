//! Named bin-count procedures

use crate::rules::{DoaneRule, FreedmanDiaconisRule, RiceRule, SquareRootRule, SturgesRule};
use crate::traits::BinCountRule;
use binning_core::{Error, Result, Sample};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The bin-count estimators a procedural configuration can select
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinningProcedure {
    /// `(max - min) / (2 * IQR * n^(-1/3))`
    #[default]
    Freedman,
    /// `sqrt(n)`
    SquareRoot,
    /// `1 + log2(n) + log2(1 + |g1| / sigma_g1)`
    Doane,
    /// `2 * n^(-1/3)`
    Rice,
    /// `ceil(log2(n) + 1)`
    Sturges,
}

impl BinningProcedure {
    /// Every procedure, in declaration order
    pub const ALL: [BinningProcedure; 5] = [
        Self::Freedman,
        Self::SquareRoot,
        Self::Doane,
        Self::Rice,
        Self::Sturges,
    ];

    /// Configuration name of the procedure
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Freedman => "freedman",
            Self::SquareRoot => "square_root",
            Self::Doane => "doane",
            Self::Rice => "rice",
            Self::Sturges => "sturges",
        }
    }

    /// Unfloored, unclamped bin-count estimate for `sample`
    ///
    /// May be zero, negative, infinite or NaN on degenerate samples.
    pub fn raw_bin_count(&self, sample: &Sample) -> Result<f64> {
        match self {
            Self::Freedman => FreedmanDiaconisRule::new().raw_bin_count(sample),
            Self::SquareRoot => SquareRootRule.raw_bin_count(sample),
            Self::Doane => DoaneRule.raw_bin_count(sample),
            Self::Rice => RiceRule.raw_bin_count(sample),
            Self::Sturges => SturgesRule.raw_bin_count(sample),
        }
    }
}

impl fmt::Display for BinningProcedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinningProcedure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::unknown_procedure(s))
    }
}
