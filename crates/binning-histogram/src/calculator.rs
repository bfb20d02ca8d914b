//! Bin edge calculation

use crate::config::{BinningConfig, BinningStrategy};
use crate::edges::BinEdges;
use crate::types::Histogram;
use binning_core::{Result, Sample};
use num_traits::ToPrimitive;
use tracing::{debug, instrument, trace};

/// Computes histogram bin edges for a sample
///
/// The calculator owns the limits applied to procedural estimates: the
/// estimate is floored, capped at `max_bins`, and replaced with
/// `default_bins` when it is not a positive finite count. Explicit
/// (non-procedural) bin counts are used as given.
///
/// Edges span `[min, max + EPSILON]` so that the sample maximum lands inside
/// the last half-open bin. When that span is too narrow to hold distinct
/// edges at the sample's magnitude it is widened around the sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinEdgeCalculator {
    default_bins: usize,
    max_bins: usize,
}

impl BinEdgeCalculator {
    /// Bin count used when a procedural estimate is degenerate
    pub const DEFAULT_BINS: usize = 10;
    /// Upper bound on procedural bin counts
    pub const MAX_BINS: usize = 20;
    /// Offset added to the sample maximum to form the last edge
    pub const EPSILON: f64 = 1e-8;

    pub fn new() -> Self {
        Self {
            default_bins: Self::DEFAULT_BINS,
            max_bins: Self::MAX_BINS,
        }
    }

    /// Override the fallback bin count (at least 1)
    pub fn with_default_bins(mut self, default_bins: usize) -> Self {
        self.default_bins = default_bins.max(1);
        self
    }

    /// Override the cap on procedural bin counts
    pub fn with_max_bins(mut self, max_bins: usize) -> Self {
        self.max_bins = max_bins;
        self
    }

    pub fn default_bins(&self) -> usize {
        self.default_bins
    }

    pub fn max_bins(&self) -> usize {
        self.max_bins
    }

    /// Compute bin edges for `sample` as configured by `config`
    ///
    /// Fails with `InvalidInput` for an empty or non-numeric sample and with
    /// `InvalidConfig` for an unknown procedure (when procedural) or a zero
    /// explicit bin count. An explicit count too large to allocate fails
    /// with `Computation`.
    pub fn compute<T: ToPrimitive>(
        &self,
        sample: &[T],
        config: &BinningConfig,
    ) -> Result<BinEdges> {
        let sample = Sample::new(sample)?;
        let strategy = config.strategy()?;
        if config.nice_bins {
            trace!("nice bin rounding requested; edges are left unrounded");
        }
        self.compute_with_strategy(&sample, strategy)
    }

    /// Compute bin edges for an already validated sample
    #[instrument(level = "debug", skip(self, sample), fields(n = sample.len()))]
    pub fn compute_with_strategy(
        &self,
        sample: &Sample,
        strategy: BinningStrategy,
    ) -> Result<BinEdges> {
        let num_bins = self.bin_count(sample, strategy)?;
        let (min, max) = (sample.min(), sample.max());
        debug!(min, max, num_bins, "computing uniform bin edges");

        let edges = BinEdges::uniform(min, max + Self::EPSILON, num_bins)?;
        debug!(edges = ?edges.as_slice(), "bin edges");
        Ok(edges)
    }

    /// Effective number of bins for `sample`
    pub fn bin_count(&self, sample: &Sample, strategy: BinningStrategy) -> Result<usize> {
        let procedure = match strategy {
            BinningStrategy::Fixed(num_bins) => return Ok(num_bins),
            BinningStrategy::Procedural(procedure) => procedure,
        };

        // A constant sample has no spread to estimate from
        if sample.is_constant() {
            debug!(
                %procedure,
                default_bins = self.default_bins,
                "constant sample, using default bin count"
            );
            return Ok(self.default_bins);
        }

        let raw = procedure.raw_bin_count(sample)?;
        let num_bins = self.clamp_estimate(raw);
        debug!(%procedure, raw, num_bins, "estimated bin count");
        Ok(num_bins)
    }

    /// Floor, cap and fall back
    fn clamp_estimate(&self, raw: f64) -> usize {
        let floored = raw.floor();
        if !floored.is_finite() || floored < 1.0 {
            return self.default_bins;
        }
        let capped = floored.to_usize().unwrap_or(usize::MAX).min(self.max_bins);
        if capped == 0 {
            self.default_bins
        } else {
            capped
        }
    }

    /// Compute bin edges and count the sample into them
    pub fn histogram<T: ToPrimitive>(
        &self,
        sample: &[T],
        config: &BinningConfig,
    ) -> Result<Histogram> {
        let validated = Sample::new(sample)?;
        let edges = self.compute_with_strategy(&validated, config.strategy()?)?;
        Ok(Histogram::from_values(edges, validated.values()))
    }
}

impl Default for BinEdgeCalculator {
    fn default() -> Self {
        Self::new()
    }
}
