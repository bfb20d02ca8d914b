//! Bin edge sequences

use crate::types::Histogram;
use binning_core::{Error, Result};
use serde::Serialize;
use std::ops::Deref;

/// Ordered boundaries of contiguous histogram bins
///
/// Always holds at least two finite, strictly increasing values, so
/// `num_bins() == len() - 1 >= 1`. Bins are half-open `[lo, hi)` except the
/// last, which also contains its right edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BinEdges(Vec<f64>);

impl BinEdges {
    /// `num_bins` equal-width bins spanning `[lo, hi]`
    ///
    /// Edge `i` is `lo + i * step`; the last edge is exactly `hi`. When the
    /// span is too narrow for `num_bins` distinct edges at this magnitude
    /// (including a zero-width span), it is widened symmetrically by
    /// `max(0.5, num_bins * ulp-scale)` on each side.
    pub(crate) fn uniform(lo: f64, hi: f64, num_bins: usize) -> Result<Self> {
        let len = num_bins.checked_add(1).ok_or_else(|| {
            Error::Computation(format!("{num_bins} bins overflow the edge count"))
        })?;
        let mut edges = Vec::new();
        edges.try_reserve_exact(len).map_err(|e| {
            Error::Computation(format!("cannot allocate {len} bin edges: {e}"))
        })?;

        fill_uniform(&mut edges, lo, hi, num_bins);
        if is_strictly_increasing(&edges) {
            return Ok(Self(edges));
        }

        let half = 0.5f64.max(lo.abs().max(hi.abs()) * f64::EPSILON * num_bins as f64);
        let (lo, hi) = (lo - half, hi + half);
        edges.clear();
        fill_uniform(&mut edges, lo, hi, num_bins);
        if is_strictly_increasing(&edges) {
            Ok(Self(edges))
        } else {
            Err(Error::Computation(format!(
                "{num_bins} bins are too narrow to separate around {lo}"
            )))
        }
    }

    /// Wrap externally produced edges, checking the invariants
    pub fn from_vec(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "bin edges need at least 2 values, got {}",
                edges.len()
            )));
        }
        if let Some(i) = edges.iter().position(|e| !e.is_finite()) {
            return Err(Error::non_finite(i));
        }
        if let Some(i) = edges.windows(2).position(|w| w[0] >= w[1]) {
            return Err(Error::InvalidInput(format!(
                "bin edges must be strictly increasing (edge {} >= edge {})",
                i,
                i + 1
            )));
        }
        Ok(Self(edges))
    }

    /// Number of bins
    pub fn num_bins(&self) -> usize {
        self.0.len() - 1
    }

    /// Left edge of the first bin
    pub fn lower(&self) -> f64 {
        self.0[0]
    }

    /// Right edge of the last bin
    pub fn upper(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Edges as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Take ownership of the edge values
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Width of each bin
    pub fn widths(&self) -> Vec<f64> {
        self.0.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Index of the bin containing `value`, if any
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        if !(value >= self.lower() && value <= self.upper()) {
            return None;
        }
        if value == self.upper() {
            return Some(self.num_bins() - 1);
        }
        Some(self.0.partition_point(|&e| e <= value) - 1)
    }

    /// Count `values` into these bins
    ///
    /// Values outside `[lower, upper]` and NaNs are not counted.
    pub fn histogram(&self, values: &[f64]) -> Histogram {
        Histogram::from_values(self.clone(), values)
    }
}

fn fill_uniform(edges: &mut Vec<f64>, lo: f64, hi: f64, num_bins: usize) {
    let step = (hi - lo) / num_bins as f64;
    edges.extend((0..num_bins).map(|i| lo + i as f64 * step));
    edges.push(hi);
}

fn is_strictly_increasing(edges: &[f64]) -> bool {
    edges.windows(2).all(|w| w[0] < w[1])
}

impl Deref for BinEdges {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for BinEdges {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<BinEdges> for Vec<f64> {
    fn from(edges: BinEdges) -> Self {
        edges.0
    }
}
