//! Histogram counts over a set of bin edges

use crate::edges::BinEdges;
use serde::Serialize;
use std::fmt;

/// View of one bin of a [`Histogram`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge, exclusive except for the last bin
    pub upper: f64,
    pub count: usize,
    /// `count / (total * width)`, so densities integrate to one
    pub density: f64,
}

impl HistogramBin {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn midpoint(&self) -> f64 {
        self.lower + self.width() / 2.0
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}) n={} density={:.4}",
            self.lower, self.upper, self.count, self.density
        )
    }
}

/// A sample counted into the bins of a [`BinEdges`]
///
/// Values outside `[lower, upper]` and NaNs are dropped, so `total_count()`
/// can be smaller than the number of values offered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    edges: BinEdges,
    counts: Vec<usize>,
    total: usize,
}

impl Histogram {
    /// Count `values` into `edges`
    pub fn from_values(edges: BinEdges, values: &[f64]) -> Self {
        let mut counts = vec![0usize; edges.num_bins()];
        for i in values.iter().filter_map(|&v| edges.bin_index(v)) {
            counts[i] += 1;
        }
        let total = counts.iter().sum();
        Self { edges, counts, total }
    }

    pub fn edges(&self) -> &BinEdges {
        &self.edges
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Never true for histograms built from [`BinEdges`]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of values that landed in a bin
    pub fn total_count(&self) -> usize {
        self.total
    }

    /// Bin `i`, if it exists
    pub fn bin(&self, i: usize) -> Option<HistogramBin> {
        let count = *self.counts.get(i)?;
        let (lower, upper) = (self.edges[i], self.edges[i + 1]);
        let width = upper - lower;
        let density = if self.total == 0 || width <= 0.0 {
            0.0
        } else {
            count as f64 / (self.total as f64 * width)
        };
        Some(HistogramBin { lower, upper, count, density })
    }

    /// All bins, left to right
    pub fn bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        (0..self.len()).filter_map(move |i| self.bin(i))
    }

    /// Index of the fullest bin (the leftmost on ties)
    pub fn mode_bin(&self) -> Option<usize> {
        let max = *self.counts.iter().max()?;
        self.counts.iter().position(|&c| c == max)
    }

    /// Share of the counted values in each bin
    pub fn proportions(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.len()];
        }
        self.counts
            .iter()
            .map(|&c| c as f64 / self.total as f64)
            .collect()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Histogram({} bins, n={})", self.len(), self.total)
    }
}
