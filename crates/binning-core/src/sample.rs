//! Validated numeric samples

use crate::error::{Error, Result};
use num_traits::ToPrimitive;

/// A non-empty sample of finite `f64` values
///
/// Construction copies and validates the caller's data once, so downstream
/// estimators can rely on `min`/`max` being finite and `len() >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl Sample {
    /// Validate and copy a slice of numbers
    ///
    /// Fails with [`Error::InvalidInput`] when the slice is empty or when a
    /// value does not convert to a finite `f64`.
    pub fn new<T: ToPrimitive>(data: &[T]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::empty_input("sample construction"));
        }

        let mut values = Vec::with_capacity(data.len());
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for (index, value) in data.iter().enumerate() {
            let v = value
                .to_f64()
                .filter(|v| v.is_finite())
                .ok_or_else(|| Error::non_finite(index))?;
            min = min.min(v);
            max = max.max(v);
            values.push(v);
        }

        Ok(Self { values, min, max })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest observation
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest observation
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// True when every observation has the same value
    pub fn is_constant(&self) -> bool {
        self.min == self.max
    }

    /// Observations in input order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Observations in ascending order
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = Error;

    fn try_from(data: &[f64]) -> Result<Self> {
        Self::new(data)
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = Error;

    fn try_from(data: Vec<f64>) -> Result<Self> {
        Self::new(&data)
    }
}
