//! The ordered numeric series every metric operates on.

use std::ops::Deref;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// An ordered sequence of periodic (monthly) fractional returns.
///
/// Order defines the time sequence used by cumulative metrics such as
/// [`max_drawdown`](super::max_drawdown). The series is never mutated by a
/// metric. Converting other containers into a `ReturnSeries` is the caller's
/// job; the `From` impls below cover the common ones.
///
/// A NaN entry marks a missing period; metrics skip it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnSeries(Vec<f64>);

impl ReturnSeries {
    /// Create a series from owned values.
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Coerce a slice of decimals into a series.
    ///
    /// Decimals that do not fit in an `f64` become NaN, which the metrics
    /// treat as a missing period.
    #[must_use]
    pub fn from_decimals(values: &[Decimal]) -> Self {
        values
            .iter()
            .map(|v| v.to_f64().unwrap_or(f64::NAN))
            .collect()
    }

    /// Borrow the underlying values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consume the series, returning the underlying values.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for ReturnSeries {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[f64]> for ReturnSeries {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for ReturnSeries {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for ReturnSeries {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for ReturnSeries {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for ReturnSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReturnSeries {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
