#[cfg(test)]
mod range_test;

use crate::constraint::NumericConstraint;

/// An inclusive interval over optional bounds.
///
/// A missing bound is open (±∞). `Empty` is a distinct state: no value is
/// contained, and it stays empty under further intersection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NumericRangeSet<T> {
    /// No value satisfies the range.
    Empty,
    /// Every value satisfies the range.
    #[default]
    Unbounded,
    /// At least one bound is present and `min <= max` whenever both are.
    Bounded { min: Option<T>, max: Option<T> },
}

impl<T: Copy + PartialOrd> NumericRangeSet<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        match (min, max) {
            (None, None) => NumericRangeSet::Unbounded,
            (Some(lo), Some(hi)) if hi < lo => NumericRangeSet::Empty,
            (min, max) => NumericRangeSet::Bounded { min, max },
        }
    }

    /// Range requested by `c`, with `exact` acting as both bounds.
    pub fn from_constraint<C>(c: &C) -> Self
    where
        C: NumericConstraint<Value = T>,
    {
        Self::new(c.effective_min(), c.effective_max())
    }

    /// Range requested by `c` relative to the native bounds `[lower, upper]`.
    ///
    /// Returns `Empty` when the request lies entirely outside the native bounds.
    /// Otherwise only the bounds that tighten the native interval are kept; a
    /// constraint never widens it.
    pub fn from_constraint_clamped<C>(c: &C, lower: T, upper: T) -> Self
    where
        C: NumericConstraint<Value = T>,
    {
        let min = c.effective_min();
        let max = c.effective_max();

        if max.is_some_and(|max| max < lower) || min.is_some_and(|min| min > upper) {
            return NumericRangeSet::Empty;
        }

        Self::new(
            min.filter(|min| *min >= lower),
            max.filter(|max| *max <= upper),
        )
    }

    pub fn min(&self) -> Option<T> {
        match self {
            NumericRangeSet::Bounded { min, .. } => *min,
            NumericRangeSet::Empty | NumericRangeSet::Unbounded => None,
        }
    }

    pub fn max(&self) -> Option<T> {
        match self {
            NumericRangeSet::Bounded { max, .. } => *max,
            NumericRangeSet::Empty | NumericRangeSet::Unbounded => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NumericRangeSet::Empty)
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, NumericRangeSet::Unbounded)
    }

    pub fn contains(&self, value: T) -> bool {
        match self {
            NumericRangeSet::Empty => false,
            NumericRangeSet::Unbounded => true,
            NumericRangeSet::Bounded { min, max } => {
                min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
            }
        }
    }

    pub fn intersection(&self, other: &Self) -> Self {
        match (self, other) {
            (NumericRangeSet::Empty, _) | (_, NumericRangeSet::Empty) => NumericRangeSet::Empty,
            (NumericRangeSet::Unbounded, r) | (r, NumericRangeSet::Unbounded) => *r,
            _ => Self::new(
                tighter(self.min(), other.min(), |a, b| a > b),
                tighter(self.max(), other.max(), |a, b| a < b),
            ),
        }
    }
}

fn tighter<T: Copy>(a: Option<T>, b: Option<T>, prefer_a: impl Fn(T, T) -> bool) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if prefer_a(a, b) { a } else { b }),
        (a, None) => a,
        (None, b) => b,
    }
}
