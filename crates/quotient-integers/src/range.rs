//! Closed intervals of rationals.

use std::ops::RangeInclusive;

use crate::Rational;

/// The closed interval `[start, end]` over rationals.
///
/// The endpoints are kept as given. A range whose start lies above its end
/// is legal and simply contains nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RationalRange {
    start: Rational,
    end: Rational,
}

impl RationalRange {
    /// Creates the interval `[start, end]`.
    #[must_use]
    pub fn new(start: Rational, end: Rational) -> Self {
        Self { start, end }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn start(&self) -> &Rational {
        &self.start
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn end(&self) -> &Rational {
        &self.end
    }

    /// Returns true if `value` lies within the interval, bounds included.
    #[must_use]
    pub fn contains(&self, value: &Rational) -> bool {
        *value >= self.start && *value <= self.end
    }

    /// Returns true if no rational lies within the interval.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl From<RangeInclusive<Rational>> for RationalRange {
    fn from(range: RangeInclusive<Rational>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}
