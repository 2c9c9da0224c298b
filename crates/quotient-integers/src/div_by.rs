//! Building rationals from integer pairs.

use dashu::integer::IBig;

use crate::error::RationalError;
use crate::{Integer, Rational};

/// Forms the rational `self / denominator` from two integers of the same kind.
///
/// ```
/// use quotient_integers::{DivBy, Rational};
///
/// let half = 1.div_by(2).unwrap();
/// assert_eq!(half, Rational::from_i64(2, 4).unwrap());
/// ```
pub trait DivBy<Rhs = Self> {
    /// Returns `self / denominator` in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `denominator` is zero.
    fn div_by(self, denominator: Rhs) -> Result<Rational, RationalError>;
}

impl DivBy for i32 {
    fn div_by(self, denominator: i32) -> Result<Rational, RationalError> {
        Rational::new(Integer::from(self), Integer::from(denominator))
    }
}

impl DivBy for i64 {
    fn div_by(self, denominator: i64) -> Result<Rational, RationalError> {
        Rational::from_i64(self, denominator)
    }
}

impl DivBy for Integer {
    fn div_by(self, denominator: Integer) -> Result<Rational, RationalError> {
        Rational::new(self, denominator)
    }
}

impl DivBy for IBig {
    fn div_by(self, denominator: IBig) -> Result<Rational, RationalError> {
        Rational::new(Integer::from(self), Integer::from(denominator))
    }
}
