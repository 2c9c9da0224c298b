//! Arbitrary precision integers.
//!
//! This module wraps `dashu::IBig` with the handful of operations the
//! rational type needs: sign inspection, Euclidean GCD and decimal parsing.

use dashu::base::error::ParseError;
use dashu::base::Abs;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// An arbitrary precision signed integer.
///
/// The magnitude is limited only by available memory, so products of large
/// numerators and denominators never overflow.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer from a string in the given base.
    ///
    /// The text is an optional `+` or `-` followed by digits of `radix` and
    /// nothing else. Digit separators, radix prefixes and surrounding
    /// whitespace are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDigit`] for a stray character,
    /// [`ParseError::NoDigits`] for a missing magnitude and
    /// [`ParseError::UnsupportedRadix`] if `radix` is outside `2..=36`.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseError> {
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        // dashu skips `_` between digits
        if (2..=36).contains(&radix) && !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(ParseError::InvalidDigit);
        }
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.0.cmp(&IBig::ZERO) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < IBig::ZERO
    }

    /// Computes the greatest common divisor with the Euclidean algorithm.
    ///
    /// The result is always non-negative: `gcd(a, 0) == |a|` and
    /// `gcd(0, 0) == 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.0).ok()
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl FromStr for Integer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Implements a binary operator for `&Integer`, and optionally for owned
/// operands, by forwarding to `IBig`.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Self) -> Integer {
                Integer($trait::$method(&self.0, &rhs.0))
            }
        }
    };
    ($trait:ident, $method:ident, owned) => {
        forward_binop!($trait, $method);

        impl $trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Self) -> Integer {
                Integer($trait::$method(self.0, rhs.0))
            }
        }
    };
}

forward_binop!(Add, add, owned);
forward_binop!(Sub, sub, owned);
forward_binop!(Mul, mul, owned);
forward_binop!(Rem, rem, owned);
// Truncating; panics on a zero divisor like primitive integers.
forward_binop!(Div, div);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
