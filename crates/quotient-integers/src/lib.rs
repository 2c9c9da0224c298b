//! # quotient-integers
//!
//! Arbitrary precision integer and rational arithmetic.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Rationals kept in lowest terms (`Rational`)
//! - Closed rational intervals (`RationalRange`)
//!
//! ## Canonical Form
//!
//! - Denominators are always positive; the sign lives on the numerator
//! - Values are reduced by GCD when built, so equal ratios share one
//!   representation and format identically
//!
//! ```
//! use quotient_integers::{DivBy, Rational};
//!
//! let half = 1.div_by(2)?;
//! let third = 1.div_by(3)?;
//! assert_eq!(&half + &third, 5.div_by(6)?);
//! assert!(third.clone().range_to(2.div_by(3)?).contains(&half));
//! assert_eq!("117/1098".parse::<Rational>()?.to_string(), "13/122");
//! # Ok::<(), quotient_integers::RationalError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod div_by;
pub mod error;
pub mod integer;
pub mod parse;
pub mod range;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use div_by::DivBy;
pub use error::{MalformedReason, RationalError};
pub use integer::Integer;
pub use range::RationalRange;
pub use rational::Rational;
