//! Errors raised by rational construction, division and parsing.

use thiserror::Error;

/// Why a piece of text could not be read as a rational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// The text had more than one `/` separator.
    #[error("expected `n` or `n/d`")]
    TooManyParts,
    /// A segment was not a signed decimal integer.
    #[error("not a decimal integer")]
    InvalidInteger,
}

/// Errors that can occur while building or combining rationals.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator, either given directly or produced by dividing by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The input text is not an integer or an `integer/integer` pair.
    #[error("malformed rational {input:?}: {reason}")]
    MalformedInput {
        /// The offending text.
        input: String,
        /// What was wrong with it.
        reason: MalformedReason,
    },
}

impl RationalError {
    pub(crate) fn malformed(input: &str, reason: MalformedReason) -> Self {
        RationalError::MalformedInput {
            input: input.to_owned(),
            reason,
        }
    }
}
