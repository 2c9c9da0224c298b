//! Reading rationals from text.
//!
//! Accepted forms are a single signed decimal integer (`"-7"`) or two of them
//! separated by one slash (`"117/1098"`). Anything else is rejected with
//! [`RationalError::MalformedInput`]; there is no fallback value.

use std::str::FromStr;
use tracing::debug;

use crate::error::{MalformedReason, RationalError};
use crate::{Integer, Rational};

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(n), None, None) => Ok(Rational::from_integer(parse_segment(s, n)?)),
            (Some(n), Some(d), None) => Rational::new(parse_segment(s, n)?, parse_segment(s, d)?),
            _ => {
                debug!(input = s, "rational has more than one separator");
                Err(RationalError::malformed(s, MalformedReason::TooManyParts))
            }
        }
    }
}

fn parse_segment(input: &str, segment: &str) -> Result<Integer, RationalError> {
    segment.parse::<Integer>().map_err(|err| {
        debug!(input, segment, %err, "rational segment is not an integer");
        RationalError::malformed(input, MalformedReason::InvalidInteger)
    })
}
