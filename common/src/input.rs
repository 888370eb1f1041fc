//! # Input Parsing
//!
//! Turns raw command-line text into predicate arguments.
//!
//! Integers are parsed strictly: surrounding whitespace is trimmed and a
//! single leading `+` or `-` is allowed, anything else is rejected.
//! Text for the palindrome check is never touched here, the predicate
//! does its own normalization.

use std::num::IntErrorKind;

use crate::error::CheckError;

/// Parses a signed decimal integer.
pub fn parse_integer(s: &str) -> Result<i64, CheckError> {
    let trimmed = s.trim();

    trimmed.parse::<i64>().map_err(|e| {
        let reason = match e.kind() {
            IntErrorKind::Empty => "empty input",
            IntErrorKind::PosOverflow => "too large for a 64-bit integer",
            IntErrorKind::NegOverflow => "too small for a 64-bit integer",
            _ => "not a whole number",
        };
        CheckError::InvalidInteger {
            input: s.to_string(),
            reason: reason.to_string(),
        }
    })
}

/// Parses every entry, stopping at the first invalid one.
pub fn parse_integers<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<i64>, CheckError> {
    if inputs.is_empty() {
        return Err(CheckError::EmptyBatch);
    }

    inputs.iter().map(|s| parse_integer(s.as_ref())).collect()
}
