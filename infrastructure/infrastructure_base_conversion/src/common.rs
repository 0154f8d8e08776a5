//! Common Validation Utilities
//!
//! Syntactic validation of decimal input shared by the codecs.
//!
//! Accepted input, after trimming surrounding whitespace, is an optional `-`
//! sign followed by one or more ASCII digits. A `+` sign is malformed. A `-`
//! in front of a non-zero magnitude is rejected, since only non-negative
//! magnitudes are representable; `-0` is zero.

use entities_utilities::BigNumber;
use regex::Regex;
use thiserror::Error;

lazy_static::lazy_static! {
    static ref DECIMAL_PATTERN: Regex =
        Regex::new(r"^(-?)([0-9]+)$").expect("decimal pattern is valid");
}

/// Reasons a decimal string is not an acceptable magnitude
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing left after trimming
    #[error("empty decimal input")]
    Empty,
    /// Characters other than a leading `-` and ASCII digits
    #[error("malformed decimal input {0:?}")]
    Malformed(String),
    /// Negative values are not representable
    #[error("negative decimal input {0:?}")]
    Negative(String),
}

/// Validate and parse a decimal magnitude
///
/// # Returns
///
/// * `Ok(magnitude)` - Non-negative value of the input
/// * `Err(ParseError)` - Why the input was rejected
pub fn parse_magnitude(input: &str) -> Result<BigNumber, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let captures = DECIMAL_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ParseError::Malformed(trimmed.to_string()))?;
    let sign = captures.get(1).map_or("", |m| m.as_str());
    let digits = captures.get(2).map_or("", |m| m.as_str());

    let magnitude = BigNumber::parse_decimal(digits)
        .ok_or_else(|| ParseError::Malformed(trimmed.to_string()))?;
    if sign == "-" && !magnitude.is_zero() {
        return Err(ParseError::Negative(trimmed.to_string()));
    }
    Ok(magnitude)
}
