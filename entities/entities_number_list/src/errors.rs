//! Error Module
//!
//! Errors raised by list operations. Malformed numeric input is not an error at
//! this layer; the conversion layer degrades it to an empty list instead.

use thiserror::Error;

/// Errors that can occur when operating on a [`CircularList`](crate::CircularList).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberListError {
    /// Index outside the valid bounds of the list
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the list at the time of the call
        len: usize,
    },

    /// Half-open range that does not fit the list
    #[error("invalid range {from}..{to} for list of length {len}")]
    InvalidRange {
        /// Inclusive start
        from: usize,
        /// Exclusive end
        to: usize,
        /// Length of the list at the time of the call
        len: usize,
    },

    /// Digit value not representable in the list's base
    #[error("digit {digit} is not valid in base {base}")]
    DigitOutOfRange {
        /// Offending digit
        digit: u8,
        /// Base of the list
        base: u32,
    },

    /// Radix outside the supported range
    #[error("base {0} is outside the supported range 2..=256")]
    InvalidBase(u32),

    /// Structural mutation attempted through a read-only cursor
    #[error("cursor does not support {0}")]
    UnsupportedOperation(&'static str),
}
