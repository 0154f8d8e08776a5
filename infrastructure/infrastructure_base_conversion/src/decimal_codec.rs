//! Decimal Codec Module
//!
//! Converts decimal strings into digit lists of any supported base and back.

use entities_number_list::{CircularList, NumberListError};
use entities_utilities::BigNumber;

use crate::common::parse_magnitude;

/// Decimal codec
pub struct DecimalCodec;

impl DecimalCodec {
    /// Decode a decimal string into a list of `base` digits, most significant first.
    ///
    /// Malformed or negative input produces an empty list. The only error is a
    /// base outside `2..=256`.
    pub fn decode(input: &str, base: u32) -> Result<CircularList, NumberListError> {
        match parse_magnitude(input) {
            Ok(magnitude) => Self::from_magnitude(&magnitude, base),
            Err(reason) => {
                tracing::debug!(
                    target: "numeral::codec",
                    base,
                    reason = %reason,
                    "decimal input rejected, producing empty list"
                );
                CircularList::with_base(base)
            }
        }
    }

    /// Encode a list as a decimal string.
    ///
    /// An empty list encodes to `""`, not `"0"`.
    pub fn encode(list: &CircularList) -> String {
        if list.is_empty() {
            return String::new();
        }
        Self::to_magnitude(list).to_decimal_string()
    }

    /// Value of the list's digits read in its base; an empty list is zero
    pub fn to_magnitude(list: &CircularList) -> BigNumber {
        BigNumber::from_digits(list.iter(), list.base())
    }

    /// Build a new list holding `magnitude` in `base`. The sign is ignored.
    pub fn from_magnitude(magnitude: &BigNumber, base: u32) -> Result<CircularList, NumberListError> {
        let mut list = CircularList::with_base(base)?;
        let digits = magnitude
            .to_digits(base)
            .ok_or(NumberListError::InvalidBase(base))?;
        list.add_all(digits);
        Ok(list)
    }
}
