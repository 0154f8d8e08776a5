//! Infrastructure Layer: Base Conversion
//!
//! Converts between decimal strings and digit lists in an arbitrary base.
//!
//! ## Overview
//!
//! The `infrastructure_base_conversion` crate sits between the entities layer (the
//! [`CircularList`](entities_number_list::CircularList) container and the
//! [`BigNumber`](entities_utilities::BigNumber) magnitude) and the use cases that
//! rebuild or multiply numbers.
//!
//! ## Codecs
//!
//! - **[`decimal_codec`](decimal_codec/index.html)**: `decode` splits a validated
//!   decimal magnitude into most-significant-first digits of the target base;
//!   `encode` folds a list back to base 10 with Horner's method.
//!
//! ## Input policy
//!
//! Malformed or negative decimal input is not an error: it decodes to an empty
//! list. The rejection reason is still reported as a [`ParseError`] by
//! [`parse_magnitude`] and logged at debug level under `numeral::codec`.
//!
//! ## See Also
//!
//! - [`entities_number_list`](../entities_number_list/index.html): The digit container
//! - [`entities_utilities`](../entities_utilities/index.html): `BigNumber`

mod common;

pub mod decimal_codec;

pub use decimal_codec::DecimalCodec;

// Re-export validation for callers that need the rejection reason
pub use common::{parse_magnitude, ParseError};
