//! Use Cases Layer: Numeral Operations
//!
//! Provides the operations derived from base conversion:
//! - Change of scale (rebuild a number in the configured target base)
//! - Multiplication of two numbers
//! - Configuration (defaults, environment overrides) and the record-book constant
//!
//! Every operation builds a new list; operands are never modified.
//! Depends on Entities and Infrastructure layers.

pub mod change_scale;
pub mod config;
pub mod multiply;

pub use change_scale::{change_scale, change_scale_with};
pub use config::{
    record_book_number, NumeralConfig, BASE_ENV, RECORD_BOOK_NUMBER, SCALE_TARGET_BASE,
    SCALE_TARGET_BASE_ENV,
};
pub use multiply::multiply;
