//! Adapters Layer: I/O Operations
//!
//! Provides I/O adapter operations:
//! - Loading a number from a file holding its decimal form
//! - Saving a number to a file in decimal form
//!
//! Loading never fails: unreadable files give an empty list. Saving reports
//! write failures to the caller.
//! Depends on Entities and Infrastructure layers.

pub mod number_file;

pub use number_file::{NumberFile, NumberFileError};
