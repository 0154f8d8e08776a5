//! API Facades Layer
//!
//! Provides the public face of the workspace: the [`NumberList`] capability
//! interface and the entry points that construct lists from decimal strings or
//! files.
//!
//! [`NumberList`] mixes list-style random access, membership queries and the
//! numeral operations (decimal rendering, change of scale, multiplication,
//! saving). It has exactly one implementation, [`CircularList`].
//!
//! All facades call underlying modules from inner layers.

pub mod common_facades;
pub mod number_list_facades;

// Re-export main facade types
pub use common_facades::*;
pub use number_list_facades::NumberList;

pub use adapters_io_operations::NumberFileError;
pub use entities_number_list::{CircularList, Cursor, NumberListError};
pub use usecases_numeral_operations::NumeralConfig;
