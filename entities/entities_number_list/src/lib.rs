//! Entities Layer: Number List
//!
//! Provides the positional-numeral container at the heart of the workspace: a
//! sequence of single-digit values, all in one radix, stored in a circular
//! doubly-linked list.
//!
//! ## Overview
//!
//! The `entities_number_list` crate is the innermost layer of the workspace. It has
//! no dependencies on other crates in the system; every higher layer (base
//! conversion, derived operations, file adapters, API facades) builds on the
//! [`CircularList`] defined here.
//!
//! ## Modules
//!
//! - **[`node`](node/index.html)**: The digit cell and its arena slot. Nodes refer to
//!   their neighbours by slot index, so the cycle never owns itself.
//!
//! - **[`circular_list`](circular_list/index.html)**: The circular sequence: insertion,
//!   removal, indexed access with shortest-direction lookup, bubble sorting, O(1)
//!   rotation, bulk operations and count-bounded iteration.
//!
//! - **[`cursor`](cursor/index.html)**: A read-only bidirectional cursor with position
//!   tracking. Mutation through the cursor is rejected.
//!
//! - **[`errors`](errors/index.html)**: The error taxonomy shared by the higher layers.
//!
//! ## Usage
//!
//! ```rust
//! use entities_number_list::CircularList;
//!
//! let mut list = CircularList::new();
//! for digit in [1, 1, 0, 1] {
//!     list.push_back(digit);
//! }
//! assert_eq!(list.to_vec(), vec![1, 1, 0, 1]);
//!
//! list.shift_left();
//! assert_eq!(list.to_vec(), vec![1, 0, 1, 1]);
//! ```

pub mod circular_list;
pub mod cursor;
pub mod errors;
pub mod node;

pub use circular_list::{CircularList, Iter, DEFAULT_BASE, MAX_BASE, MIN_BASE};
pub use cursor::Cursor;
pub use errors::NumberListError;
