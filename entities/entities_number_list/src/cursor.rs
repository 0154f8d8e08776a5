//! Cursor Module
//!
//! A bidirectional, position-tracking cursor over a [`CircularList`].
//!
//! The cursor sits *between* digits: `next()` returns the digit after it and
//! moves forward, `previous()` returns the digit before it and moves back.
//! It borrows the list immutably, so structural changes while it is alive are
//! impossible; `remove`, `set` and `add` always report
//! [`NumberListError::UnsupportedOperation`].

use crate::circular_list::CircularList;
use crate::errors::NumberListError;
use crate::node::NodeId;

/// Read-only bidirectional cursor
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    list: &'a CircularList,
    /// Node returned by the next call to `next()`
    current: Option<NodeId>,
    index: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(list: &'a CircularList, current: Option<NodeId>, index: usize) -> Self {
        Self {
            list,
            current,
            index,
        }
    }

    /// Is there a digit after the cursor?
    pub fn has_next(&self) -> bool {
        self.index < self.list.len()
    }

    /// Is there a digit before the cursor?
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Step back and return the digit passed over
    pub fn previous(&mut self) -> Option<u8> {
        if !self.has_previous() {
            return None;
        }
        let prev = self.list.node(self.current?).prev;
        self.current = Some(prev);
        self.index -= 1;
        Some(self.list.node(prev).digit)
    }

    /// Index of the digit `next()` would return
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// Index of the digit `previous()` would return, `None` at the start
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Always fails: the cursor cannot remove digits
    pub fn remove(&mut self) -> Result<(), NumberListError> {
        Err(NumberListError::UnsupportedOperation("remove"))
    }

    /// Always fails: the cursor cannot overwrite digits
    pub fn set(&mut self, _digit: u8) -> Result<(), NumberListError> {
        Err(NumberListError::UnsupportedOperation("set"))
    }

    /// Always fails: the cursor cannot insert digits
    pub fn add(&mut self, _digit: u8) -> Result<(), NumberListError> {
        Err(NumberListError::UnsupportedOperation("add"))
    }
}

impl Iterator for Cursor<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let node = self.list.node(self.current?);
        self.current = Some(node.next);
        self.index += 1;
        Some(node.digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len() - self.index;
        (remaining, Some(remaining))
    }
}
