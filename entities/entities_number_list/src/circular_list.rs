//! Circular List Module
//!
//! Provides the circular doubly-linked digit sequence.
//!
//! Nodes live in an arena (`Vec<Node>`) and link to each other by slot index.
//! Slots freed by removal are recycled through a free list, so indices handed
//! out to neighbours stay stable for the lifetime of the node. Exactly one live
//! node is the head; rotating the list only moves the head.
//!
//! Every traversal is bounded by the stored length, never by "until we see
//! the head again". The head can move, and the cycle has no sentinel.

use std::fmt;
use std::iter::{self, FusedIterator};

use crate::cursor::Cursor;
use crate::errors::NumberListError;
use crate::node::{Node, NodeId};

/// Radix used by [`CircularList::new`]
pub const DEFAULT_BASE: u32 = 2;
/// Smallest supported radix
pub const MIN_BASE: u32 = 2;
/// Largest supported radix (digits are stored as `u8`)
pub const MAX_BASE: u32 = 256;

/// Circular doubly-linked sequence of digits in a single base.
#[derive(Debug, Clone)]
pub struct CircularList {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    len: usize,
    base: u32,
}

/// Forward iterator over the digits of a [`CircularList`], starting at the head.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a CircularList,
    current: Option<NodeId>,
    remaining: usize,
}

impl Default for CircularList {
    fn default() -> Self {
        Self::new()
    }
}

impl CircularList {
    /// Create an empty list in the default base (binary)
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
            base: DEFAULT_BASE,
        }
    }

    /// Create an empty list in `base`
    ///
    /// Fails with [`NumberListError::InvalidBase`] unless `2 <= base <= 256`.
    pub fn with_base(base: u32) -> Result<Self, NumberListError> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(NumberListError::InvalidBase(base));
        }
        Ok(Self {
            base,
            ..Self::new()
        })
    }

    /// Radix of every digit in the list
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `digit` is representable in this list's base
    pub fn is_valid_digit(&self, digit: u8) -> bool {
        u32::from(digit) < self.base
    }

    /// Append a digit at the tail (immediately before the head).
    ///
    /// Returns `false` and leaves the list untouched if the digit is not valid
    /// in the list's base.
    pub fn push_back(&mut self, digit: u8) -> bool {
        if !self.is_valid_digit(digit) {
            return false;
        }
        match self.head {
            None => {
                let id = self.alloc(digit);
                self.head = Some(id);
            }
            Some(head) => {
                self.link_before(head, digit);
            }
        }
        self.len += 1;
        true
    }

    /// Insert a digit so that it ends up at `index`.
    ///
    /// `index == len()` appends. Inserting at 0 makes the new node the head.
    pub fn insert(&mut self, index: usize, digit: u8) -> Result<(), NumberListError> {
        if index > self.len {
            return Err(NumberListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.check_digit(digit)?;
        if index == self.len {
            self.push_back(digit);
            return Ok(());
        }

        let anchor = self.node_at(index)?;
        let id = self.link_before(anchor, digit);
        if index == 0 {
            self.head = Some(id);
        }
        self.len += 1;
        Ok(())
    }

    /// Digit at `index`
    pub fn get(&self, index: usize) -> Result<u8, NumberListError> {
        let id = self.node_at(index)?;
        Ok(self.nodes[id].digit)
    }

    /// Replace the digit at `index`, returning the previous one
    pub fn set(&mut self, index: usize, digit: u8) -> Result<u8, NumberListError> {
        let id = self.node_at(index)?;
        self.check_digit(digit)?;
        Ok(std::mem::replace(&mut self.nodes[id].digit, digit))
    }

    /// Remove the digit at `index` and return it
    pub fn remove(&mut self, index: usize) -> Result<u8, NumberListError> {
        let id = self.node_at(index)?;
        let digit = self.nodes[id].digit;
        self.unlink(id);
        Ok(digit)
    }

    /// Remove the first occurrence of `value`, scanning from the head.
    ///
    /// Returns whether a digit was removed.
    pub fn remove_first(&mut self, value: u8) -> bool {
        let found = self.node_ids().find(|&id| self.nodes[id].digit == value);
        match found {
            Some(id) => {
                self.unlink(id);
                true
            }
            None => false,
        }
    }

    /// Position of the first occurrence of `value`
    pub fn index_of(&self, value: u8) -> Option<usize> {
        self.iter().position(|digit| digit == value)
    }

    /// Position of the last occurrence of `value`, scanning back from the tail
    pub fn last_index_of(&self, value: u8) -> Option<usize> {
        let head = self.head?;
        let tail = self.nodes[head].prev;
        iter::successors(Some(tail), |&id| Some(self.nodes[id].prev))
            .take(self.len)
            .position(|id| self.nodes[id].digit == value)
            .map(|steps_back| self.len - 1 - steps_back)
    }

    /// Does the list hold `value`?
    pub fn contains(&self, value: u8) -> bool {
        self.index_of(value).is_some()
    }

    /// Exchange the digits at `i` and `j`.
    ///
    /// Nodes keep their positions; only values move. Returns `false` without
    /// touching the list when either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        let (Ok(a), Ok(b)) = (self.node_at(i), self.node_at(j)) else {
            return false;
        };
        let tmp = self.nodes[a].digit;
        self.nodes[a].digit = self.nodes[b].digit;
        self.nodes[b].digit = tmp;
        true
    }

    /// Bubble-sort into non-decreasing order. Returns the number of swaps.
    pub fn sort_ascending(&mut self) -> usize {
        self.bubble_sort(|a, b| a > b)
    }

    /// Bubble-sort into non-increasing order. Returns the number of swaps.
    pub fn sort_descending(&mut self) -> usize {
        self.bubble_sort(|a, b| a < b)
    }

    /// Rotate left: the second digit becomes the head
    pub fn shift_left(&mut self) {
        if self.len > 1 {
            if let Some(head) = self.head {
                self.head = Some(self.nodes[head].next);
            }
        }
    }

    /// Rotate right: the last digit becomes the head
    pub fn shift_right(&mut self) {
        if self.len > 1 {
            if let Some(head) = self.head {
                self.head = Some(self.nodes[head].prev);
            }
        }
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.len = 0;
    }

    /// Iterate digits from the head, exactly `len()` steps
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Digits in iteration order
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Read-only bidirectional cursor positioned before the head
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self, self.head, 0)
    }

    /// Cursor positioned so that the next digit returned is the one at `index`
    pub fn cursor_at(&self, index: usize) -> Result<Cursor<'_>, NumberListError> {
        if index > self.len {
            return Err(NumberListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let current = if index == self.len {
            self.head
        } else {
            Some(self.node_at(index)?)
        };
        Ok(Cursor::new(self, current, index))
    }

    /// Copy of the half-open range `from..to` as a new list in the same base
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Self, NumberListError> {
        if from > to || to > self.len {
            return Err(NumberListError::InvalidRange {
                from,
                to,
                len: self.len,
            });
        }
        let mut sub = Self {
            base: self.base,
            ..Self::new()
        };
        for digit in self.iter().skip(from).take(to - from) {
            sub.push_back(digit);
        }
        Ok(sub)
    }

    /// Append every digit in order. Returns whether anything was appended.
    pub fn add_all<I>(&mut self, digits: I) -> bool
    where
        I: IntoIterator<Item = u8>,
    {
        let mut modified = false;
        for digit in digits {
            modified |= self.push_back(digit);
        }
        modified
    }

    /// Insert every digit in order, the first one landing at `index`.
    ///
    /// All digits are validated before the list is touched.
    pub fn insert_all<I>(&mut self, index: usize, digits: I) -> Result<bool, NumberListError>
    where
        I: IntoIterator<Item = u8>,
    {
        if index > self.len {
            return Err(NumberListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let digits: Vec<u8> = digits.into_iter().collect();
        for &digit in &digits {
            self.check_digit(digit)?;
        }
        for (offset, digit) in digits.iter().enumerate() {
            self.insert(index + offset, *digit)?;
        }
        Ok(!digits.is_empty())
    }

    /// Remove every occurrence of every value in `values`
    pub fn remove_all(&mut self, values: &[u8]) -> bool {
        self.remove_where(|digit| values.contains(&digit))
    }

    /// Keep only digits contained in `values`
    pub fn retain_all(&mut self, values: &[u8]) -> bool {
        self.remove_where(|digit| !values.contains(&digit))
    }

    /// Does the list hold every value in `values`?
    pub fn contains_all(&self, values: &[u8]) -> bool {
        values.iter().all(|&value| self.contains(value))
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    // Snapshot node ids first: unlinking during a live walk of the cycle
    // would skip or revisit nodes.
    fn remove_where<F>(&mut self, mut doomed: F) -> bool
    where
        F: FnMut(u8) -> bool,
    {
        let ids: Vec<NodeId> = self.node_ids().collect();
        let mut modified = false;
        for id in ids {
            if doomed(self.nodes[id].digit) {
                self.unlink(id);
                modified = true;
            }
        }
        modified
    }

    fn bubble_sort<F>(&mut self, out_of_order: F) -> usize
    where
        F: Fn(u8, u8) -> bool,
    {
        let Some(head) = self.head else {
            return 0;
        };
        if self.len <= 1 {
            return 0;
        }

        let mut swaps = 0;
        loop {
            let mut swapped = false;
            let mut current = head;
            for _ in 0..self.len - 1 {
                let next = self.nodes[current].next;
                let (a, b) = (self.nodes[current].digit, self.nodes[next].digit);
                if out_of_order(a, b) {
                    self.nodes[current].digit = b;
                    self.nodes[next].digit = a;
                    swapped = true;
                    swaps += 1;
                }
                current = next;
            }
            if !swapped {
                return swaps;
            }
        }
    }

    fn check_digit(&self, digit: u8) -> Result<(), NumberListError> {
        if self.is_valid_digit(digit) {
            Ok(())
        } else {
            Err(NumberListError::DigitOutOfRange {
                digit,
                base: self.base,
            })
        }
    }

    /// Locate the node at `index`, walking whichever way round is shorter.
    fn node_at(&self, index: usize) -> Result<NodeId, NumberListError> {
        let head = match self.head {
            Some(head) if index < self.len => head,
            _ => {
                return Err(NumberListError::IndexOutOfRange {
                    index,
                    len: self.len,
                })
            }
        };
        if index <= self.len / 2 {
            Ok((0..index).fold(head, |id, _| self.nodes[id].next))
        } else {
            let tail = self.nodes[head].prev;
            Ok((index..self.len - 1).fold(tail, |id, _| self.nodes[id].prev))
        }
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.head, |&id| Some(self.nodes[id].next)).take(self.len)
    }

    fn alloc(&mut self, digit: u8) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Node::detached(id, digit);
                id
            }
            None => {
                let id = self.nodes.len();
                self.nodes.push(Node::detached(id, digit));
                id
            }
        }
    }

    /// Splice a new node between `anchor.prev` and `anchor`. Does not touch `len`.
    fn link_before(&mut self, anchor: NodeId, digit: u8) -> NodeId {
        let prev = self.nodes[anchor].prev;
        let id = self.alloc(digit);
        self.nodes[id].prev = prev;
        self.nodes[id].next = anchor;
        self.nodes[prev].next = id;
        self.nodes[anchor].prev = id;
        id
    }

    fn unlink(&mut self, id: NodeId) {
        if self.len == 1 {
            self.head = None;
        } else {
            let (prev, next) = (self.nodes[id].prev, self.nodes[id].next);
            self.nodes[prev].next = next;
            self.nodes[next].prev = prev;
            if self.head == Some(id) {
                self.head = Some(next);
            }
        }
        self.nodes[id].in_use = false;
        self.free.push(id);
        self.len -= 1;

        if self.len == 0 {
            self.nodes.clear();
            self.free.clear();
        }
    }
}

impl PartialEq for CircularList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for CircularList {}

impl fmt::Display for CircularList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CircularList {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.current?);
        self.current = Some(node.next);
        self.remaining -= 1;
        Some(node.digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
