//! NumberList Facade
//!
//! The capability interface of a numeral list and its implementation for
//! [`CircularList`].

use std::fmt;
use std::path::Path;

use adapters_io_operations::{NumberFile, NumberFileError};
use entities_number_list::{CircularList, Cursor, NumberListError};
use infrastructure_base_conversion::DecimalCodec;
use usecases_numeral_operations::{change_scale, multiply};

/// A positional number stored digit by digit.
///
/// Index-based operations fail with [`NumberListError::IndexOutOfRange`];
/// `swap` reports failure as `false` instead.
pub trait NumberList: PartialEq + fmt::Display + Sized {
    /// Number of digits
    fn size(&self) -> usize;
    /// Does the list hold no digits?
    fn is_empty(&self) -> bool;
    /// Radix of the digits
    fn base(&self) -> u32;

    /// Append a digit; `false` if it is not valid in the list's base
    fn add(&mut self, digit: u8) -> bool;
    /// Insert a digit so it ends up at `index`
    fn add_at(&mut self, index: usize, digit: u8) -> Result<(), NumberListError>;
    /// Append every digit; `false` if none was added
    fn add_all(&mut self, digits: &[u8]) -> bool;
    /// Insert `digits` in order starting at `index`
    fn add_all_at(&mut self, index: usize, digits: &[u8]) -> Result<bool, NumberListError>;

    /// Digit at `index`
    fn get(&self, index: usize) -> Result<u8, NumberListError>;
    /// Overwrite the digit at `index`, returning the old one
    fn set(&mut self, index: usize, digit: u8) -> Result<u8, NumberListError>;

    /// Remove and return the digit at `index`
    fn remove_at(&mut self, index: usize) -> Result<u8, NumberListError>;
    /// Remove the first occurrence of `value`
    fn remove_value(&mut self, value: u8) -> bool;
    /// Remove every digit found in `values`
    fn remove_all(&mut self, values: &[u8]) -> bool;
    /// Keep only digits found in `values`
    fn retain_all(&mut self, values: &[u8]) -> bool;
    /// Remove every digit
    fn clear(&mut self);

    /// Does any digit equal `value`?
    fn contains(&self, value: u8) -> bool;
    /// Is every one of `values` present?
    fn contains_all(&self, values: &[u8]) -> bool;
    /// Position of the first `value`
    fn index_of(&self, value: u8) -> Option<usize>;
    /// Position of the last `value`
    fn last_index_of(&self, value: u8) -> Option<usize>;

    /// Exchange the digits at `i` and `j`
    fn swap(&mut self, i: usize, j: usize) -> bool;
    /// Sort into non-decreasing order
    fn sort_ascending(&mut self);
    /// Sort into non-increasing order
    fn sort_descending(&mut self);
    /// Rotate left: the second digit becomes the head
    fn shift_left(&mut self);
    /// Rotate right: the last digit becomes the head
    fn shift_right(&mut self);

    /// Digits from the head, in order
    fn to_vec(&self) -> Vec<u8>;
    /// Read-only cursor before the first digit
    fn cursor(&self) -> Cursor<'_>;
    /// Read-only cursor before the digit at `index`
    fn cursor_at(&self, index: usize) -> Result<Cursor<'_>, NumberListError>;
    /// Copy of the digits in `from..to`, same base
    fn sub_list(&self, from: usize, to: usize) -> Result<Self, NumberListError>;

    /// Decimal form of the stored number; `""` when empty
    fn to_decimal_string(&self) -> String;
    /// The same number rebuilt in the configured scale, ternary by default
    fn change_scale(&self) -> Result<Self, NumberListError>;
    /// Product of `self` and `arg`, in `self`'s base
    fn additional_operation(&self, arg: &Self) -> Result<Self, NumberListError>;
    /// Write the decimal form to `path`
    fn save_list(&self, path: &Path) -> Result<(), NumberFileError>;
}

impl NumberList for CircularList {
    fn size(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        CircularList::is_empty(self)
    }

    fn base(&self) -> u32 {
        CircularList::base(self)
    }

    fn add(&mut self, digit: u8) -> bool {
        self.push_back(digit)
    }

    fn add_at(&mut self, index: usize, digit: u8) -> Result<(), NumberListError> {
        self.insert(index, digit)
    }

    fn add_all(&mut self, digits: &[u8]) -> bool {
        CircularList::add_all(self, digits.iter().copied())
    }

    fn add_all_at(&mut self, index: usize, digits: &[u8]) -> Result<bool, NumberListError> {
        self.insert_all(index, digits.iter().copied())
    }

    fn get(&self, index: usize) -> Result<u8, NumberListError> {
        CircularList::get(self, index)
    }

    fn set(&mut self, index: usize, digit: u8) -> Result<u8, NumberListError> {
        CircularList::set(self, index, digit)
    }

    fn remove_at(&mut self, index: usize) -> Result<u8, NumberListError> {
        self.remove(index)
    }

    fn remove_value(&mut self, value: u8) -> bool {
        self.remove_first(value)
    }

    fn remove_all(&mut self, values: &[u8]) -> bool {
        CircularList::remove_all(self, values)
    }

    fn retain_all(&mut self, values: &[u8]) -> bool {
        CircularList::retain_all(self, values)
    }

    fn clear(&mut self) {
        CircularList::clear(self)
    }

    fn contains(&self, value: u8) -> bool {
        CircularList::contains(self, value)
    }

    fn contains_all(&self, values: &[u8]) -> bool {
        CircularList::contains_all(self, values)
    }

    fn index_of(&self, value: u8) -> Option<usize> {
        CircularList::index_of(self, value)
    }

    fn last_index_of(&self, value: u8) -> Option<usize> {
        CircularList::last_index_of(self, value)
    }

    fn swap(&mut self, i: usize, j: usize) -> bool {
        CircularList::swap(self, i, j)
    }

    fn sort_ascending(&mut self) {
        CircularList::sort_ascending(self);
    }

    fn sort_descending(&mut self) {
        CircularList::sort_descending(self);
    }

    fn shift_left(&mut self) {
        CircularList::shift_left(self)
    }

    fn shift_right(&mut self) {
        CircularList::shift_right(self)
    }

    fn to_vec(&self) -> Vec<u8> {
        CircularList::to_vec(self)
    }

    fn cursor(&self) -> Cursor<'_> {
        CircularList::cursor(self)
    }

    fn cursor_at(&self, index: usize) -> Result<Cursor<'_>, NumberListError> {
        CircularList::cursor_at(self, index)
    }

    fn sub_list(&self, from: usize, to: usize) -> Result<Self, NumberListError> {
        CircularList::sub_list(self, from, to)
    }

    fn to_decimal_string(&self) -> String {
        DecimalCodec::encode(self)
    }

    fn change_scale(&self) -> Result<Self, NumberListError> {
        change_scale(self)
    }

    fn additional_operation(&self, arg: &Self) -> Result<Self, NumberListError> {
        multiply(self, arg)
    }

    fn save_list(&self, path: &Path) -> Result<(), NumberFileError> {
        NumberFile::save(self, path)
    }
}
