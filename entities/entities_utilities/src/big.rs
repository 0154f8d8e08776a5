//! Big Number Operations
//!
//! Provides the arbitrary precision integer behind base conversion.
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic.
//! Digits are exchanged as `u8`, most significant first, so every radix from
//! 2 to 256 can be represented.

use std::fmt;
use std::str::FromStr;

use malachite::Integer;

/// Smallest radix accepted by [`BigNumber::to_digits`]
pub const MIN_RADIX: u32 = 2;
/// Largest radix accepted by [`BigNumber::to_digits`]
pub const MAX_RADIX: u32 = 256;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Zero
    pub fn zero() -> Self {
        Self {
            value: Integer::from(0),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Parse a base-10 string.
    ///
    /// Accepts an optional leading `-` followed by ASCII digits. Returns `None`
    /// for anything else; syntactic policy (trimming, `+` signs) belongs to the
    /// caller.
    pub fn parse_decimal(text: &str) -> Option<Self> {
        Integer::from_str(text).ok().map(|value| Self { value })
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if the number is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Convert to u64, `None` if negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Base-10 rendering
    pub fn to_decimal_string(&self) -> String {
        self.value.to_string()
    }

    /// Recompose a magnitude from most-significant-first digits (Horner's method)
    ///
    /// `acc = acc * base + digit` for every digit in order. An empty digit
    /// sequence yields zero.
    pub fn from_digits<I>(digits: I, base: u32) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let radix = Integer::from(base);
        let value = digits
            .into_iter()
            .fold(Integer::from(0), |acc, digit| acc * &radix + Integer::from(digit));
        Self { value }
    }

    /// Decompose the magnitude into digits of `base`, most significant first
    ///
    /// Zero decomposes to `[0]`. The sign is ignored. Returns `None` when
    /// `base` is outside `2..=256`.
    pub fn to_digits(&self, base: u32) -> Option<Vec<u8>> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&base) {
            return None;
        }
        let radix = Integer::from(base);
        let mut n = if self.value < 0 {
            -self.value.clone()
        } else {
            self.value.clone()
        };

        if n == 0 {
            return Some(vec![0]);
        }

        // Repeated division yields least significant digits first
        let mut digits = Vec::new();
        while n > 0 {
            let remainder = &n % &radix;
            // Remainder is always < base <= 256, so it fits in u8
            let digit = u64::try_from(&remainder)
                .ok()
                .and_then(|d| u8::try_from(d).ok())
                .unwrap_or(0);
            digits.push(digit);
            n = &n / &radix;
        }
        digits.reverse();
        Some(digits)
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_number_creation() {
        let big = BigNumber::from_u64(12345);
        assert!(!big.is_negative());
        assert!(!big.is_zero());
        assert!(BigNumber::zero().is_zero());
        assert_eq!(BigNumber::default(), BigNumber::zero());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(BigNumber::parse_decimal("42").unwrap().to_u64(), Some(42));
        assert!(BigNumber::parse_decimal("-5").unwrap().is_negative());
        assert!(BigNumber::parse_decimal("").is_none());
        assert!(BigNumber::parse_decimal("4x2").is_none());
        assert!(BigNumber::parse_decimal(" 42").is_none());
    }

    #[test]
    fn test_parse_decimal_beyond_u64() {
        let text = "340282366920938463463374607431768211456"; // 2^128
        let big = BigNumber::parse_decimal(text).unwrap();
        assert_eq!(big.to_u64(), None);
        assert_eq!(big.to_decimal_string(), text);
    }

    #[test]
    fn test_times() {
        let a = BigNumber::from_u64(6);
        let b = BigNumber::from_u64(7);
        assert_eq!(a.times(&b).to_u64(), Some(42));
        assert!(a.times(&BigNumber::zero()).is_zero());
    }

    #[test]
    fn test_to_digits() {
        let thirteen = BigNumber::from_u64(13);
        assert_eq!(thirteen.to_digits(2), Some(vec![1, 1, 0, 1]));
        assert_eq!(thirteen.to_digits(3), Some(vec![1, 1, 1]));
        assert_eq!(thirteen.to_digits(16), Some(vec![13]));
        assert_eq!(BigNumber::from_u64(256).to_digits(256), Some(vec![1, 0]));
        assert_eq!(BigNumber::zero().to_digits(7), Some(vec![0]));
    }

    #[test]
    fn test_to_digits_rejects_bad_radix() {
        let big = BigNumber::from_u64(10);
        assert_eq!(big.to_digits(0), None);
        assert_eq!(big.to_digits(1), None);
        assert_eq!(big.to_digits(257), None);
    }

    #[test]
    fn test_from_digits_horner() {
        assert_eq!(BigNumber::from_digits([1, 1, 0, 1], 2).to_u64(), Some(13));
        assert_eq!(BigNumber::from_digits([1, 1, 1], 3).to_u64(), Some(13));
        assert_eq!(BigNumber::from_digits([0, 0, 4, 2], 10).to_u64(), Some(42));
        assert!(BigNumber::from_digits(std::iter::empty(), 2).is_zero());
    }

    #[test]
    fn test_string_conversion() {
        let big = BigNumber::from_u64(255);
        assert_eq!(big.to_decimal_string(), "255");
        assert_eq!(big.to_string(), "255");
    }
}
