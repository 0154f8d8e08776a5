//! Common API Facades
//!
//! Construction entry points and the record-book query.

use std::path::Path;

use adapters_io_operations::NumberFile;
use entities_number_list::{CircularList, NumberListError};
use infrastructure_base_conversion::DecimalCodec;
use usecases_numeral_operations::NumeralConfig;

/// List holding the decimal number `value`, in the base from
/// [`NumeralConfig::from_env`] (binary by default).
///
/// Malformed or negative input gives an empty list.
pub fn from_decimal(value: &str) -> CircularList {
    from_decimal_with_config(value, &NumeralConfig::from_env())
}

/// List holding the decimal number `value`, in `config.base`.
///
/// An invalid configured base gives an empty binary list.
pub fn from_decimal_with_config(value: &str, config: &NumeralConfig) -> CircularList {
    DecimalCodec::decode(value, config.base).unwrap_or_default()
}

/// List of `base` digits holding the decimal number `value`
pub fn from_decimal_with_base(value: &str, base: u32) -> Result<CircularList, NumberListError> {
    DecimalCodec::decode(value, base)
}

/// List holding the decimal number on the first line of `path`, in the base
/// from [`NumeralConfig::from_env`] (binary by default).
///
/// Any read failure gives an empty list.
pub fn from_file<P: AsRef<Path>>(path: P) -> CircularList {
    let config = NumeralConfig::from_env();
    NumberFile::load_with_base(path, config.base).unwrap_or_default()
}

/// Record-book number; a constant with no side effects
pub fn record_book_number() -> u32 {
    usecases_numeral_operations::record_book_number()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        assert_eq!(from_decimal("13").to_vec(), vec![1, 1, 0, 1]);
        assert!(from_decimal("-13").is_empty());
        assert!(from_decimal("1x3").is_empty());
        assert_eq!(from_decimal("").base(), 2);
    }

    #[test]
    fn test_from_decimal_with_base() {
        let list = from_decimal_with_base("13", 3).unwrap();
        assert_eq!(list.to_vec(), vec![1, 1, 1]);
        assert!(from_decimal_with_base("13", 0).is_err());
    }

    #[test]
    fn test_from_decimal_with_config() {
        let config = NumeralConfig {
            base: 10,
            ..NumeralConfig::default()
        };
        assert_eq!(from_decimal_with_config("409", &config).to_vec(), vec![4, 0, 9]);

        let broken = NumeralConfig {
            base: 0,
            ..NumeralConfig::default()
        };
        let list = from_decimal_with_config("409", &broken);
        assert!(list.is_empty());
        assert_eq!(list.base(), 2);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(from_file(dir.path().join("nope")).is_empty());
    }

    #[test]
    fn test_record_book_number() {
        assert_eq!(record_book_number(), 3320);
    }
}
