//! Configuration Module
//!
//! Defaults for numeral lists and the operations on them.

use std::env;

use entities_number_list::{NumberListError, DEFAULT_BASE, MAX_BASE, MIN_BASE};

/// Record-book number this numeral variant is assigned to
pub const RECORD_BOOK_NUMBER: u32 = 3320;

/// Radix produced by [`change_scale`](crate::change_scale): binary becomes ternary
pub const SCALE_TARGET_BASE: u32 = 3;

/// Environment variable overriding [`NumeralConfig::base`]
pub const BASE_ENV: &str = "NUMERAL_BASE";
/// Environment variable overriding [`NumeralConfig::scale_target_base`]
pub const SCALE_TARGET_BASE_ENV: &str = "NUMERAL_SCALE_TARGET_BASE";

/// Numeral configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralConfig {
    /// Radix of lists built from decimal strings and files
    pub base: u32,
    /// Radix produced by a change of scale
    pub scale_target_base: u32,
}

impl Default for NumeralConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            scale_target_base: SCALE_TARGET_BASE,
        }
    }
}

impl NumeralConfig {
    /// Defaults overlaid with `NUMERAL_BASE` and `NUMERAL_SCALE_TARGET_BASE`.
    ///
    /// Unset variables leave the default in place. Values that do not parse
    /// or fall outside `2..=256` are logged and ignored, so the result always
    /// passes [`validate`](Self::validate).
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, current: u32| {
            let Some(raw) = lookup(key) else {
                return current;
            };
            match raw.trim().parse::<u32>() {
                Ok(base) if is_supported_base(base) => base,
                _ => {
                    tracing::warn!(
                        target: "numeral::config",
                        variable = key,
                        value = %raw,
                        fallback = current,
                        "ignoring invalid base override"
                    );
                    current
                }
            }
        };
        self.base = pick(BASE_ENV, self.base);
        self.scale_target_base = pick(SCALE_TARGET_BASE_ENV, self.scale_target_base);
        self
    }

    /// Check both radixes are within `2..=256`
    pub fn validate(&self) -> Result<(), NumberListError> {
        for base in [self.base, self.scale_target_base] {
            if !is_supported_base(base) {
                return Err(NumberListError::InvalidBase(base));
            }
        }
        Ok(())
    }
}

fn is_supported_base(base: u32) -> bool {
    (MIN_BASE..=MAX_BASE).contains(&base)
}

/// Record-book number
pub fn record_book_number() -> u32 {
    RECORD_BOOK_NUMBER
}
