//! Change of Scale Module
//!
//! Rebuilds a number in another radix. The target radix is fixed policy, not
//! derived from the source: binary lists become ternary, and so does any
//! other source base, unless `NUMERAL_SCALE_TARGET_BASE` says otherwise.

use entities_number_list::{CircularList, NumberListError};
use infrastructure_base_conversion::DecimalCodec;

use crate::config::NumeralConfig;

/// Rebuild `list` in the scale from [`NumeralConfig::from_env`], ternary by default
///
/// An empty list yields an empty list in the target base.
pub fn change_scale(list: &CircularList) -> Result<CircularList, NumberListError> {
    change_scale_with(list, &NumeralConfig::from_env())
}

/// Rebuild `list` in `config.scale_target_base`
pub fn change_scale_with(
    list: &CircularList,
    config: &NumeralConfig,
) -> Result<CircularList, NumberListError> {
    config.validate()?;
    let decimal = DecimalCodec::encode(list);
    let scaled = DecimalCodec::decode(&decimal, config.scale_target_base)?;
    tracing::debug!(
        target: "numeral::ops",
        from_base = list.base(),
        to_base = scaled.base(),
        digits = scaled.len(),
        "changed scale"
    );
    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirteen_binary_to_ternary() {
        let binary = DecimalCodec::decode("13", 2).unwrap();
        let ternary = change_scale(&binary).unwrap();
        assert_eq!(ternary.base(), 3);
        assert_eq!(ternary.to_vec(), vec![1, 1, 1]);
        assert_eq!(DecimalCodec::encode(&ternary), "13");
    }

    #[test]
    fn test_source_is_untouched() {
        let binary = DecimalCodec::decode("5", 2).unwrap();
        let _ = change_scale(&binary).unwrap();
        assert_eq!(binary.to_vec(), vec![1, 0, 1]);
        assert_eq!(binary.base(), 2);
    }

    #[test]
    fn test_empty_stays_empty_in_new_base() {
        let ternary = change_scale(&CircularList::new()).unwrap();
        assert!(ternary.is_empty());
        assert_eq!(ternary.base(), 3);
    }

    #[test]
    fn test_target_is_fixed_regardless_of_source() {
        let decimal = DecimalCodec::decode("9", 10).unwrap();
        let ternary = change_scale(&decimal).unwrap();
        assert_eq!(ternary.to_vec(), vec![1, 0, 0]);
    }

    #[test]
    fn test_configured_target() {
        let config = NumeralConfig {
            scale_target_base: 16,
            ..NumeralConfig::default()
        };
        let binary = DecimalCodec::decode("255", 2).unwrap();
        let hex = change_scale_with(&binary, &config).unwrap();
        assert_eq!(hex.to_vec(), vec![15, 15]);
    }

    #[test]
    fn test_invalid_configured_target() {
        let config = NumeralConfig {
            scale_target_base: 0,
            ..NumeralConfig::default()
        };
        assert_eq!(
            change_scale_with(&CircularList::new(), &config),
            Err(NumberListError::InvalidBase(0))
        );
    }
}
