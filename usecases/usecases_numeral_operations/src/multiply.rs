//! Multiplication Module
//!
//! Multiplies two numeral lists through their arbitrary precision magnitudes.

use entities_number_list::{CircularList, NumberListError};
use infrastructure_base_conversion::DecimalCodec;

/// Product of `a` and `b`, expressed in `a`'s base.
///
/// Empty operands count as zero. The result is never empty: a zero product is
/// the single digit `0`.
pub fn multiply(a: &CircularList, b: &CircularList) -> Result<CircularList, NumberListError> {
    let product = DecimalCodec::to_magnitude(a).times(&DecimalCodec::to_magnitude(b));
    let result = DecimalCodec::from_magnitude(&product, a.base())?;
    tracing::debug!(
        target: "numeral::ops",
        lhs_base = a.base(),
        rhs_base = b.base(),
        digits = result.len(),
        "multiplied"
    );
    Ok(result)
}
