//! Percentage calculation.
//!
//! The division runs in exact decimal arithmetic; only the final result is
//! handed back as `f64`.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::amount::Amount;
use super::error::CurrencyError;
use super::rounding::check_precision;

/// Calculates `value / total * 100`, rounded to `decimal_places`.
///
/// A zero `total` yields `0.0` instead of a division error. Rounding is
/// standard round-half-to-even.
///
/// # Errors
///
/// - `CurrencyError::PrecisionTooLarge` if `decimal_places` exceeds 28
/// - Conversion errors from [`Amount::to_decimal`] for float inputs
/// - `CurrencyError::Overflow` if the quotient does not fit in a decimal
///
/// # Example
///
/// ```
/// use tally_core::currency::calculate_percentage;
///
/// assert_eq!(calculate_percentage(50, 200, 2).unwrap(), 25.0);
/// assert_eq!(calculate_percentage(50, 0, 2).unwrap(), 0.0);
/// ```
pub fn calculate_percentage(
    value: impl Into<Amount>,
    total: impl Into<Amount>,
    decimal_places: u32,
) -> Result<f64, CurrencyError> {
    check_precision(decimal_places)?;
    let value = value.into().to_decimal()?;
    let total = total.into().to_decimal()?;

    if total.is_zero() {
        debug!(%value, "percentage of zero total, returning 0");
        return Ok(0.0);
    }

    let percentage = value
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(CurrencyError::Overflow("percentage"))?
        .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);

    // Parsing the decimal string gives the nearest f64, digit for digit.
    let repr = percentage.to_string();
    repr.parse::<f64>()
        .map_err(|_| CurrencyError::AmountOutOfRange(repr))
}
