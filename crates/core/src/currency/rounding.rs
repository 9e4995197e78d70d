//! Currency rounding.
//!
//! CRITICAL: Rounding strategy for currency amounts:
//! - Round half up (ties away from zero), NOT banker's rounding
//! - Result always carries exactly the requested number of decimals
//! - Float inputs go through their decimal string first (see [`Amount`])

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use tally_shared::config::MAX_DECIMAL_PLACES;
use tally_shared::types::Money;
use tracing::trace;

use super::amount::Amount;
use super::error::CurrencyError;

/// Default number of fractional digits for currency amounts.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to `decimal_places` using round-half-up.
///
/// The returned decimal always has a scale of exactly `decimal_places`,
/// so `10` rounded to two places is `10.00`.
///
/// # Errors
///
/// - `CurrencyError::PrecisionTooLarge` if `decimal_places` exceeds 28
/// - `CurrencyError::ScaleOverflow` if the amount has too many integer
///   digits for `decimal_places` more (e.g. `Decimal::MAX` at 2 places)
/// - Conversion errors from [`Amount::to_decimal`] for float inputs
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::currency::round_currency;
///
/// assert_eq!(round_currency(10.126, 2).unwrap(), dec!(10.13));
/// assert_eq!(round_currency(2.005, 2).unwrap(), dec!(2.01));
/// ```
pub fn round_currency(
    amount: impl Into<Amount>,
    decimal_places: u32,
) -> Result<Decimal, CurrencyError> {
    check_precision(decimal_places)?;
    let value = amount.into().to_decimal()?;

    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    // round_dp never widens the scale; pad so `10` becomes `10.00`.
    rounded.rescale(decimal_places);
    // rescale stops short when the mantissa would exceed 96 bits.
    if rounded.scale() != decimal_places {
        return Err(CurrencyError::ScaleOverflow {
            amount: value.to_string(),
            decimal_places,
        });
    }

    trace!(%value, %rounded, decimal_places, "rounded currency amount");
    Ok(rounded)
}

/// Rounds a [`Money`] value to its currency's minor units.
///
/// # Errors
///
/// Propagates errors from [`round_currency`].
pub fn round_money(money: Money) -> Result<Money, CurrencyError> {
    let amount = round_currency(money.amount, money.currency.minor_units())?;
    Ok(Money::new(amount, money.currency))
}

pub(crate) fn check_precision(decimal_places: u32) -> Result<(), CurrencyError> {
    if decimal_places > MAX_DECIMAL_PLACES {
        return Err(CurrencyError::PrecisionTooLarge {
            requested: decimal_places,
            max: MAX_DECIMAL_PLACES,
        });
    }
    Ok(())
}
