//! Currency rounder bound to a configured precision.
//!
//! Wraps [`round_currency`] and [`calculate_percentage`] so callers that
//! load [`RoundingConfig`] once do not have to thread `decimal_places`
//! through every call.

use rust_decimal::Decimal;
use tally_shared::config::RoundingConfig;

use super::amount::Amount;
use super::error::CurrencyError;
use super::percentage::calculate_percentage;
use super::rounding::{check_precision, round_currency, DEFAULT_DECIMAL_PLACES};

/// Rounds amounts and percentages to a fixed number of decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyRounder {
    decimal_places: u32,
}

impl Default for CurrencyRounder {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl CurrencyRounder {
    /// Creates a rounder for `decimal_places` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::PrecisionTooLarge` if `decimal_places` exceeds 28.
    pub fn new(decimal_places: u32) -> Result<Self, CurrencyError> {
        check_precision(decimal_places)?;
        Ok(Self { decimal_places })
    }

    /// Creates a rounder from the `rounding` configuration section.
    ///
    /// # Errors
    ///
    /// Same as [`CurrencyRounder::new`].
    pub fn from_config(config: &RoundingConfig) -> Result<Self, CurrencyError> {
        Self::new(config.decimal_places)
    }

    /// Configured number of decimal places.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Rounds `amount` half-up to the configured precision.
    pub fn round(&self, amount: impl Into<Amount>) -> Result<Decimal, CurrencyError> {
        round_currency(amount, self.decimal_places)
    }

    /// Percentage of `value` over `total` at the configured precision.
    pub fn percentage(
        &self,
        value: impl Into<Amount>,
        total: impl Into<Amount>,
    ) -> Result<f64, CurrencyError> {
        calculate_percentage(value, total, self.decimal_places)
    }
}
