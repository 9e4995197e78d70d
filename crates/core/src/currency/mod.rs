//! Currency rounding and percentage helpers.

pub mod amount;
pub mod error;
pub mod percentage;
pub mod rounding;
pub mod service;

#[cfg(test)]
mod props;

pub use amount::Amount;
pub use error::CurrencyError;
pub use percentage::calculate_percentage;
pub use rounding::{round_currency, round_money, DEFAULT_DECIMAL_PLACES};
pub use service::CurrencyRounder;
