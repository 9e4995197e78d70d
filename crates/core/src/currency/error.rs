//! Currency error types.

use thiserror::Error;

/// Errors that can occur while rounding or computing percentages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Floating-point input was NaN or infinite.
    #[error("Amount is not a finite number: {0}")]
    NonFiniteAmount(String),

    /// Input does not fit in an exact decimal.
    #[error("Amount is out of range for exact decimal arithmetic: {0}")]
    AmountOutOfRange(String),

    /// Requested more fractional digits than an exact decimal can hold.
    #[error("Decimal places must be at most {max}, got {requested}")]
    PrecisionTooLarge {
        /// Requested decimal places.
        requested: u32,
        /// Maximum supported decimal places.
        max: u32,
    },

    /// Amount has too many integer digits to carry the requested scale.
    #[error("Amount {amount} cannot carry {decimal_places} decimal places")]
    ScaleOverflow {
        /// The rounded amount.
        amount: String,
        /// Requested decimal places.
        decimal_places: u32,
    },

    /// Intermediate result overflowed.
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}
