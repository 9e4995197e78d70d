//! Numeric input accepted by the currency helpers.
//!
//! Amounts may arrive as binary floats or as exact decimals. Floats are
//! converted through their shortest round-trip decimal string, so `2.005_f64`
//! becomes exactly `2.005` rather than `2.00499999999999989...`.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::CurrencyError;

/// A numeric amount, either binary floating-point or exact decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Binary floating-point input.
    Float(f64),
    /// Exact decimal input.
    Exact(Decimal),
}

impl Amount {
    /// Converts the amount to an exact decimal.
    ///
    /// # Errors
    ///
    /// - `CurrencyError::NonFiniteAmount` for NaN or infinite floats
    /// - `CurrencyError::AmountOutOfRange` for floats beyond `Decimal::MAX`
    pub fn to_decimal(self) -> Result<Decimal, CurrencyError> {
        match self {
            Self::Exact(value) => Ok(value),
            Self::Float(value) => {
                if !value.is_finite() {
                    return Err(CurrencyError::NonFiniteAmount(value.to_string()));
                }
                // f64's Display never uses exponent notation.
                let repr = value.to_string();
                Decimal::from_str(&repr).map_err(|_| CurrencyError::AmountOutOfRange(repr))
            }
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::Exact(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Exact(Decimal::from(value))
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::Exact(Decimal::from(value))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self::Exact(Decimal::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_float_converts_through_shortest_repr() {
        assert_eq!(Amount::from(2.005).to_decimal().unwrap(), dec!(2.005));
        assert_eq!(Amount::from(10.126).to_decimal().unwrap(), dec!(10.126));
        assert_eq!(Amount::from(0.1).to_decimal().unwrap(), dec!(0.1));
        assert_eq!(Amount::from(-3.5).to_decimal().unwrap(), dec!(-3.5));
    }

    #[test]
    fn test_exact_and_integers_pass_through() {
        assert_eq!(Amount::from(dec!(1.2345)).to_decimal().unwrap(), dec!(1.2345));
        assert_eq!(Amount::from(42_i64).to_decimal().unwrap(), dec!(42));
        assert_eq!(Amount::from(-7_i32).to_decimal().unwrap(), dec!(-7));
        assert_eq!(Amount::from(200_u32).to_decimal().unwrap(), dec!(200));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Amount::from(f64::NAN).to_decimal(),
            Err(CurrencyError::NonFiniteAmount(_))
        ));
        assert!(matches!(
            Amount::from(f64::INFINITY).to_decimal(),
            Err(CurrencyError::NonFiniteAmount(_))
        ));
    }

    #[test]
    fn test_huge_float_out_of_range() {
        assert!(matches!(
            Amount::from(1e30).to_decimal(),
            Err(CurrencyError::AmountOutOfRange(_))
        ));
    }
}
