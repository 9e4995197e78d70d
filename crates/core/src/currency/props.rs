//! Property-based tests for currency operations.
//!
//! - Rounded amounts carry exactly the requested scale
//! - Rounding moves a value by at most half a unit
//! - Percentages of a zero total are always zero

#![allow(clippy::float_arithmetic, clippy::float_cmp)]

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::percentage::calculate_percentage;
use super::rounding::round_currency;

/// Strategy to generate signed decimal amounts with up to 6 decimal places.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate decimal places (0 to 6).
fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=6
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount and precision, the result has exactly that many
    /// digits after the decimal point.
    #[test]
    fn prop_round_has_exact_scale(
        amount in signed_amount(),
        places in decimal_places(),
    ) {
        let result = round_currency(amount, places).unwrap();
        prop_assert_eq!(result.scale(), places);
    }

    /// *For any* amount, the rounding error is at most half a unit in the
    /// last place, and exactly half only when rounding away from zero.
    #[test]
    fn prop_round_error_bounded(
        amount in signed_amount(),
        places in decimal_places(),
    ) {
        let result = round_currency(amount, places).unwrap();
        let half_unit = Decimal::new(5, places + 1);
        let diff = (result - amount).abs();
        prop_assert!(diff <= half_unit, "{} -> {} moved by {}", amount, result, diff);
        if diff == half_unit {
            prop_assert!(result.abs() > amount.abs(), "tie {} should round away from zero", amount);
        }
    }

    /// *For any* amount, rounding is symmetric around zero.
    #[test]
    fn prop_round_symmetric(
        amount in signed_amount(),
        places in decimal_places(),
    ) {
        let positive = round_currency(amount, places).unwrap();
        let negative = round_currency(-amount, places).unwrap();
        prop_assert_eq!(positive, -negative);
    }

    /// *For any* rounded amount, rounding again is a no-op.
    #[test]
    fn prop_round_idempotent(
        amount in signed_amount(),
        places in decimal_places(),
    ) {
        let once = round_currency(amount, places).unwrap();
        let twice = round_currency(once, places).unwrap();
        prop_assert_eq!(once.to_string(), twice.to_string());
    }

    /// *For any* value, a zero total yields 0.0.
    #[test]
    fn prop_percentage_of_zero_total_is_zero(
        value in signed_amount(),
        places in decimal_places(),
    ) {
        let result = calculate_percentage(value, Decimal::ZERO, places).unwrap();
        prop_assert!(result == 0.0);
    }

    /// *For any* non-zero total, the value itself is 100%.
    #[test]
    fn prop_percentage_of_self_is_hundred(
        total in signed_amount().prop_filter("non-zero", |d| !d.is_zero()),
        places in decimal_places(),
    ) {
        let result = calculate_percentage(total, total, places).unwrap();
        prop_assert!((result - 100.0).abs() < f64::EPSILON);
    }
}
