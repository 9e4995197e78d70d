//! Property-based tests for business-day arithmetic.
//!
//! - Results always land on a business day
//! - Zero days is the identity
//! - Exactly `days` business days lie in `(start, result]`

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use super::business_days::{add_business_days, is_business_day};
use super::holidays::HolidaySet;

/// Strategy to generate dates between 2000-01-01 and roughly 2054.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

/// Strategy to generate holiday sets clustered after 2000-01-01.
fn holiday_set() -> impl Strategy<Value = HolidaySet> {
    prop::collection::vec(any_date(), 0..200).prop_map(|days| days.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* start and positive count, the result is a weekday outside the holiday set.
    #[test]
    fn prop_result_is_business_day(
        start in any_date(),
        days in 1u32..60,
        holidays in holiday_set(),
    ) {
        let result = add_business_days(start, days, Some(&holidays)).unwrap();
        prop_assert!(is_business_day(&result, &holidays), "{} is not a business day", result);
        prop_assert!(result > start);
    }

    /// *For any* date, adding zero business days returns it unchanged.
    #[test]
    fn prop_zero_days_is_identity(
        start in any_date(),
        holidays in holiday_set(),
    ) {
        prop_assert_eq!(add_business_days(start, 0, Some(&holidays)).unwrap(), start);
        prop_assert_eq!(add_business_days(start, 0, None).unwrap(), start);
    }

    /// *For any* start, the open-closed interval to the result holds exactly
    /// `days` business days.
    #[test]
    fn prop_counts_exact_business_days(
        start in any_date(),
        days in 0u32..60,
        holidays in holiday_set(),
    ) {
        let result = add_business_days(start, days, Some(&holidays)).unwrap();
        let counted = start
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= result)
            .filter(|d| is_business_day(d, &holidays))
            .count();
        prop_assert_eq!(counted, days as usize);
    }

    /// *For any* split `a + b`, adding in two steps equals adding at once.
    #[test]
    fn prop_additive(
        start in any_date(),
        a in 0u32..30,
        b in 0u32..30,
        holidays in holiday_set(),
    ) {
        let once = add_business_days(start, a + b, Some(&holidays)).unwrap();
        let first = add_business_days(start, a, Some(&holidays)).unwrap();
        let twice = add_business_days(first, b, Some(&holidays)).unwrap();
        prop_assert_eq!(once, twice);
    }
}
