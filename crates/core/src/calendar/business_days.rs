//! Business-day arithmetic.
//!
//! A business day is Monday through Friday and not in the holiday set.
//! Counting steps forward one calendar day at a time; only days that pass
//! the business-day test consume the requested count, so the result always
//! lands on a business day.

use chrono::Datelike;
use tally_shared::config::CalendarConfig;
use tracing::trace;

use super::date::CalendarDate;
use super::error::CalendarError;
use super::holidays::HolidaySet;

/// Weekday index with Monday as 0 and Sunday as 6.
#[must_use]
pub fn weekday_index(date: &impl CalendarDate) -> u32 {
    date.calendar_day().weekday().num_days_from_monday()
}

/// Returns true if `date` is a weekday and not a holiday.
#[must_use]
pub fn is_business_day(date: &impl CalendarDate, holidays: &HolidaySet) -> bool {
    weekday_index(date) < 5 && !holidays.contains(date)
}

/// Adds `days` business days to `date`.
///
/// Omitted `holidays` means no holidays. Zero `days` returns `date`
/// unchanged, even when it is itself a weekend or holiday. Any time-of-day
/// on `date` carries through to the result.
///
/// # Errors
///
/// - `CalendarError::DateOutOfRange` if the count runs past the last
///   representable date
/// - `CalendarError::NonexistentLocalTime` if `date` is zoned and its
///   time-of-day falls in a daylight-saving gap on a day it steps onto
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use tally_core::calendar::add_business_days;
///
/// // Friday + 1 business day = Monday
/// let friday = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2024, 2, 12).unwrap();
/// assert_eq!(add_business_days(friday, 1, None).unwrap(), monday);
/// ```
pub fn add_business_days<D: CalendarDate>(
    date: D,
    days: u32,
    holidays: Option<&HolidaySet>,
) -> Result<D, CalendarError> {
    let no_holidays = HolidaySet::new();
    let holidays = holidays.unwrap_or(&no_holidays);
    let start = date.calendar_day();

    let mut current = date;
    let mut remaining = days;
    while remaining > 0 {
        current = match current.next_day() {
            Some(next) => next,
            None => {
                return Err(match current.calendar_day().succ_opt() {
                    Some(day) => CalendarError::NonexistentLocalTime { start, day },
                    None => CalendarError::DateOutOfRange { start, days },
                });
            }
        };
        if is_business_day(&current, holidays) {
            remaining -= 1;
        }
    }

    trace!(%start, days, end = %current.calendar_day(), "added business days");
    Ok(current)
}

/// A business calendar with a fixed holiday set.
#[derive(Debug, Clone, Default)]
pub struct BusinessCalendar {
    holidays: HolidaySet,
}

impl BusinessCalendar {
    /// Creates a calendar that excludes `holidays`.
    #[must_use]
    pub fn new(holidays: HolidaySet) -> Self {
        Self { holidays }
    }

    /// Creates a calendar from the `calendar` configuration section.
    #[must_use]
    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::new(config.holidays.iter().copied().collect())
    }

    /// The holidays this calendar excludes.
    #[must_use]
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Returns true if `date` is a business day in this calendar.
    #[must_use]
    pub fn is_business_day(&self, date: &impl CalendarDate) -> bool {
        is_business_day(date, &self.holidays)
    }

    /// Adds `days` business days to `date`, skipping this calendar's holidays.
    pub fn add_business_days<D: CalendarDate>(
        &self,
        date: D,
        days: u32,
    ) -> Result<D, CalendarError> {
        add_business_days(date, days, Some(&self.holidays))
    }
}
