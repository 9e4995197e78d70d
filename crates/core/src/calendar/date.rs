//! Calendar-day view over chrono's date and date-time types.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeZone};

/// A value that sits on a calendar day and can step to the next one.
///
/// Business-day arithmetic only ever looks at the calendar day; any
/// time-of-day or offset carried by the value is preserved as it steps.
pub trait CalendarDate: Sized {
    /// The calendar day this value falls on.
    fn calendar_day(&self) -> NaiveDate;

    /// The same value one calendar day later.
    ///
    /// `None` past the supported range, or for zoned values whose local time
    /// does not exist on the next day (a daylight-saving gap).
    fn next_day(&self) -> Option<Self>;
}

impl CalendarDate for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }

    fn next_day(&self) -> Option<Self> {
        self.succ_opt()
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }

    fn next_day(&self) -> Option<Self> {
        self.checked_add_days(Days::new(1))
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }

    fn next_day(&self) -> Option<Self> {
        self.clone().checked_add_days(Days::new(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_naive_date_steps() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(d.calendar_day(), d);
        assert_eq!(d.next_day(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(NaiveDate::MAX.next_day(), None);
    }

    #[test]
    fn test_datetime_keeps_time_of_day() {
        let dt = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(17, 30, 0)
            .unwrap();
        let next = dt.next_day().unwrap();
        assert_eq!(next.calendar_day(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(next.time(), dt.time());
    }

    #[test]
    fn test_zoned_datetime_uses_local_day() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 2, 9, 2, 0, 0).unwrap();
        // 2024-02-08T17:00Z, but the local calendar day is the 9th.
        assert_eq!(dt.with_timezone(&Utc).date_naive(), NaiveDate::from_ymd_opt(2024, 2, 8).unwrap());
        assert_eq!(dt.calendar_day(), NaiveDate::from_ymd_opt(2024, 2, 9).unwrap());
        assert_eq!(dt.next_day().unwrap().calendar_day(), NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    }
}
