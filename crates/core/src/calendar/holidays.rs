//! Holiday sets compared at calendar-day granularity.
//!
//! Membership ignores time-of-day: a holiday recorded as `2024-12-25 09:00`
//! excludes the whole of Christmas Day, whatever time the working date carries.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::date::CalendarDate;

/// A set of calendar days that never count as business days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    days: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty holiday set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the calendar day of `date`. Returns false if it was already present.
    pub fn insert(&mut self, date: &impl CalendarDate) -> bool {
        self.days.insert(date.calendar_day())
    }

    /// Returns true if `date` falls on a holiday.
    #[must_use]
    pub fn contains(&self, date: &impl CalendarDate) -> bool {
        self.days.contains(&date.calendar_day())
    }

    /// Number of distinct holiday days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if there are no holidays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Holidays in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.days.iter()
    }
}

impl<D: CalendarDate> FromIterator<D> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().map(|d| d.calendar_day()).collect(),
        }
    }
}

impl<D: CalendarDate> Extend<D> for HolidaySet {
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        self.days.extend(iter.into_iter().map(|d| d.calendar_day()));
    }
}
