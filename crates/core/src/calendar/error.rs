//! Calendar error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during date arithmetic or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Stepping forward ran past the last representable date.
    #[error("Adding {days} business days to {start} exceeds the supported date range")]
    DateOutOfRange {
        /// Calendar day the calculation started from.
        start: NaiveDate,
        /// Requested number of business days.
        days: u32,
    },

    /// The start's time-of-day does not exist on the next calendar day,
    /// e.g. 02:30 on a day whose clocks jump from 02:00 to 03:00.
    #[error("Local time of {start} does not exist on {day}")]
    NonexistentLocalTime {
        /// Calendar day the calculation started from.
        start: NaiveDate,
        /// Calendar day the step could not land on.
        day: NaiveDate,
    },

    /// Input string was empty or whitespace.
    #[error("Date string is empty")]
    EmptyInput,

    /// No known format matched the input.
    #[error("Unrecognised date: {0}")]
    Unparseable(String),
}
