//! Best-effort date parsing.
//!
//! Tries a fixed sequence of formats and returns the first match. Date-only
//! inputs resolve to midnight. Inputs carrying a UTC offset keep their local
//! wall-clock time; the offset itself is dropped.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use tally_shared::config::ParserConfig;
use tracing::debug;

use super::error::CalendarError;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    // ctime; input whitespace is collapsed first, so "Feb  8" matches %d
    "%a %b %d %H:%M:%S %Y",
];

// Tried before full dates so "Feb 2024" is not split into day 20, year 24.
const MONTH_YEAR_FORMATS: &[&str] = &["%B %Y", "%B, %Y", "%Y-%m", "%m/%Y"];

// %B also accepts abbreviated month names when parsing. Four-digit-year
// forms come before their two-digit-year twins.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%d-%b-%Y",
    "%A, %B %d, %Y",
    "%a, %d %b %Y",
    "%B %d, %y",
    "%B %d %y",
    "%d %B %y",
    "%d-%b-%y",
];

const MONTH_FIRST_FORMATS: &[&str] = &[
    "%m/%d/%Y", "%m-%d-%Y", "%m.%d.%Y", "%m/%d/%y", "%m-%d-%y", "%m.%d.%y",
];
const DAY_FIRST_FORMATS: &[&str] = &[
    "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%d/%m/%y", "%d-%m-%y", "%d.%m.%y",
];

/// Which parts a format string describes.
#[derive(Debug, Clone, Copy)]
enum Shape {
    DateTime,
    Date,
    MonthYear,
}

/// A format-flexible date parser.
///
/// Ambiguous numeric dates such as `01/02/2024` are read month-first unless
/// `day_first` is set; the other order is still tried when the preferred one
/// cannot produce a valid date, so `25/12/2024` parses either way.
///
/// Formats with a four-digit year (`%Y`) only accept years 1000 through
/// 9999. Two-digit years (`%y`) follow chrono's century window, so `24` is
/// 2024 and `99` is 1999. A month and year without a day resolve to the first of the month.
#[derive(Debug, Clone, Default)]
pub struct DateParser {
    day_first: bool,
    extra_formats: Vec<String>,
}

impl DateParser {
    /// Creates a parser with the built-in formats.
    #[must_use]
    pub fn new(day_first: bool) -> Self {
        Self {
            day_first,
            extra_formats: Vec::new(),
        }
    }

    /// Creates a parser from the `parser` configuration section.
    #[must_use]
    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            day_first: config.day_first,
            extra_formats: config.extra_formats.clone(),
        }
    }

    /// Adds a `chrono` format string tried after the built-in ones.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.extra_formats.push(format.into());
        self
    }

    /// Parses `input` into a date-time.
    ///
    /// # Errors
    ///
    /// - `CalendarError::EmptyInput` if `input` is blank
    /// - `CalendarError::Unparseable` if no format matches
    pub fn parse(&self, input: &str) -> Result<NaiveDateTime, CalendarError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.naive_local());
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Ok(dt.naive_local());
        }

        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        let (preferred, fallback) = if self.day_first {
            (DAY_FIRST_FORMATS, MONTH_FIRST_FORMATS)
        } else {
            (MONTH_FIRST_FORMATS, DAY_FIRST_FORMATS)
        };

        let builtin = DATETIME_FORMATS
            .iter()
            .map(|f| (*f, Shape::DateTime))
            .chain(MONTH_YEAR_FORMATS.iter().map(|f| (*f, Shape::MonthYear)))
            .chain(DATE_FORMATS.iter().map(|f| (*f, Shape::Date)))
            .chain(preferred.iter().map(|f| (*f, Shape::Date)))
            .chain(fallback.iter().map(|f| (*f, Shape::Date)));
        for (format, shape) in builtin {
            if let Some(dt) = parse_with(&normalized, format, shape) {
                return Ok(dt);
            }
        }

        for format in &self.extra_formats {
            if let Some(dt) = parse_with(&normalized, format, Shape::DateTime)
                .or_else(|| parse_with(&normalized, format, Shape::Date))
            {
                return Ok(dt);
            }
        }

        Err(CalendarError::Unparseable(s.to_string()))
    }
}

fn parse_with(s: &str, format: &str, shape: Shape) -> Option<NaiveDateTime> {
    let parsed = match shape {
        Shape::DateTime => NaiveDateTime::parse_from_str(s, format).ok(),
        Shape::Date => NaiveDate::parse_from_str(s, format)
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN)),
        // Month-year inputs resolve to the first of the month.
        Shape::MonthYear => NaiveDate::parse_from_str(&format!("{s} 1"), &format!("{format} %d"))
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN)),
    }?;

    // %Y reads one to four digits, so "24" would otherwise become year 24.
    if format.contains("%Y") && !(1000..=9999).contains(&parsed.year()) {
        return None;
    }
    Some(parsed)
}

/// Parses a free-form date string with the default parser.
///
/// Returns `None` instead of an error when nothing matches.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use tally_core::calendar::parse_date;
///
/// let parsed = parse_date("2024-02-08").unwrap();
/// assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 2, 8).unwrap());
/// assert!(parse_date("not a date").is_none());
/// ```
#[must_use]
pub fn parse_date(date_str: &str) -> Option<NaiveDateTime> {
    match DateParser::default().parse(date_str) {
        Ok(dt) => Some(dt),
        Err(err) => {
            debug!(input = date_str, error = %err, "date parse failed");
            None
        }
    }
}
