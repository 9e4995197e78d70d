//! Business-day arithmetic and date parsing.

pub mod business_days;
pub mod date;
pub mod error;
pub mod holidays;
pub mod parser;

#[cfg(test)]
mod props;

pub use business_days::{add_business_days, is_business_day, weekday_index, BusinessCalendar};
pub use date::CalendarDate;
pub use error::CalendarError;
pub use holidays::HolidaySet;
pub use parser::{parse_date, DateParser};
