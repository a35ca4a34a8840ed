//! Calendar and date-time format checks

use chrono::NaiveDate;

use crate::convert::{parse_date_time, parse_date_time_exact};

/// Checks if the (day, month, year) triple is a real calendar date.
pub fn is_date(day: u32, month: u32, year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Checks if the string parses with the invariant date-time formats.
pub fn is_date_time(value: &str) -> bool {
    parse_date_time(value).is_ok()
}

/// Checks if the string parses with one of the given chrono formats.
///
/// An empty format list behaves like [`is_date_time`].
pub fn is_date_time_exact(value: &str, formats: &[&str]) -> bool {
    parse_date_time_exact(value, formats).is_ok()
}
