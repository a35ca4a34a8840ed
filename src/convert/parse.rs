//! String parsers shared by the converter steps and the validators
//!
//! Parsing rules:
//! - Surrounding whitespace is ignored
//! - Blank input never parses
//! - Integers accept an optional leading sign
//! - Doubles accept thousands separators in groups of three
//! - Decimals accept a leading or trailing sign, never an exponent
//! - Date-times use a fixed set of invariant formats

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use rust_decimal::Decimal;

use super::errors::{ConversionError, ConversionResult};

/// Date-time formats tried by [`parse_date_time`], in order.
pub const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only formats tried by [`parse_date_time`], resolved to midnight.
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

fn thousands_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([+-]?)(\d{1,3}(?:,\d{3})+)([.eE].*)?$").expect("thousands pattern is valid")
    })
}

fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([+-]?)(\d{1,3}(?:,\d{3})+|\d*)(?:\.(\d*))?([+-]?)$")
            .expect("decimal pattern is valid")
    })
}

fn non_blank<'a>(input: &'a str, target: &'static str) -> ConversionResult<&'a str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::new(input, target));
    }
    Ok(trimmed)
}

/// Parse a 32-bit signed integer
pub fn parse_int(input: &str) -> ConversionResult<i32> {
    let text = non_blank(input, "i32")?;
    text.parse::<i32>()
        .map_err(|_| ConversionError::new(input, "i32"))
}

/// Parse a 64-bit signed integer
pub fn parse_long(input: &str) -> ConversionResult<i64> {
    let text = non_blank(input, "i64")?;
    text.parse::<i64>()
        .map_err(|_| ConversionError::new(input, "i64"))
}

/// Parse a single-precision float
pub fn parse_float(input: &str) -> ConversionResult<f32> {
    let text = non_blank(input, "f32")?;
    text.parse::<f32>()
        .map_err(|_| ConversionError::new(input, "f32"))
}

/// Parse a double-precision float, allowing thousands separators
/// in the integer part (`1,234.5`).
pub fn parse_double(input: &str) -> ConversionResult<f64> {
    let text = non_blank(input, "f64")?;

    let normalized = if text.contains(',') {
        let captures = thousands_pattern()
            .captures(text)
            .ok_or_else(|| ConversionError::new(input, "f64"))?;
        format!(
            "{}{}{}",
            &captures[1],
            captures[2].replace(',', ""),
            captures.get(3).map_or("", |m| m.as_str())
        )
    } else {
        text.to_string()
    };

    normalized
        .parse::<f64>()
        .map_err(|_| ConversionError::new(input, "f64"))
}

/// Parse a fixed-point decimal.
///
/// Accepts thousands separators in the integer part and a sign either
/// before or after the digits (`-10.5`, `10.5-`). Exponents are rejected,
/// as are values outside the range of [`Decimal`].
pub fn parse_decimal(input: &str) -> ConversionResult<Decimal> {
    let text = non_blank(input, "decimal")?;
    let invalid = || ConversionError::new(input, "decimal");

    let captures = decimal_pattern().captures(text).ok_or_else(invalid)?;
    let leading = &captures[1];
    let trailing = &captures[4];
    let integral = captures[2].replace(',', "");
    let fraction = captures.get(3).map_or("", |m| m.as_str());

    if integral.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !leading.is_empty() && !trailing.is_empty() {
        return Err(invalid());
    }

    let sign = if leading == "-" || trailing == "-" { "-" } else { "" };
    let integral = if integral.is_empty() { "0" } else { integral.as_str() };
    let normalized = if fraction.is_empty() {
        format!("{}{}", sign, integral)
    } else {
        format!("{}{}.{}", sign, integral, fraction)
    };

    normalized.parse::<Decimal>().map_err(|_| invalid())
}

/// Parse `true` / `false`, ignoring case
pub fn parse_bool(input: &str) -> ConversionResult<bool> {
    let text = non_blank(input, "bool")?;
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConversionError::new(input, "bool"))
    }
}

/// Parse a date-time using the invariant format set.
///
/// RFC 3339 input with an offset is normalized to UTC.
pub fn parse_date_time(input: &str) -> ConversionResult<NaiveDateTime> {
    let text = non_blank(input, "date-time")?;

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.naive_utc());
    }

    parse_with_formats(text, DATE_TIME_FORMATS, DATE_FORMATS)
        .ok_or_else(|| ConversionError::new(input, "date-time"))
}

/// Parse a date-time against caller-supplied chrono format strings.
///
/// Each format is tried first as a full date-time, then as a date at
/// midnight. An empty format list falls back to [`parse_date_time`].
pub fn parse_date_time_exact(input: &str, formats: &[&str]) -> ConversionResult<NaiveDateTime> {
    if formats.is_empty() {
        return parse_date_time(input);
    }

    let text = non_blank(input, "date-time")?;
    parse_with_formats(text, formats, formats)
        .ok_or_else(|| ConversionError::new(input, "date-time"))
}

fn parse_with_formats(
    text: &str,
    date_time_formats: &[&str],
    date_formats: &[&str],
) -> Option<NaiveDateTime> {
    date_time_formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            date_formats.iter().find_map(|format| {
                NaiveDate::parse_from_str(text, format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
        })
}
