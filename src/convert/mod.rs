//! Conversion helpers
//!
//! String parsers plus the converter steps that turn a string-valued clause
//! into a typed clause. Converter steps parse lazily: a malformed string is
//! reported when the chain is evaluated, not when it is built.

mod clause;
mod errors;
mod parse;

pub use errors::{ConversionError, ConversionResult};
pub use parse::{
    parse_bool, parse_date_time, parse_date_time_exact, parse_decimal, parse_double, parse_float,
    parse_int, parse_long, DATE_FORMATS, DATE_TIME_FORMATS,
};
