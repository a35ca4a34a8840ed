//! Numeric and boolean format checks

use crate::convert::{
    parse_bool, parse_decimal, parse_double, parse_float, parse_int, parse_long,
};

/// Checks if the string is a valid 32-bit integer.
pub fn is_int(value: &str) -> bool {
    parse_int(value).is_ok()
}

/// Checks if the string is a valid 64-bit integer.
pub fn is_long(value: &str) -> bool {
    parse_long(value).is_ok()
}

/// Checks if the string is a valid single-precision float.
pub fn is_float(value: &str) -> bool {
    parse_float(value).is_ok()
}

/// Checks if the string is a valid double, thousands separators allowed.
pub fn is_double(value: &str) -> bool {
    parse_double(value).is_ok()
}

/// Checks if the string is a plain decimal number.
///
/// Accepts a leading or trailing sign, thousands separators and a decimal
/// point. Exponents are rejected.
pub fn is_decimal(value: &str) -> bool {
    parse_decimal(value).is_ok()
}

/// Checks if the string is `true` or `false`, ignoring case.
pub fn is_bool(value: &str) -> bool {
    parse_bool(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_int() {
        assert!(is_int("123"));
        assert!(is_int(" -123 "));
        assert!(!is_int(""));
        assert!(!is_int("   "));
        assert!(!is_int("12.0"));
        assert!(!is_int("99999999999"));
    }

    #[test]
    fn test_is_long() {
        assert!(is_long("99999999999"));
        assert!(!is_long("ten"));
    }

    #[test]
    fn test_is_float_and_double() {
        assert!(is_float("3.14"));
        assert!(is_float("-2e10"));
        assert!(!is_float("3,14"));
        assert!(is_double("3,140.5"));
        assert!(!is_double("abc"));
    }

    #[test]
    fn test_is_decimal() {
        assert!(is_decimal("10"));
        assert!(is_decimal("-10.25"));
        assert!(is_decimal("10.25-"));
        assert!(is_decimal("1,000.5"));
        assert!(is_decimal(".5"));
        assert!(is_decimal("5."));
        assert!(!is_decimal("1e5"));
        assert!(!is_decimal("."));
        assert!(!is_decimal("-"));
        assert!(!is_decimal("1,00"));
        assert!(!is_decimal("+10-"));
        assert!(!is_decimal(""));
    }

    #[test]
    fn test_is_decimal_range_limit() {
        assert!(is_decimal("79228162514264337593543950335"));
        assert!(!is_decimal(&"9".repeat(30)));
    }

    #[test]
    fn test_is_bool() {
        assert!(is_bool("True"));
        assert!(is_bool("false"));
        assert!(!is_bool("0"));
        assert!(!is_bool(" "));
    }
}
