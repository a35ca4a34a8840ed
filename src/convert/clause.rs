//! Converter steps for string-valued clauses
//!
//! Each step links a typed clause whose value is parsed from the string
//! clause on every read. Parsing happens during evaluation, so a malformed
//! string surfaces as a `ConversionError` from `evaluate`.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::clause::{ClauseNode, ClauseResult};

use super::parse::{
    parse_bool, parse_date_time, parse_date_time_exact, parse_decimal, parse_double, parse_float,
    parse_int, parse_long,
};

impl ClauseNode<String> {
    /// Links a clause parsing the value as an `i32`.
    pub fn as_int(&mut self) -> ClauseResult<&mut ClauseNode<i32>> {
        self.derive(|text: String| parse_int(&text))
    }

    /// Links a clause parsing the value as an `i64`.
    pub fn as_long(&mut self) -> ClauseResult<&mut ClauseNode<i64>> {
        self.derive(|text: String| parse_long(&text))
    }

    /// Links a clause parsing the value as an `f32`.
    pub fn as_float(&mut self) -> ClauseResult<&mut ClauseNode<f32>> {
        self.derive(|text: String| parse_float(&text))
    }

    /// Links a clause parsing the value as an `f64`.
    pub fn as_double(&mut self) -> ClauseResult<&mut ClauseNode<f64>> {
        self.derive(|text: String| parse_double(&text))
    }

    /// Links a clause parsing the value as a [`Decimal`].
    pub fn as_decimal(&mut self) -> ClauseResult<&mut ClauseNode<Decimal>> {
        self.derive(|text: String| parse_decimal(&text))
    }

    /// Links a clause parsing the value as a `bool`.
    pub fn as_bool(&mut self) -> ClauseResult<&mut ClauseNode<bool>> {
        self.derive(|text: String| parse_bool(&text))
    }

    /// Links a clause parsing the value with the invariant date-time formats.
    pub fn as_date_time(&mut self) -> ClauseResult<&mut ClauseNode<NaiveDateTime>> {
        self.derive(|text: String| parse_date_time(&text))
    }

    /// Links a clause parsing the value with the given chrono formats.
    pub fn as_date_time_exact(
        &mut self,
        formats: &[&str],
    ) -> ClauseResult<&mut ClauseNode<NaiveDateTime>> {
        let formats: Vec<String> = formats.iter().map(|f| f.to_string()).collect();
        self.derive(move |text: String| {
            let formats: Vec<&str> = formats.iter().map(String::as_str).collect();
            parse_date_time_exact(&text, &formats)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{Clause, ClauseError};
    use chrono::Datelike;

    #[test]
    fn test_as_int_chain_passes() {
        let mut entry = ClauseNode::new("42".to_string());
        entry.as_int().unwrap().refine(|n| *n == 42).unwrap();
        assert!(entry.evaluate().unwrap());
    }

    #[test]
    fn test_malformed_input_fails_at_evaluation_not_link_time() {
        let mut entry = ClauseNode::new("forty-two".to_string());
        let linked = entry.as_int().unwrap().refine(|n| *n > 0);
        assert!(linked.is_ok());

        let err = entry.evaluate().unwrap_err();
        match err {
            ClauseError::Conversion(conversion) => {
                assert_eq!(conversion.input(), "forty-two");
                assert_eq!(conversion.target(), "i32");
            }
            other => panic!("Expected conversion error, got {:?}", other),
        }
    }

    #[test]
    fn test_converted_value_reads_source_each_time() {
        use std::cell::Cell;
        use std::rc::Rc;

        let reads = Rc::new(Cell::new(0));
        let source = Rc::clone(&reads);
        let mut entry = ClauseNode::from_provider(move || {
            source.set(source.get() + 1);
            source.get().to_string()
        });

        let number = entry.as_long().unwrap();
        assert_eq!(number.value().unwrap(), 1);
        assert_eq!(number.value().unwrap(), 2);
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn test_as_double_and_float() {
        let mut entry = ClauseNode::new("1,250.5".to_string());
        assert_eq!(entry.as_double().unwrap().value().unwrap(), 1250.5);

        let mut entry = ClauseNode::new("0.5".to_string());
        assert_eq!(entry.as_float().unwrap().value().unwrap(), 0.5);
    }

    #[test]
    fn test_as_decimal() {
        let mut entry = ClauseNode::new("1,299.99".to_string());
        entry
            .as_decimal()
            .unwrap()
            .refine(|price| *price == Decimal::new(129999, 2))
            .unwrap();
        assert!(entry.evaluate().unwrap());
    }

    #[test]
    fn test_as_decimal_rejects_exponent_at_evaluation() {
        let mut entry = ClauseNode::new("1e3".to_string());
        entry.as_decimal().unwrap().refine(|_| true).unwrap();

        match entry.evaluate().unwrap_err() {
            ClauseError::Conversion(conversion) => assert_eq!(conversion.target(), "decimal"),
            other => panic!("Expected conversion error, got {:?}", other),
        }
    }

    #[test]
    fn test_as_bool() {
        let mut entry = ClauseNode::new("TRUE".to_string());
        entry.as_bool().unwrap().refine(|b| *b).unwrap();
        assert!(entry.evaluate().unwrap());
    }

    #[test]
    fn test_as_date_time() {
        let mut entry = ClauseNode::new("2013-05-17".to_string());
        entry
            .as_date_time()
            .unwrap()
            .refine(|d| d.year() == 2013)
            .unwrap();
        assert!(entry.evaluate().unwrap());
    }

    #[test]
    fn test_as_date_time_exact() {
        let mut entry = ClauseNode::new("17.05.2013".to_string());
        let date = entry.as_date_time_exact(&["%d.%m.%Y"]).unwrap();
        assert_eq!(date.value().unwrap().month(), 5);
    }

    #[test]
    fn test_converter_respects_existing_link() {
        let mut entry = ClauseNode::new("1".to_string());
        entry.as_int().unwrap();
        assert_eq!(entry.as_long().unwrap_err(), ClauseError::LinkAlreadySet);
    }
}
