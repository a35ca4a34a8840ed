//! Conversion error types
//!
//! A conversion error is raised by a value provider, never by the clause
//! engine itself. The engine propagates it unchanged out of `evaluate`.

use thiserror::Error;

/// Result type for string conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

/// A value could not be converted into the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot parse '{input}' as {target}")]
pub struct ConversionError {
    /// The text that failed to convert
    input: String,
    /// Name of the target type
    target: &'static str,
}

impl ConversionError {
    /// Create a new conversion error
    pub fn new(input: impl Into<String>, target: &'static str) -> Self {
        Self {
            input: input.into(),
            target,
        }
    }

    /// Returns the text that failed to convert
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the target type name
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        "THEORY_CONVERSION_FAILED"
    }
}
