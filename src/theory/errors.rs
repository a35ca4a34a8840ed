//! Theory error types
//!
//! Error codes:
//! - THEORY_CLAUSE_* (from the clause engine)
//! - THEORY_DUPLICATE_NAME
//! - THEORY_MISSING_SUPPOSITION
//! - THEORY_SUPPOSITION_ALREADY_SET
//! - THEORY_CONFIG_ERROR

use thiserror::Error;

use crate::clause::ClauseError;
use crate::convert::ConversionError;

/// Result type for theory operations
pub type TheoryResult<T> = Result<T, TheoryError>;

/// Theory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Error raised by a clause chain, including provider conversion failures
    #[error(transparent)]
    Clause(#[from] ClauseError),

    /// A hypothesis with this name is already registered
    #[error("Hypothesis '{0}' already exists")]
    DuplicateName(String),

    /// The hypothesis was evaluated before it received a supposition
    #[error("Hypothesis {0} has no supposition")]
    MissingSupposition(String),

    /// The hypothesis already owns a clause chain
    #[error("Hypothesis {0} already has a supposition")]
    SuppositionAlreadySet(String),

    /// Configuration could not be read or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ConversionError> for TheoryError {
    fn from(err: ConversionError) -> Self {
        TheoryError::Clause(ClauseError::Conversion(err))
    }
}

impl TheoryError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            TheoryError::Clause(err) => err.code(),
            TheoryError::DuplicateName(_) => "THEORY_DUPLICATE_NAME",
            TheoryError::MissingSupposition(_) => "THEORY_MISSING_SUPPOSITION",
            TheoryError::SuppositionAlreadySet(_) => "THEORY_SUPPOSITION_ALREADY_SET",
            TheoryError::Config(_) => "THEORY_CONFIG_ERROR",
        }
    }

    /// Returns true if a clause in the chain was already evaluated
    pub fn is_already_evaluated(&self) -> bool {
        matches!(self, TheoryError::Clause(ClauseError::AlreadyEvaluated))
    }

    /// Returns the conversion failure, if that is what aborted evaluation
    pub fn conversion(&self) -> Option<&ConversionError> {
        match self {
            TheoryError::Clause(ClauseError::Conversion(err)) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TheoryError::DuplicateName("a".into()).code(), "THEORY_DUPLICATE_NAME");
        assert_eq!(
            TheoryError::MissingSupposition("#0".into()).code(),
            "THEORY_MISSING_SUPPOSITION"
        );
        assert_eq!(
            TheoryError::from(ClauseError::AlreadyEvaluated).code(),
            "THEORY_CLAUSE_ALREADY_EVALUATED"
        );
        assert_eq!(TheoryError::Config("bad".into()).code(), "THEORY_CONFIG_ERROR");
    }

    #[test]
    fn test_conversion_lifts_through_clause() {
        let err = TheoryError::from(ConversionError::new("abc", "i64"));
        assert_eq!(err.conversion().map(|c| c.input()), Some("abc"));
        assert!(!err.is_already_evaluated());
    }

    #[test]
    fn test_duplicate_name_display() {
        let display = TheoryError::DuplicateName("adult".into()).to_string();
        assert!(display.contains("adult"));
    }
}
