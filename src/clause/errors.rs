//! Clause error types
//!
//! Error codes:
//! - THEORY_CLAUSE_ALREADY_EVALUATED
//! - THEORY_CLAUSE_LINK_ALREADY_SET
//! - THEORY_CONVERSION_FAILED
//! - THEORY_CLAUSE_INTERNAL

use thiserror::Error;

use crate::convert::ConversionError;

/// Result type for clause operations
pub type ClauseResult<T> = Result<T, ClauseError>;

/// Clause errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    /// A clause is a single-use evaluation unit
    #[error("Clause was already evaluated")]
    AlreadyEvaluated,

    /// The clause already links to a next clause; chain off the newest clause
    #[error("Clause already links to a next clause")]
    LinkAlreadySet,

    /// A value provider failed to produce its value
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Internal error
    #[error("Internal clause error: {0}")]
    Internal(&'static str),
}

impl ClauseError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ClauseError::AlreadyEvaluated => "THEORY_CLAUSE_ALREADY_EVALUATED",
            ClauseError::LinkAlreadySet => "THEORY_CLAUSE_LINK_ALREADY_SET",
            ClauseError::Conversion(err) => err.code(),
            ClauseError::Internal(_) => "THEORY_CLAUSE_INTERNAL",
        }
    }

    /// Returns true for errors caused by misuse of the clause API
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, ClauseError::AlreadyEvaluated | ClauseError::LinkAlreadySet)
    }
}
