//! Theories and hypotheses
//!
//! A theory is an ordered collection of hypotheses; each hypothesis owns one
//! clause chain. Evaluating a theory evaluates every hypothesis exactly once
//! and folds the verdicts with logical AND.
//!
//! # Design Principles
//!
//! - Every hypothesis is evaluated, whatever the verdict so far
//! - Names are unique within a theory; empty names are anonymous
//! - A theory, and everything in it, is evaluated at most once
//! - Errors abort the pass with no partial verdict

mod config;
mod errors;
mod hypothesis;
mod report;
mod theory;

pub use config::TheoryConfig;
pub use errors::{TheoryError, TheoryResult};
pub use hypothesis::Hypothesis;
pub use report::{HypothesisOutcome, TheoryReport};
pub use theory::Theory;
