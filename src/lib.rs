//! fluent-theory - a fluent rule DSL over lazily evaluated clause chains
//!
//! Callers build named hypotheses, each a chain of predicates over a value
//! that may be transformed between steps, then evaluate the whole theory to
//! a single verdict.
//!
//! ```
//! use fluent_theory::{ClauseNode, Theory};
//!
//! let mut theory = Theory::new();
//! theory
//!     .suppose_typed_named("adult", || {
//!         let mut age = ClauseNode::new(" 42 ".to_string());
//!         age.as_int()?.refine(|years| *years >= 18)?;
//!         Ok(age)
//!     })
//!     .unwrap();
//! theory.suppose(|| 2 + 2 == 4).unwrap();
//!
//! assert!(theory.evaluate().unwrap());
//! ```

pub mod clause;
pub mod convert;
pub mod observability;
pub mod theory;
pub mod validate;

pub use clause::{Clause, ClauseError, ClauseNode, ClauseResult};
pub use convert::{ConversionError, ConversionResult};
pub use theory::{
    Hypothesis, HypothesisOutcome, Theory, TheoryConfig, TheoryError, TheoryReport, TheoryResult,
};
