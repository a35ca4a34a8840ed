//! Clause engine
//!
//! Clauses are lazily evaluated chain steps. A chain is built fluently from
//! its entry clause and evaluated once, oldest clause first, as a
//! short-circuit conjunction.
//!
//! # Invariants
//!
//! - A clause's forward link is set at most once and never retargeted
//! - A clause is evaluated at most once
//! - Value providers are not memoized
//! - A failing predicate leaves every later clause unevaluated

mod chain;
mod errors;
mod node;

pub use chain::{chain_len, evaluated_count, evaluation_trace, walk, ChainIter, Clause};
pub use errors::{ClauseError, ClauseResult};
pub use node::ClauseNode;
