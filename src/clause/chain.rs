//! Clause chain linkage and traversal
//!
//! A chain is a singly linked forward list. The head is the first clause
//! ever created; every later clause is owned by its predecessor. Evaluation
//! is a short-circuit conjunction in creation order.

use std::any::Any;

use super::errors::ClauseResult;

/// A type-erased clause: the link target of every chain step.
///
/// Chains mix value types (`String` then `i32` then ...), so each clause
/// links to the next one through this trait.
pub trait Clause {
    /// Evaluates this clause and, while it passes, the rest of the chain.
    ///
    /// 1. Fails with `AlreadyEvaluated` if this clause was evaluated before
    /// 2. Marks the clause evaluated
    /// 3. Applies the predicate to a fresh read of the value (no predicate passes)
    /// 4. On failure returns false without touching the next clause
    /// 5. Otherwise returns the result of evaluating the next clause, or true
    fn evaluate(&mut self) -> ClauseResult<bool>;

    /// Returns true once `evaluate` has been called on this clause.
    fn is_evaluated(&self) -> bool;

    /// Returns true if this clause carries a predicate.
    fn has_predicate(&self) -> bool;

    /// Returns the next clause in creation order.
    fn next_clause(&self) -> Option<&dyn Clause>;

    #[doc(hidden)]
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Iterator over a chain, from a clause forward.
pub struct ChainIter<'a> {
    current: Option<&'a dyn Clause>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a dyn Clause;

    fn next(&mut self) -> Option<Self::Item> {
        let clause = self.current?;
        self.current = clause.next_clause();
        Some(clause)
    }
}

/// Walks the chain starting at `entry`.
pub fn walk(entry: &dyn Clause) -> ChainIter<'_> {
    ChainIter {
        current: Some(entry),
    }
}

/// Number of clauses reachable from `entry`, inclusive.
pub fn chain_len(entry: &dyn Clause) -> usize {
    walk(entry).count()
}

/// Evaluated flags of every clause, in creation order.
pub fn evaluation_trace(entry: &dyn Clause) -> Vec<bool> {
    walk(entry).map(|clause| clause.is_evaluated()).collect()
}

/// Number of clauses that have been evaluated.
pub fn evaluated_count(entry: &dyn Clause) -> usize {
    walk(entry).filter(|clause| clause.is_evaluated()).count()
}
