//! ClauseNode - one step of a clause chain
//!
//! A clause holds a deferred value and an optional predicate over it.
//!
//! - The value provider is never memoized: every read calls it again
//! - The forward link is set exactly once, by `transform`, `refine` or a
//!   converter step, and is never retargeted
//! - A clause is evaluated at most once

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::convert::ConversionResult;

use super::chain::Clause;
use super::errors::{ClauseError, ClauseResult};

/// Deferred value computation, shared by clauses that re-read the same value.
pub(crate) type ValueProvider<T> = Rc<dyn Fn() -> ConversionResult<T>>;

type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// A single chain step over a value of type `T`.
///
/// Fluent calls borrow the clause they are invoked on and hand back a
/// borrow of the clause they link, so the caller keeps owning the entry
/// clause while the chain grows from its newest step:
///
/// ```
/// use fluent_theory::{Clause, ClauseNode};
///
/// let mut entry = ClauseNode::new("42".to_string());
/// entry
///     .transform(|s| s.len())
///     .unwrap()
///     .refine(|len| *len == 2)
///     .unwrap();
///
/// assert!(entry.evaluate().unwrap());
/// ```
pub struct ClauseNode<T> {
    provider: ValueProvider<T>,
    predicate: Option<Predicate<T>>,
    next: Option<Box<dyn Clause>>,
    evaluated: bool,
}

impl<T: 'static> ClauseNode<T> {
    /// Creates a clause over a constant value.
    pub fn new(value: T) -> Self
    where
        T: Clone,
    {
        Self::try_from_provider(move || Ok(value.clone()))
    }

    /// Creates a clause whose value is computed on every read.
    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self::try_from_provider(move || Ok(provider()))
    }

    /// Creates a clause over a provider that may fail to produce a value.
    ///
    /// A failure surfaces from `value()` and from `evaluate()`.
    pub fn try_from_provider<F>(provider: F) -> Self
    where
        F: Fn() -> ConversionResult<T> + 'static,
    {
        Self::with_provider(Rc::new(provider), None)
    }

    fn with_provider(provider: ValueProvider<T>, predicate: Option<Predicate<T>>) -> Self {
        Self {
            provider,
            predicate,
            next: None,
            evaluated: false,
        }
    }

    /// Reads the current value. Calls the provider every time.
    pub fn value(&self) -> ClauseResult<T> {
        Ok((self.provider)()?)
    }

    /// Returns true if this clause already links to a next clause.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Links a clause holding `convert` applied to the current value.
    ///
    /// The current value is read once, now. The linked clause wraps the
    /// converted value as a constant.
    ///
    /// # Errors
    ///
    /// - `LinkAlreadySet` if this clause already has a next clause
    /// - `Conversion` if reading the current value fails
    pub fn transform<U, F>(&mut self, convert: F) -> ClauseResult<&mut ClauseNode<U>>
    where
        U: Clone + 'static,
        F: FnOnce(T) -> U,
    {
        self.ensure_unlinked()?;
        let converted = convert(self.value()?);
        self.link(ClauseNode::new(converted))
    }

    /// Links a clause that re-reads this clause's value and checks `predicate`.
    ///
    /// # Errors
    ///
    /// Returns `LinkAlreadySet` if this clause already has a next clause.
    pub fn refine<P>(&mut self, predicate: P) -> ClauseResult<&mut ClauseNode<T>>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.ensure_unlinked()?;
        let node = ClauseNode::with_provider(Rc::clone(&self.provider), Some(Box::new(predicate)));
        self.link(node)
    }

    /// Links a clause whose value is `convert` applied to a fresh read of
    /// this clause's value, on every read of the new clause.
    pub(crate) fn derive<U, F>(&mut self, convert: F) -> ClauseResult<&mut ClauseNode<U>>
    where
        U: 'static,
        F: Fn(T) -> ConversionResult<U> + 'static,
    {
        self.ensure_unlinked()?;
        let source = Rc::clone(&self.provider);
        self.link(ClauseNode::try_from_provider(move || convert(source()?)))
    }

    fn ensure_unlinked(&self) -> ClauseResult<()> {
        if self.next.is_some() {
            return Err(ClauseError::LinkAlreadySet);
        }
        Ok(())
    }

    fn link<U: 'static>(&mut self, node: ClauseNode<U>) -> ClauseResult<&mut ClauseNode<U>> {
        let next = self.next.insert(Box::new(node));
        next.as_any_mut()
            .downcast_mut::<ClauseNode<U>>()
            .ok_or(ClauseError::Internal("linked clause has an unexpected value type"))
    }
}

impl<T: 'static> Clause for ClauseNode<T> {
    fn evaluate(&mut self) -> ClauseResult<bool> {
        if self.evaluated {
            return Err(ClauseError::AlreadyEvaluated);
        }
        self.evaluated = true;

        let passed = match &self.predicate {
            Some(predicate) => {
                let value = (self.provider)()?;
                predicate(&value)
            }
            None => true,
        };

        // Short-circuit: a failed step leaves the rest of the chain unevaluated
        if !passed {
            return Ok(false);
        }

        match self.next.as_mut() {
            Some(next) => next.evaluate(),
            None => Ok(true),
        }
    }

    fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    fn next_clause(&self) -> Option<&dyn Clause> {
        self.next.as_deref()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<T> fmt::Debug for ClauseNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClauseNode")
            .field("has_predicate", &self.predicate.is_some())
            .field("has_next", &self.next.is_some())
            .field("evaluated", &self.evaluated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ConversionError;
    use std::cell::Cell;

    #[test]
    fn test_constant_clause_without_predicate_passes() {
        let mut clause = ClauseNode::new(7);
        assert!(clause.evaluate().unwrap());
        assert!(clause.is_evaluated());
    }

    #[test]
    fn test_value_is_not_memoized() {
        let counter = Rc::new(Cell::new(0));
        let source = Rc::clone(&counter);
        let clause = ClauseNode::from_provider(move || {
            source.set(source.get() + 1);
            source.get()
        });

        assert_eq!(clause.value().unwrap(), 1);
        assert_eq!(clause.value().unwrap(), 2);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_evaluate_twice_fails() {
        let mut clause = ClauseNode::new(1);
        clause.evaluate().unwrap();
        assert_eq!(clause.evaluate(), Err(ClauseError::AlreadyEvaluated));
    }

    #[test]
    fn test_transform_reads_value_once_at_link_time() {
        let reads = Rc::new(Cell::new(0));
        let source = Rc::clone(&reads);
        let mut entry = ClauseNode::from_provider(move || {
            source.set(source.get() + 1);
            10
        });

        entry.transform(|n| n * 2).unwrap();
        assert_eq!(reads.get(), 1);

        // The entry has no predicate, so evaluation does not read it again
        assert!(entry.evaluate().unwrap());
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn test_transform_result_is_constant() {
        let mut entry = ClauseNode::new(3);
        let doubled = entry.transform(|n| n * 2).unwrap();
        assert_eq!(doubled.value().unwrap(), 6);
        assert_eq!(doubled.value().unwrap(), 6);
    }

    #[test]
    fn test_refine_shares_provider() {
        let counter = Rc::new(Cell::new(0));
        let source = Rc::clone(&counter);
        let mut entry = ClauseNode::from_provider(move || {
            source.set(source.get() + 1);
            source.get()
        });

        let refined = entry.refine(|n| *n > 0).unwrap();
        assert_eq!(refined.value().unwrap(), 1);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_second_link_fails() {
        let mut entry = ClauseNode::new(1);
        entry.refine(|n| *n == 1).unwrap();

        assert_eq!(entry.refine(|_| true).unwrap_err(), ClauseError::LinkAlreadySet);
        assert_eq!(entry.transform(|n| n + 1).unwrap_err(), ClauseError::LinkAlreadySet);
    }

    #[test]
    fn test_link_check_precedes_conversion() {
        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        let mut entry = ClauseNode::new(1);
        entry.refine(|_| true).unwrap();

        let result = entry.transform(move |n| {
            flag.set(true);
            n
        });
        assert!(result.is_err());
        assert!(!called.get());
    }

    #[test]
    fn test_failing_provider_propagates_from_evaluate() {
        let mut entry: ClauseNode<i32> =
            ClauseNode::try_from_provider(|| Err(ConversionError::new("oops", "i32")));
        entry.refine(|_| true).unwrap();

        let err = entry.evaluate().unwrap_err();
        assert!(matches!(err, ClauseError::Conversion(_)));
    }

    #[test]
    fn test_failing_provider_propagates_from_transform() {
        let mut entry: ClauseNode<i32> =
            ClauseNode::try_from_provider(|| Err(ConversionError::new("oops", "i32")));
        let err = entry.transform(|n| n + 1).unwrap_err();
        assert!(matches!(err, ClauseError::Conversion(_)));
        assert!(!entry.has_next());
    }

    #[test]
    fn test_debug_output() {
        let mut entry = ClauseNode::new(1);
        entry.refine(|_| true).unwrap();
        let debug = format!("{:?}", entry);
        assert!(debug.contains("has_next: true"));
        assert!(debug.contains("evaluated: false"));
    }
}
