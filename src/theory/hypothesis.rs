//! Hypothesis - a named binding to one clause chain
//!
//! A hypothesis owns exactly one chain, held by its entry clause.
//! Evaluation always starts at the entry, so every step of the chain runs
//! until one fails. A hypothesis has no evaluation state of its own: it is
//! evaluated once its entry clause is.

use std::fmt;

use crate::clause::{Clause, ClauseNode, ClauseResult};

use super::errors::{TheoryError, TheoryResult};

/// One evaluable unit of a theory.
pub struct Hypothesis {
    /// Position within the owning theory
    index: usize,
    /// Optional identity within the owning theory
    name: Option<String>,
    /// First clause of the chain
    entry: Option<Box<dyn Clause>>,
}

impl Hypothesis {
    pub(crate) fn new(index: usize, name: Option<String>) -> Self {
        Self {
            index,
            name,
            entry: None,
        }
    }

    /// Returns the hypothesis name, if it has one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the insertion position within the theory
    pub fn index(&self) -> usize {
        self.index
    }

    /// Name for messages: the name, or `#index` when anonymous
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{}", self.index),
        }
    }

    /// Supposes a plain boolean condition.
    ///
    /// Builds a two-clause chain: a constant `true` entry refined by a
    /// predicate that calls `supposition`.
    pub fn suppose<P>(&mut self, supposition: P) -> TheoryResult<&mut Self>
    where
        P: Fn() -> bool + 'static,
    {
        self.suppose_typed(move || {
            let mut entry = ClauseNode::new(true);
            entry.refine(move |_| supposition())?;
            Ok(entry)
        })
    }

    /// Supposes a clause chain produced by `builder`.
    ///
    /// The builder returns the entry clause of the chain it built; the
    /// chain is evaluated from that clause forward.
    ///
    /// # Errors
    ///
    /// - `SuppositionAlreadySet` if a chain was already supposed; the
    ///   builder is not invoked
    /// - any error the builder returns
    pub fn suppose_typed<T, B>(&mut self, builder: B) -> TheoryResult<&mut Self>
    where
        T: 'static,
        B: FnOnce() -> ClauseResult<ClauseNode<T>>,
    {
        if self.entry.is_some() {
            return Err(TheoryError::SuppositionAlreadySet(self.label()));
        }

        let entry = builder()?;
        self.entry = Some(Box::new(entry));
        Ok(self)
    }

    /// Evaluates the chain from its entry clause.
    ///
    /// # Errors
    ///
    /// - `MissingSupposition` if nothing was supposed
    /// - `AlreadyEvaluated` on a second evaluation
    /// - any conversion error raised by a value provider
    pub fn evaluate(&mut self) -> TheoryResult<bool> {
        match &mut self.entry {
            Some(entry) => Ok(entry.evaluate()?),
            None => Err(TheoryError::MissingSupposition(self.label())),
        }
    }

    /// Returns true once the entry clause has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.entry.as_ref().map_or(false, |entry| entry.is_evaluated())
    }

    /// Returns true if a chain has been supposed
    pub fn is_supposed(&self) -> bool {
        self.entry.is_some()
    }

    /// Returns the entry clause of the chain
    pub fn entry(&self) -> Option<&dyn Clause> {
        self.entry.as_deref()
    }
}

impl fmt::Debug for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hypothesis")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("supposed", &self.is_supposed())
            .field("evaluated", &self.is_evaluated())
            .finish()
    }
}
