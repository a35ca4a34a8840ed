//! Evaluation report
//!
//! The report is a by-product of the same single evaluation pass that
//! produces the verdict; it never triggers evaluation of its own.

use serde::Serialize;

use crate::clause::{chain_len, evaluated_count};

use super::hypothesis::Hypothesis;

/// Outcome of one hypothesis within a theory evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HypothesisOutcome {
    /// Insertion position within the theory
    pub index: usize,
    /// Hypothesis name, if any
    pub name: Option<String>,
    /// Verdict of the hypothesis chain
    pub passed: bool,
    /// Clauses evaluated before the chain settled
    pub clauses_evaluated: usize,
    /// Clauses in the chain
    pub clauses_total: usize,
}

impl HypothesisOutcome {
    pub(crate) fn observe(hypothesis: &Hypothesis, passed: bool) -> Self {
        let (clauses_evaluated, clauses_total) = hypothesis
            .entry()
            .map_or((0, 0), |entry| (evaluated_count(entry), chain_len(entry)));

        Self {
            index: hypothesis.index(),
            name: hypothesis.name().map(str::to_string),
            passed,
            clauses_evaluated,
            clauses_total,
        }
    }

    /// Returns true if a failing clause cut the chain short
    pub fn short_circuited(&self) -> bool {
        self.clauses_evaluated < self.clauses_total
    }
}

/// Result of evaluating a whole theory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TheoryReport {
    /// Theory name, if any
    pub theory: Option<String>,
    /// Conjunction of every hypothesis verdict
    pub verdict: bool,
    /// One outcome per hypothesis, in insertion order
    pub outcomes: Vec<HypothesisOutcome>,
}

impl TheoryReport {
    /// Outcomes of the hypotheses that failed
    pub fn failures(&self) -> impl Iterator<Item = &HypothesisOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }

    /// Names of failed hypotheses, `#index` for anonymous ones
    pub fn failed_labels(&self) -> Vec<String> {
        self.failures()
            .map(|outcome| match &outcome.name {
                Some(name) => name.clone(),
                None => format!("#{}", outcome.index),
            })
            .collect()
    }

    /// Serialize the report as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
