//! Evaluation metrics
//!
//! - Counters only
//! - Monotonic increase
//! - Scoped to one theory

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters describing what a theory has done so far.
#[derive(Debug, Default)]
pub struct EvaluationMetrics {
    /// Hypotheses added to the theory
    hypotheses_registered: AtomicU64,
    /// Registrations rejected for a duplicate name
    names_rejected: AtomicU64,
    /// Theory evaluation attempts
    theory_evaluations: AtomicU64,
    /// Hypotheses evaluated to a verdict
    hypotheses_evaluated: AtomicU64,
    /// Hypotheses that passed
    hypotheses_passed: AtomicU64,
    /// Hypotheses that failed
    hypotheses_failed: AtomicU64,
    /// Evaluations aborted by an error
    evaluation_errors: AtomicU64,
}

impl EvaluationMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment hypotheses registered
    pub fn increment_registered(&self) {
        self.hypotheses_registered.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment names rejected
    pub fn increment_names_rejected(&self) {
        self.names_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment theory evaluations
    pub fn increment_theory_evaluations(&self) {
        self.theory_evaluations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one hypothesis verdict
    pub fn record_hypothesis(&self, passed: bool) {
        self.hypotheses_evaluated.fetch_add(1, Ordering::Relaxed);
        if passed {
            self.hypotheses_passed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hypotheses_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Increment evaluation errors
    pub fn increment_errors(&self) {
        self.evaluation_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all counters as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            hypotheses_registered: self.hypotheses_registered.load(Ordering::Relaxed),
            names_rejected: self.names_rejected.load(Ordering::Relaxed),
            theory_evaluations: self.theory_evaluations.load(Ordering::Relaxed),
            hypotheses_evaluated: self.hypotheses_evaluated.load(Ordering::Relaxed),
            hypotheses_passed: self.hypotheses_passed.load(Ordering::Relaxed),
            hypotheses_failed: self.hypotheses_failed.load(Ordering::Relaxed),
            evaluation_errors: self.evaluation_errors.load(Ordering::Relaxed),
        }
    }

    /// Get all counters as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A point-in-time copy of every counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub hypotheses_registered: u64,
    pub names_rejected: u64,
    pub theory_evaluations: u64,
    pub hypotheses_evaluated: u64,
    pub hypotheses_passed: u64,
    pub hypotheses_failed: u64,
    pub evaluation_errors: u64,
}
