//! Theory - an ordered collection of hypotheses with one verdict
//!
//! Evaluation semantics:
//! - Hypotheses are evaluated in insertion order
//! - Every hypothesis is evaluated, whatever the verdict so far
//! - The verdict is the conjunction of all hypothesis verdicts
//! - An error from any hypothesis aborts the pass; later hypotheses are
//!   not evaluated and no verdict is produced

use std::collections::HashMap;
use std::fmt;

use crate::clause::{ClauseNode, ClauseResult};
use crate::observability::{EvaluationMetrics, Event, Logger};

use super::config::TheoryConfig;
use super::errors::{TheoryError, TheoryResult};
use super::hypothesis::Hypothesis;
use super::report::{HypothesisOutcome, TheoryReport};

/// A theory we want to evaluate.
///
/// ```
/// use fluent_theory::{validate, ClauseNode, Theory};
///
/// let mut theory = Theory::named("signup");
/// theory.suppose_named("accepted-terms", || true).unwrap();
/// theory
///     .suppose_typed_named("email", || {
///         let mut entry = ClauseNode::new("ann@example.com".to_string());
///         entry.refine(|s| validate::is_email(s))?;
///         Ok(entry)
///     })
///     .unwrap();
///
/// assert!(theory.evaluate().unwrap());
/// ```
pub struct Theory {
    name: Option<String>,
    hypotheses: Vec<Hypothesis>,
    /// Name -> index into `hypotheses`
    named: HashMap<String, usize>,
    logger: Logger,
    metrics: EvaluationMetrics,
}

impl Default for Theory {
    fn default() -> Self {
        Self::new()
    }
}

impl Theory {
    /// Creates an anonymous, empty theory
    pub fn new() -> Self {
        Self {
            name: None,
            hypotheses: Vec::new(),
            named: HashMap::new(),
            logger: Logger::disabled(),
            metrics: EvaluationMetrics::new(),
        }
    }

    /// Creates an empty theory with a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    /// Creates an empty theory from configuration
    pub fn with_config(config: &TheoryConfig) -> TheoryResult<Self> {
        config.validate()?;

        let theory = Self {
            name: config.name.clone(),
            logger: config.logger(),
            ..Self::new()
        };
        theory
            .logger
            .event(Event::ConfigApplied, &[("theory", theory.label().as_str())]);
        Ok(theory)
    }

    /// Returns the theory name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| "<anonymous>".to_string())
    }

    /// Returns the evaluation counters of this theory
    pub fn metrics(&self) -> &EvaluationMetrics {
        &self.metrics
    }

    /// Number of hypotheses
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    /// Returns true if the theory holds no hypotheses
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    /// All hypotheses, in insertion order
    pub fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    /// Returns the hypothesis registered under `name`
    pub fn lookup(&self, name: &str) -> Option<&Hypothesis> {
        self.named.get(name).map(|&index| &self.hypotheses[index])
    }

    /// Returns the hypothesis registered under `name`, mutably
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Hypothesis> {
        let index = *self.named.get(name)?;
        self.hypotheses.get_mut(index)
    }

    /// Adds a new hypothesis without a supposition.
    ///
    /// An empty name is treated as no name.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the name is taken; nothing is added.
    pub fn add_hypothesis(&mut self, name: Option<&str>) -> TheoryResult<&mut Hypothesis> {
        let index = self.insert_hypothesis(name)?;
        self.record_registered(index);
        Ok(&mut self.hypotheses[index])
    }

    /// Pushes an empty hypothesis and claims its name. Nothing is counted
    /// or logged until the caller calls `record_registered`.
    fn insert_hypothesis(&mut self, name: Option<&str>) -> TheoryResult<usize> {
        let name = name.filter(|n| !n.is_empty()).map(str::to_string);

        if let Some(taken) = name.as_deref().filter(|n| self.named.contains_key(*n)) {
            self.metrics.increment_names_rejected();
            self.logger
                .event(Event::DuplicateNameRejected, &[("hypothesis", taken)]);
            return Err(TheoryError::DuplicateName(taken.to_string()));
        }

        let index = self.hypotheses.len();
        if let Some(name) = &name {
            self.named.insert(name.clone(), index);
        }
        self.hypotheses.push(Hypothesis::new(index, name));
        Ok(index)
    }

    fn record_registered(&self, index: usize) {
        self.metrics.increment_registered();
        self.logger.event(
            Event::HypothesisRegistered,
            &[("hypothesis", self.hypotheses[index].label().as_str())],
        );
    }

    /// Adds an anonymous hypothesis for a boolean supposition
    pub fn suppose<P>(&mut self, supposition: P) -> TheoryResult<&mut Hypothesis>
    where
        P: Fn() -> bool + 'static,
    {
        self.register_with(None, |hypothesis| hypothesis.suppose(supposition).map(|_| ()))
    }

    /// Adds a named hypothesis for a boolean supposition
    pub fn suppose_named<P>(&mut self, name: &str, supposition: P) -> TheoryResult<&mut Hypothesis>
    where
        P: Fn() -> bool + 'static,
    {
        self.register_with(Some(name), |hypothesis| {
            hypothesis.suppose(supposition).map(|_| ())
        })
    }

    /// Adds an anonymous hypothesis for a clause chain supposition
    pub fn suppose_typed<T, B>(&mut self, builder: B) -> TheoryResult<&mut Hypothesis>
    where
        T: 'static,
        B: FnOnce() -> ClauseResult<ClauseNode<T>>,
    {
        self.register_with(None, |hypothesis| {
            hypothesis.suppose_typed(builder).map(|_| ())
        })
    }

    /// Adds a named hypothesis for a clause chain supposition
    pub fn suppose_typed_named<T, B>(&mut self, name: &str, builder: B) -> TheoryResult<&mut Hypothesis>
    where
        T: 'static,
        B: FnOnce() -> ClauseResult<ClauseNode<T>>,
    {
        self.register_with(Some(name), |hypothesis| {
            hypothesis.suppose_typed(builder).map(|_| ())
        })
    }

    /// Registers a hypothesis and supposes it. A failed supposition
    /// unregisters it again and is neither counted nor logged.
    fn register_with<F>(&mut self, name: Option<&str>, suppose: F) -> TheoryResult<&mut Hypothesis>
    where
        F: FnOnce(&mut Hypothesis) -> TheoryResult<()>,
    {
        let index = self.insert_hypothesis(name)?;

        if let Err(err) = suppose(&mut self.hypotheses[index]) {
            self.discard_last();
            return Err(err);
        }

        self.record_registered(index);
        Ok(&mut self.hypotheses[index])
    }

    fn discard_last(&mut self) {
        if let Some(hypothesis) = self.hypotheses.pop() {
            if let Some(name) = hypothesis.name() {
                self.named.remove(name);
            }
        }
    }

    /// Evaluates every hypothesis and returns the aggregate verdict.
    ///
    /// # Errors
    ///
    /// The first error raised by a hypothesis aborts the pass.
    pub fn evaluate(&mut self) -> TheoryResult<bool> {
        Ok(self.evaluate_report()?.verdict)
    }

    /// Evaluates every hypothesis and reports each outcome.
    ///
    /// Runs the same single pass as [`Theory::evaluate`].
    pub fn evaluate_report(&mut self) -> TheoryResult<TheoryReport> {
        let theory = self.label();
        let count = self.hypotheses.len().to_string();
        self.metrics.increment_theory_evaluations();
        self.logger.event(
            Event::TheoryEvaluateBegin,
            &[("theory", theory.as_str()), ("hypotheses", count.as_str())],
        );

        let mut verdict = true;
        let mut outcomes = Vec::with_capacity(self.hypotheses.len());

        for hypothesis in &mut self.hypotheses {
            // Never skipped: every hypothesis runs regardless of the verdict so far
            let passed = match hypothesis.evaluate() {
                Ok(passed) => passed,
                Err(err) => {
                    self.metrics.increment_errors();
                    self.logger.event(
                        Event::TheoryEvaluateAborted,
                        &[
                            ("theory", theory.as_str()),
                            ("hypothesis", hypothesis.label().as_str()),
                            ("code", err.code()),
                            ("error", err.to_string().as_str()),
                        ],
                    );
                    return Err(err);
                }
            };

            verdict = passed && verdict;
            self.metrics.record_hypothesis(passed);
            self.logger.event(
                Event::HypothesisEvaluated,
                &[
                    ("hypothesis", hypothesis.label().as_str()),
                    ("passed", bool_str(passed)),
                ],
            );
            outcomes.push(HypothesisOutcome::observe(hypothesis, passed));
        }

        self.logger.event(
            Event::TheoryEvaluateComplete,
            &[("theory", theory.as_str()), ("verdict", bool_str(verdict))],
        );

        Ok(TheoryReport {
            theory: self.name.clone(),
            verdict,
            outcomes,
        })
    }

    /// Returns true if any hypothesis has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.hypotheses.iter().any(Hypothesis::is_evaluated)
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

impl fmt::Debug for Theory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theory")
            .field("name", &self.name)
            .field("hypotheses", &self.hypotheses)
            .finish()
    }
}
