//! Observable theory events

use std::fmt;

use super::logger::Severity;

/// Events emitted while building and evaluating a theory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Theory created from configuration
    ConfigApplied,
    /// Hypothesis added to a theory
    HypothesisRegistered,
    /// Hypothesis rejected because its name is taken
    DuplicateNameRejected,
    /// Theory evaluation started
    TheoryEvaluateBegin,
    /// One hypothesis evaluated
    HypothesisEvaluated,
    /// Theory evaluation produced a verdict
    TheoryEvaluateComplete,
    /// Theory evaluation aborted by an error
    TheoryEvaluateAborted,
}

impl Event {
    /// Returns the event name as written to the log
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigApplied => "CONFIG_APPLIED",
            Event::HypothesisRegistered => "HYPOTHESIS_REGISTERED",
            Event::DuplicateNameRejected => "HYPOTHESIS_NAME_REJECTED",
            Event::TheoryEvaluateBegin => "THEORY_EVALUATE_BEGIN",
            Event::HypothesisEvaluated => "HYPOTHESIS_EVALUATED",
            Event::TheoryEvaluateComplete => "THEORY_EVALUATE_COMPLETE",
            Event::TheoryEvaluateAborted => "THEORY_EVALUATE_ABORTED",
        }
    }

    /// Default severity for this event
    pub fn severity(&self) -> Severity {
        match self {
            Event::HypothesisEvaluated | Event::HypothesisRegistered => Severity::Trace,
            Event::DuplicateNameRejected | Event::TheoryEvaluateAborted => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::TheoryEvaluateBegin.as_str(), "THEORY_EVALUATE_BEGIN");
        assert_eq!(Event::DuplicateNameRejected.to_string(), "HYPOTHESIS_NAME_REJECTED");
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::HypothesisEvaluated.severity(), Severity::Trace);
        assert_eq!(Event::TheoryEvaluateAborted.severity(), Severity::Warn);
        assert_eq!(Event::TheoryEvaluateComplete.severity(), Severity::Info);
    }
}
