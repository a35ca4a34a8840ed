//! Observability for theory evaluation
//!
//! - Structured logging (JSON lines), off unless configured
//! - Monotonic evaluation counters
//! - Typed events
//!
//! Observability is read-only: nothing here changes a verdict.

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{EvaluationMetrics, MetricsSnapshot};
