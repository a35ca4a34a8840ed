//! Structured JSON logger
//!
//! - One log line = one event
//! - `event` first, then `severity`, then fields sorted by key
//! - Synchronous, no buffering
//! - Silent unless enabled

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Per-hypothesis detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Rejected registrations, aborted evaluations
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that writes JSON lines.
///
/// ERROR goes to stderr, everything else to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    enabled: bool,
    min_severity: Severity,
}

impl Default for Logger {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Logger {
    /// Create an enabled logger that drops events below `min_severity`
    pub fn new(min_severity: Severity) -> Self {
        Self {
            enabled: true,
            min_severity,
        }
    }

    /// Create a logger that never writes
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_severity: Severity::Info,
        }
    }

    /// Returns whether an event at `severity` would be written
    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        self.enabled && severity >= self.min_severity
    }

    /// Log a typed event at its default severity
    pub fn event(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(event.severity(), event.as_str(), fields);
    }

    /// Log an event with the given severity and fields
    pub fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if !self.is_enabled_for(severity) {
            return;
        }
        if severity >= Severity::Error {
            Self::write_line(severity, event, fields, &mut io::stderr());
        } else {
            Self::write_line(severity, event, fields, &mut io::stdout());
        }
    }

    fn write_line<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], writer: &mut W) {
        let line = Self::render(severity, event, fields);
        // Logging failures never affect evaluation
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Render one log line, newline included.
    ///
    /// Field keys are unique; a repeated key keeps its last value.
    pub fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let sorted: BTreeMap<&str, &str> = fields.iter().copied().collect();

        let mut output = String::with_capacity(128);
        output.push_str("{\"event\":");
        output.push_str(&json_string(event));
        output.push_str(",\"severity\":");
        output.push_str(&json_string(severity.as_str()));

        for (key, value) in sorted {
            output.push(',');
            output.push_str(&json_string(key));
            output.push(':');
            output.push_str(&json_string(value));
        }

        output.push_str("}\n");
        output
    }
}

fn json_string(s: &str) -> String {
    Value::from(s).to_string()
}
