//! Theory configuration
//!
//! Loaded from a JSON file:
//!
//! ```json
//! { "name": "signup", "logging_enabled": true, "log_severity": "TRACE" }
//! ```
//!
//! Every field is optional. Logging is off by default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::{Logger, Severity};

use super::errors::{TheoryError, TheoryResult};

/// Configuration for a [`Theory`](super::Theory)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheoryConfig {
    /// Theory name used in logs and reports (optional)
    #[serde(default)]
    pub name: Option<String>,

    /// Whether evaluation events are logged (default: false)
    #[serde(default)]
    pub logging_enabled: bool,

    /// Minimum severity written when logging is enabled (default: INFO)
    #[serde(default = "default_log_severity")]
    pub log_severity: Severity,
}

fn default_log_severity() -> Severity {
    Severity::Info
}

impl Default for TheoryConfig {
    fn default() -> Self {
        Self {
            name: None,
            logging_enabled: false,
            log_severity: default_log_severity(),
        }
    }
}

impl TheoryConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> TheoryResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| TheoryError::Config(format!("Failed to read config: {}", e)))?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from JSON text
    pub fn from_json(content: &str) -> TheoryResult<Self> {
        let config: TheoryConfig = serde_json::from_str(content)
            .map_err(|e| TheoryError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> TheoryResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(TheoryError::Config("name must not be blank".into()));
            }
        }
        Ok(())
    }

    /// Build the logger described by this configuration
    pub fn logger(&self) -> Logger {
        if self.logging_enabled {
            Logger::new(self.log_severity)
        } else {
            Logger::disabled()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TheoryConfig::default();
        assert!(config.name.is_none());
        assert!(!config.logging_enabled);
        assert_eq!(config.log_severity, Severity::Info);
        assert_eq!(config.logger(), Logger::disabled());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = TheoryConfig::from_json("{}").unwrap();
        assert_eq!(config, TheoryConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = TheoryConfig::from_json(
            r#"{"name":"signup","logging_enabled":true,"log_severity":"WARN"}"#,
        )
        .unwrap();
        assert_eq!(config.name.as_deref(), Some("signup"));
        assert!(config.logger().is_enabled_for(Severity::Warn));
        assert!(!config.logger().is_enabled_for(Severity::Info));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = TheoryConfig::from_json(r#"{"name":"  "}"#).unwrap_err();
        assert_eq!(err.code(), "THEORY_CONFIG_ERROR");
    }

    #[test]
    fn test_unknown_severity_rejected() {
        assert!(TheoryConfig::from_json(r#"{"log_severity":"LOUD"}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name":"from-file"}}"#).unwrap();

        let config = TheoryConfig::load(file.path()).unwrap();
        assert_eq!(config.name.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TheoryConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TheoryError::Config(_)));
    }
}
