//! Structured configuration issues.
//!
//! Invalid swarm settings are never rejected outright: they are clamped to
//! safe values, and every clamp is reported as a [`ConfigIssue`] so callers
//! can log or display it.
//!
//! # Examples
//!
//! ```
//! use swarm_domain::SwarmConfig;
//! use swarm_domain::config::validation::ConfigIssueCode;
//!
//! let raw = SwarmConfig { min_responders: 0, ..SwarmConfig::default() };
//! let (config, issues) = raw.validated();
//! assert_eq!(config.min_responders, 2);
//! assert_eq!(issues[0].code, ConfigIssueCode::MinRespondersTooLow);
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a value was replaced or will be ignored.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `min_responders` was below 1.
    MinRespondersTooLow,
    /// `max_responders` was below `min_responders`.
    MaxBelowMin,
    /// `agreement_threshold` was outside (0, 1].
    ThresholdOutOfRange,
    /// `default_timeout_ms` was below the floor.
    TimeoutBelowFloor,
    /// A responder entry has no provider name.
    EmptyProviderName { index: usize },
    /// A task entry has no name.
    EmptyTaskName { index: usize },
    /// Two task entries share a name; the later one wins.
    DuplicateTaskName { name: String },
    /// A string field did not parse into its enum.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in a configuration value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    /// Check whether any issues are errors (i.e. fatal).
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
