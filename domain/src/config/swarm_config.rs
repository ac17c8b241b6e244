//! Swarm execution settings and their per-task overrides.

use super::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_MIN_RESPONDERS: usize = 2;
pub const DEFAULT_MAX_RESPONDERS: usize = 5;
pub const DEFAULT_AGREEMENT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Per-responder timeouts below this are replaced by [`DEFAULT_TIMEOUT_MS`].
pub const MIN_TIMEOUT_MS: u64 = 1_000;

/// Settings that control selection, dispatch and aggregation.
///
/// Construct freely, then call [`validated`](Self::validated) before use:
/// out-of-range values are clamped and each clamp is reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Fewest responders a task may be dispatched to.
    pub min_responders: usize,
    /// Most responders a task may be dispatched to.
    pub max_responders: usize,
    /// Minimum share of successes the winning cluster needs, in (0, 1].
    pub agreement_threshold: f64,
    /// Per-responder timeout in milliseconds.
    pub default_timeout_ms: u64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            min_responders: DEFAULT_MIN_RESPONDERS,
            max_responders: DEFAULT_MAX_RESPONDERS,
            agreement_threshold: DEFAULT_AGREEMENT_THRESHOLD,
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl SwarmConfig {
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }

    /// Clamp invalid values to safe ones.
    ///
    /// Rules, applied in order:
    /// - `min_responders < 1` → default (2)
    /// - `max_responders < min_responders` → `min_responders`
    /// - `agreement_threshold` not in (0, 1] → default (0.6)
    /// - `default_timeout_ms < 1000` → default (30000)
    pub fn validated(mut self) -> (Self, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if self.min_responders < 1 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MinRespondersTooLow,
                format!(
                    "min_responders must be at least 1, setting to default: {}",
                    DEFAULT_MIN_RESPONDERS
                ),
            ));
            self.min_responders = DEFAULT_MIN_RESPONDERS;
        }

        if self.max_responders < self.min_responders {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MaxBelowMin,
                format!(
                    "max_responders ({}) must be at least {}, adjusting to match",
                    self.max_responders, self.min_responders
                ),
            ));
            self.max_responders = self.min_responders;
        }

        let threshold = self.agreement_threshold;
        if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ThresholdOutOfRange,
                format!(
                    "agreement_threshold ({}) must be in (0, 1], setting to default: {}",
                    threshold, DEFAULT_AGREEMENT_THRESHOLD
                ),
            ));
            self.agreement_threshold = DEFAULT_AGREEMENT_THRESHOLD;
        }

        if self.default_timeout_ms < MIN_TIMEOUT_MS {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::TimeoutBelowFloor,
                format!(
                    "default_timeout_ms ({}) must be at least {}ms, setting to default: {}",
                    self.default_timeout_ms, MIN_TIMEOUT_MS, DEFAULT_TIMEOUT_MS
                ),
            ));
            self.default_timeout_ms = DEFAULT_TIMEOUT_MS;
        }

        (self, issues)
    }

    /// Apply an override on top of this config (no validation).
    pub fn merged_with(&self, patch: &SwarmConfigOverride) -> SwarmConfig {
        patch.merged_over(self)
    }
}

/// Partial [`SwarmConfig`]: set fields override, unset fields inherit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfigOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_responders: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_responders: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_timeout_ms: Option<u64>,
}

impl SwarmConfigOverride {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn merged_over(&self, base: &SwarmConfig) -> SwarmConfig {
        SwarmConfig {
            min_responders: self.min_responders.unwrap_or(base.min_responders),
            max_responders: self.max_responders.unwrap_or(base.max_responders),
            agreement_threshold: self
                .agreement_threshold
                .unwrap_or(base.agreement_threshold),
            default_timeout_ms: self.default_timeout_ms.unwrap_or(base.default_timeout_ms),
        }
    }

    /// Combine two overrides; fields set in `other` win.
    pub fn or_else_from(self, other: &SwarmConfigOverride) -> SwarmConfigOverride {
        SwarmConfigOverride {
            min_responders: other.min_responders.or(self.min_responders),
            max_responders: other.max_responders.or(self.max_responders),
            agreement_threshold: other.agreement_threshold.or(self.agreement_threshold),
            default_timeout_ms: other.default_timeout_ms.or(self.default_timeout_ms),
        }
    }
}
