//! Per-responder outcomes of a dispatch

use crate::core::provider::Provider;
use serde::{Deserialize, Serialize};

/// Why a responder produced no answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureCause {
    /// The timer won the race; the in-flight call was abandoned
    TimeoutExceeded { timeout_ms: u64 },
    /// The backend call itself failed (network, credentials, bad payload)
    InvocationError(String),
    /// The execution unit died before reporting
    Aborted,
}

impl std::fmt::Display for FailureCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureCause::TimeoutExceeded { timeout_ms } => {
                write!(f, "timed out after {}ms", timeout_ms)
            }
            FailureCause::InvocationError(cause) => write!(f, "{}", cause),
            FailureCause::Aborted => write!(f, "execution aborted"),
        }
    }
}

/// A responder's answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderSuccess {
    pub provider: Provider,
    pub text: String,
    /// Always within [0, 1]
    pub confidence: f64,
}

/// A responder that did not answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderFailure {
    pub provider: Provider,
    pub cause: FailureCause,
}

/// Result of dispatching a task to one responder
///
/// Produced exactly once per dispatched responder and never mutated. The
/// tagged variant keeps aggregation from ever treating a failure as an
/// answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponderOutcome {
    Success(ResponderSuccess),
    Failure(ResponderFailure),
}

impl ResponderOutcome {
    /// Create a success; `confidence` is clamped into [0, 1] and non-finite
    /// values become 0.
    pub fn success(provider: Provider, text: impl Into<String>, confidence: f64) -> Self {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        ResponderOutcome::Success(ResponderSuccess {
            provider,
            text: text.into(),
            confidence,
        })
    }

    pub fn failure(provider: Provider, cause: FailureCause) -> Self {
        ResponderOutcome::Failure(ResponderFailure { provider, cause })
    }

    pub fn timeout(provider: Provider, timeout_ms: u64) -> Self {
        Self::failure(provider, FailureCause::TimeoutExceeded { timeout_ms })
    }

    pub fn invocation_error(provider: Provider, cause: impl Into<String>) -> Self {
        Self::failure(provider, FailureCause::InvocationError(cause.into()))
    }

    pub fn provider(&self) -> &Provider {
        match self {
            ResponderOutcome::Success(s) => &s.provider,
            ResponderOutcome::Failure(f) => &f.provider,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponderOutcome::Success(_))
    }

    pub fn as_success(&self) -> Option<&ResponderSuccess> {
        match self {
            ResponderOutcome::Success(s) => Some(s),
            ResponderOutcome::Failure(_) => None,
        }
    }

    pub fn as_failure(&self) -> Option<&ResponderFailure> {
        match self {
            ResponderOutcome::Success(_) => None,
            ResponderOutcome::Failure(f) => Some(f),
        }
    }
}

/// Successes in the order given
pub fn successes(outcomes: &[ResponderOutcome]) -> Vec<&ResponderSuccess> {
    outcomes.iter().filter_map(|o| o.as_success()).collect()
}

/// Failures in the order given
pub fn failures(outcomes: &[ResponderOutcome]) -> Vec<&ResponderFailure> {
    outcomes.iter().filter_map(|o| o.as_failure()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        let high = ResponderOutcome::success(Provider::OpenAi, "a", 1.7);
        assert_eq!(high.as_success().unwrap().confidence, 1.0);

        let low = ResponderOutcome::success(Provider::OpenAi, "a", -0.2);
        assert_eq!(low.as_success().unwrap().confidence, 0.0);

        let nan = ResponderOutcome::success(Provider::OpenAi, "a", f64::NAN);
        assert_eq!(nan.as_success().unwrap().confidence, 0.0);
    }

    #[test]
    fn test_failure_display() {
        assert_eq!(
            FailureCause::TimeoutExceeded { timeout_ms: 1000 }.to_string(),
            "timed out after 1000ms"
        );
        assert_eq!(
            FailureCause::InvocationError("missing API key".to_string()).to_string(),
            "missing API key"
        );
    }

    #[test]
    fn test_partition() {
        let outcomes = vec![
            ResponderOutcome::success(Provider::OpenAi, "a", 0.9),
            ResponderOutcome::timeout(Provider::Google, 1000),
            ResponderOutcome::invocation_error(Provider::Together, "boom"),
            ResponderOutcome::success(Provider::Anthropic, "b", 0.8),
        ];

        let ok = successes(&outcomes);
        assert_eq!(ok.len(), 2);
        assert_eq!(ok[1].provider, Provider::Anthropic);

        let failed = failures(&outcomes);
        assert_eq!(failed.len(), 2);
        assert_eq!(failed[0].provider, Provider::Google);
        assert_eq!(outcomes[2].provider(), &Provider::Together);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json =
            serde_json::to_value(ResponderOutcome::timeout(Provider::Google, 1500)).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["cause"]["kind"], "timeout_exceeded");
    }
}
