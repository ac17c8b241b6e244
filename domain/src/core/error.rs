//! Domain error types

use thiserror::Error;

/// Errors that are fatal to a whole swarm task
///
/// Per-responder problems (timeouts, invocation errors) never appear here;
/// they are recorded as [`ResponderOutcome::Failure`](crate::ResponderOutcome)
/// and only lower the reliability and agreement of the result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwarmError {
    #[error("Task definition not found: {0}")]
    TaskNotFound(String),

    #[error(
        "Not enough eligible responders for task '{task}': {eligible} eligible, {required} required"
    )]
    InsufficientResponders {
        task: String,
        eligible: usize,
        required: usize,
    },

    #[error("All {attempted} responders failed, nothing to aggregate")]
    NoSuccessfulOutcomes { attempted: usize },
}

impl SwarmError {
    /// Check if the caller can fix this by changing the registry or config
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SwarmError::TaskNotFound(_) | SwarmError::InsufficientResponders { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_not_found_display() {
        let error = SwarmError::TaskNotFound("summarize".to_string());
        assert_eq!(error.to_string(), "Task definition not found: summarize");
    }

    #[test]
    fn test_insufficient_responders_display() {
        let error = SwarmError::InsufficientResponders {
            task: "analysis".to_string(),
            eligible: 1,
            required: 2,
        };
        assert!(error.to_string().contains("1 eligible, 2 required"));
    }

    #[test]
    fn test_is_configuration_error() {
        assert!(SwarmError::TaskNotFound("x".to_string()).is_configuration_error());
        assert!(!SwarmError::NoSuccessfulOutcomes { attempted: 3 }.is_configuration_error());
    }
}
