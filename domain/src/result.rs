//! Final result of a swarm task

use crate::consensus::{AggregatedAnswer, ConsensusPath, ResponderOutcome};
use crate::core::provider::Provider;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The answer returned to the caller of a swarm task (immutable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwarmResult {
    /// The chosen answer
    pub text: String,
    /// Confidence in the answer, within [0, 1]
    pub confidence: f64,
    /// Share of successful responders backing the answer, within [0, 1]
    pub agreement: f64,
    /// Successful answers per provider
    pub responder_distribution: BTreeMap<Provider, usize>,
    /// Successful responders / selected responders, within [0, 1]
    pub reliability: f64,
    /// Wall-clock time from start to finish
    pub elapsed_ms: u64,
    /// Whether the answer came from consensus or the fallback rule
    pub path: ConsensusPath,
    /// Number of responders the task was dispatched to
    pub selected: usize,
}

impl SwarmResult {
    /// Assemble a result from the aggregated answer and the raw outcomes.
    pub fn assemble(
        answer: AggregatedAnswer,
        outcomes: &[ResponderOutcome],
        selected: usize,
        elapsed_ms: u64,
    ) -> Self {
        let responder_distribution = Self::distribution(outcomes);
        let succeeded: usize = responder_distribution.values().sum();
        let reliability = if selected == 0 {
            0.0
        } else {
            succeeded as f64 / selected as f64
        };

        Self {
            text: answer.text,
            confidence: answer.confidence,
            agreement: answer.agreement,
            responder_distribution,
            reliability,
            elapsed_ms,
            path: answer.path,
            selected,
        }
    }

    /// Count successful outcomes per provider
    pub fn distribution(outcomes: &[ResponderOutcome]) -> BTreeMap<Provider, usize> {
        let mut distribution = BTreeMap::new();
        for success in outcomes.iter().filter_map(|o| o.as_success()) {
            *distribution.entry(success.provider.clone()).or_insert(0) += 1;
        }
        distribution
    }

    pub fn successful_responders(&self) -> usize {
        self.responder_distribution.values().sum()
    }

    pub fn is_consensus(&self) -> bool {
        self.path.is_consensus()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer() -> AggregatedAnswer {
        AggregatedAnswer {
            text: "Paris".to_string(),
            confidence: 0.9,
            agreement: 1.0,
            path: ConsensusPath::Consensus,
            clusters: 1,
        }
    }

    #[test]
    fn test_assemble_computes_reliability_and_distribution() {
        let outcomes = vec![
            ResponderOutcome::success(Provider::OpenAi, "Paris", 0.9),
            ResponderOutcome::timeout(Provider::Anthropic, 1000),
            ResponderOutcome::success(Provider::OpenAi, "Paris.", 0.9),
            ResponderOutcome::success(Provider::Google, "Paris", 0.9),
        ];
        let result = SwarmResult::assemble(answer(), &outcomes, 4, 120);

        assert_eq!(result.reliability, 0.75);
        assert_eq!(result.responder_distribution[&Provider::OpenAi], 2);
        assert_eq!(result.responder_distribution[&Provider::Google], 1);
        assert!(!result.responder_distribution.contains_key(&Provider::Anthropic));
        assert_eq!(result.successful_responders(), 3);
        assert_eq!(result.elapsed_ms, 120);
        assert!(result.is_consensus());
    }

    #[test]
    fn test_serializes_distribution_with_provider_keys() {
        let outcomes = vec![ResponderOutcome::success(Provider::Anthropic, "Paris", 0.9)];
        let result = SwarmResult::assemble(answer(), &outcomes, 2, 5);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["responder_distribution"]["anthropic"], 1);
        assert_eq!(json["reliability"], 0.5);
        assert_eq!(json["path"], "consensus");
    }
}
