//! Reconciles divergent answers into one answer with confidence and agreement

use super::cluster::{ResultCluster, cluster_successes};
use super::outcome::{ResponderOutcome, ResponderSuccess, successes};
use crate::core::error::SwarmError;
use serde::{Deserialize, Serialize};

/// Which rule produced the final answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusPath {
    /// The best cluster reached the agreement threshold
    Consensus,
    /// No cluster did; the single most confident answer was used
    Fallback,
}

impl ConsensusPath {
    pub fn is_consensus(&self) -> bool {
        matches!(self, ConsensusPath::Consensus)
    }
}

impl std::fmt::Display for ConsensusPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsensusPath::Consensus => write!(f, "consensus"),
            ConsensusPath::Fallback => write!(f, "fallback"),
        }
    }
}

/// The aggregated answer for one task
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedAnswer {
    pub text: String,
    /// Within [0, 1]
    pub confidence: f64,
    /// Within [0, 1]; `1 / successes` on the fallback path
    pub agreement: f64,
    pub path: ConsensusPath,
    /// Number of distinct answers found
    pub clusters: usize,
}

/// Similarity-based voting over responder outcomes
///
/// # Example
///
/// ```
/// use swarm_domain::{ConsensusAggregator, ConsensusPath, Provider, ResponderOutcome};
///
/// let outcomes = vec![
///     ResponderOutcome::success(Provider::OpenAi, "Rust is a safe lang.", 0.8),
///     ResponderOutcome::success(Provider::Anthropic, "Rust is a safe lang!", 0.9),
/// ];
/// let answer = ConsensusAggregator::aggregate(&outcomes, 0.6).unwrap();
///
/// assert_eq!(answer.path, ConsensusPath::Consensus);
/// assert_eq!(answer.agreement, 1.0);
/// assert_eq!(answer.text, "Rust is a safe lang.");
/// ```
pub struct ConsensusAggregator;

impl ConsensusAggregator {
    /// Aggregate `outcomes` (in the order the executor returned them).
    ///
    /// Failures are ignored. Fails with
    /// [`SwarmError::NoSuccessfulOutcomes`] when nothing succeeded.
    pub fn aggregate(
        outcomes: &[ResponderOutcome],
        agreement_threshold: f64,
    ) -> Result<AggregatedAnswer, SwarmError> {
        let answers = successes(outcomes);
        if answers.is_empty() {
            return Err(SwarmError::NoSuccessfulOutcomes {
                attempted: outcomes.len(),
            });
        }

        let clusters = cluster_successes(&answers);
        let best = Self::best_cluster(&clusters);
        let agreement = best.len() as f64 / answers.len() as f64;

        if agreement >= agreement_threshold {
            return Ok(AggregatedAnswer {
                text: best.representative().text.clone(),
                confidence: best.combined_confidence(),
                agreement,
                path: ConsensusPath::Consensus,
                clusters: clusters.len(),
            });
        }

        let most_confident = Self::most_confident(&answers);
        Ok(AggregatedAnswer {
            text: most_confident.text.clone(),
            confidence: most_confident.confidence,
            agreement: 1.0 / answers.len() as f64,
            path: ConsensusPath::Fallback,
            clusters: clusters.len(),
        })
    }

    /// Highest mean confidence; the earliest-formed cluster wins ties.
    fn best_cluster<'c, 'a>(clusters: &'c [ResultCluster<'a>]) -> &'c ResultCluster<'a> {
        let mut best = &clusters[0];
        for cluster in &clusters[1..] {
            if cluster.combined_confidence() > best.combined_confidence() {
                best = cluster;
            }
        }
        best
    }

    /// Highest individual confidence; the first encountered wins ties.
    fn most_confident<'a>(answers: &[&'a ResponderSuccess]) -> &'a ResponderSuccess {
        let mut best = answers[0];
        for &answer in &answers[1..] {
            if answer.confidence > best.confidence {
                best = answer;
            }
        }
        best
    }
}
