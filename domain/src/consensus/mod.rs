//! Consensus over unreliable responders
//!
//! Responders never return identical text for the same input, so answers
//! are grouped by edit-distance similarity before voting.
//!
//! # Flow
//!
//! ```text
//! outcomes ──► successes ──► clusters ──► best cluster ──► agreement
//!                                                             │
//!                        agreement >= threshold ──► Consensus │
//!                        otherwise             ──► Fallback ◄─┘
//! ```
//!
//! On the fallback path the single most confident answer is returned and
//! agreement is reported as `1 / successes`, signalling one responder's
//! worth of support.

pub mod aggregator;
pub mod cluster;
pub mod outcome;
pub mod similarity;

pub use aggregator::{AggregatedAnswer, ConsensusAggregator, ConsensusPath};
pub use cluster::{ResultCluster, cluster_successes};
pub use outcome::{
    FailureCause, ResponderFailure, ResponderOutcome, ResponderSuccess, failures, successes,
};
pub use similarity::{SIMILARITY_THRESHOLD, are_similar, similarity};
