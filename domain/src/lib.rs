//! Domain layer for model-swarm
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Swarm
//!
//! A swarm task is answered by several independent responders at once:
//!
//! - **Registry**: Known responder profiles and task definitions
//! - **Selection**: The cheapest, fastest eligible responders are picked
//! - **Consensus**: Answers are clustered by similarity and voted on
//!
//! ## Consensus / Fallback (ConsensusPath)
//!
//! - **Consensus**: The best cluster reached the agreement threshold
//! - **Fallback**: The single most confident answer is used instead

pub mod config;
pub mod consensus;
pub mod core;
pub mod registry;
pub mod responder;
pub mod result;
pub mod selection;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, OutputFormat, Severity, SwarmConfig, SwarmConfigOverride,
};
pub use consensus::{
    AggregatedAnswer, ConsensusAggregator, ConsensusPath, FailureCause, ResponderFailure,
    ResponderOutcome, ResponderSuccess, ResultCluster,
};
pub use core::{error::SwarmError, provider::Provider};
pub use registry::ResponderRegistry;
pub use responder::{ResponderClass, ResponderProfile, SwarmTask, TaskDefinition};
pub use result::SwarmResult;
pub use selection::ResponderSelector;
