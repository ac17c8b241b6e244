//! Configuration value objects for the domain layer
//!
//! Validation here is pure: values go in, clamped values and a list of
//! issues come out. Logging the issues is left to the caller.

pub mod output_format;
pub mod swarm_config;
pub mod validation;

pub use output_format::OutputFormat;
pub use swarm_config::{SwarmConfig, SwarmConfigOverride};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
