//! Core domain concepts shared across all subdomains.
//!
//! - [`provider::Provider`]: model backends (OpenAI, Anthropic, Google, etc.)
//! - [`error::SwarmError`]: task-fatal errors

pub mod error;
pub mod provider;
