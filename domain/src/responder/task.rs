//! Task definitions (eligibility criteria) and task requests

use super::profile::{ResponderClass, ResponderProfile};
use crate::config::SwarmConfigOverride;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Eligibility criteria for a named kind of task
///
/// A definition says *who* may answer, not *how* the task runs; execution
/// parameters come from [`SwarmConfig`](crate::SwarmConfig).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Unique key tasks are looked up by
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Capabilities a responder must have, all of them
    pub required_capabilities: BTreeSet<String>,
    /// The only responder class that qualifies
    pub class: ResponderClass,
}

impl TaskDefinition {
    pub fn new(name: impl Into<String>, class: ResponderClass) -> Self {
        Self {
            name: name.into(),
            description: None,
            required_capabilities: BTreeSet::new(),
            class,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_required_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_capabilities
            .extend(capabilities.into_iter().map(Into::into));
        self
    }

    /// A profile qualifies iff its capabilities are a superset of the
    /// required ones and its class matches.
    pub fn accepts(&self, profile: &ResponderProfile) -> bool {
        profile.class == self.class
            && self
                .required_capabilities
                .is_subset(&profile.capabilities)
    }

    /// The stock "text_generation" task
    pub fn text_generation() -> Self {
        TaskDefinition::new("text_generation", ResponderClass::Large)
            .with_description("Generate text based on input")
            .with_required_capabilities(["reasoning", "creativity"])
    }
}

/// A request to run one task through the swarm
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmTask {
    /// Must match a registered [`TaskDefinition`]
    pub name: String,
    /// Input handed verbatim to every selected responder
    pub input: String,
    /// Per-call settings merged over the orchestrator's config
    pub config: Option<SwarmConfigOverride>,
}

impl SwarmTask {
    pub fn new(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: SwarmConfigOverride) -> Self {
        self.config = Some(config);
        self
    }
}
