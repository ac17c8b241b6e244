//! Responder profiles: what a backend can do and what it costs

use crate::core::provider::Provider;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Size class of a responder
///
/// Task definitions ask for exactly one class; a responder of a different
/// class is never eligible, even if it has every required capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponderClass {
    #[serde(alias = "SMALL", alias = "Small")]
    Small,
    #[serde(alias = "MEDIUM", alias = "Medium")]
    Medium,
    #[serde(alias = "LARGE", alias = "Large")]
    Large,
}

impl ResponderClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponderClass::Small => "small",
            ResponderClass::Medium => "medium",
            ResponderClass::Large => "large",
        }
    }
}

impl std::fmt::Display for ResponderClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResponderClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(ResponderClass::Small),
            "medium" => Ok(ResponderClass::Medium),
            "large" => Ok(ResponderClass::Large),
            other => Err(format!(
                "Unknown responder class: {}. Valid: small, medium, large",
                other
            )),
        }
    }
}

/// Static description of a responder
///
/// Profiles are immutable once registered. The selector ranks them by
/// [`selection_score`](Self::selection_score) (cheaper and faster first).
///
/// # Example
///
/// ```
/// use swarm_domain::{Provider, ResponderClass, ResponderProfile};
///
/// let profile = ResponderProfile::new(Provider::Anthropic, ResponderClass::Large)
///     .with_capabilities(["reasoning", "analysis"])
///     .with_cost_per_unit(0.001)
///     .with_average_latency_ms(1200);
///
/// assert!(profile.has_capability("analysis"));
/// assert!((profile.selection_score() - 1.201).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderProfile {
    /// Identity of the backend
    pub provider: Provider,
    /// Capabilities this responder offers (e.g. "reasoning", "creativity")
    pub capabilities: BTreeSet<String>,
    /// Price per output unit
    pub cost_per_unit: f64,
    /// Largest output the responder will produce
    pub max_output_size: u32,
    /// Typical round-trip latency in milliseconds
    pub average_latency_ms: u64,
    /// Size class
    pub class: ResponderClass,
}

impl ResponderProfile {
    pub fn new(provider: Provider, class: ResponderClass) -> Self {
        Self {
            provider,
            capabilities: BTreeSet::new(),
            cost_per_unit: 0.0,
            max_output_size: 4096,
            average_latency_ms: 1000,
            class,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities
            .extend(capabilities.into_iter().map(Into::into));
        self
    }

    pub fn with_cost_per_unit(mut self, cost: f64) -> Self {
        self.cost_per_unit = cost;
        self
    }

    pub fn with_max_output_size(mut self, size: u32) -> Self {
        self.max_output_size = size;
        self
    }

    pub fn with_average_latency_ms(mut self, latency_ms: u64) -> Self {
        self.average_latency_ms = latency_ms;
        self
    }

    // ==================== Queries ====================

    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// Composite ranking score: `cost_per_unit + average_latency_ms / 1000`.
    ///
    /// Lower is better.
    pub fn selection_score(&self) -> f64 {
        self.cost_per_unit + self.average_latency_ms as f64 / 1000.0
    }

    /// Built-in profiles registered when no others are configured
    pub fn default_profiles() -> Vec<ResponderProfile> {
        vec![
            ResponderProfile::new(Provider::OpenAi, ResponderClass::Large)
                .with_capabilities(["reasoning", "creativity", "knowledge"])
                .with_cost_per_unit(0.002)
                .with_max_output_size(4096)
                .with_average_latency_ms(1000),
            ResponderProfile::new(Provider::Anthropic, ResponderClass::Large)
                .with_capabilities(["reasoning", "creativity", "analysis"])
                .with_cost_per_unit(0.001)
                .with_max_output_size(8192)
                .with_average_latency_ms(1200),
        ]
    }
}
