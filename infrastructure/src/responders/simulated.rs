//! Simulated responder for providers without a real client

use super::ResponderAdapter;
use async_trait::async_trait;
use std::time::Duration;
use swarm_application::ports::responder_gateway::{GatewayError, ResponderReply};
use swarm_domain::{Provider, ResponderProfile};
use tracing::debug;

pub const DEFAULT_SIMULATED_CONFIDENCE: f64 = 0.85;

/// Answers after the profile's average latency with a canned reply
pub struct SimulatedResponder {
    provider: Option<Provider>,
    confidence: f64,
}

impl SimulatedResponder {
    /// A simulated responder that serves any provider
    pub fn new() -> Self {
        Self {
            provider: None,
            confidence: DEFAULT_SIMULATED_CONFIDENCE,
        }
    }

    pub fn for_provider(provider: Provider) -> Self {
        Self {
            provider: Some(provider),
            ..Self::new()
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn reply_text(provider: &Provider, input: &str) -> String {
        format!("Response from {} for input: {}", provider, input)
    }
}

impl Default for SimulatedResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponderAdapter for SimulatedResponder {
    fn provider(&self) -> Option<&Provider> {
        self.provider.as_ref()
    }

    async fn invoke(
        &self,
        profile: &ResponderProfile,
        input: &str,
    ) -> Result<ResponderReply, GatewayError> {
        debug!(
            "Simulating {} ({}ms)",
            profile.provider, profile.average_latency_ms
        );
        tokio::time::sleep(Duration::from_millis(profile.average_latency_ms)).await;

        Ok(ResponderReply::new(
            Self::reply_text(&profile.provider, input),
            self.confidence,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_domain::ResponderClass;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn waits_average_latency() {
        let profile = ResponderProfile::new(Provider::Anthropic, ResponderClass::Large)
            .with_average_latency_ms(1200);
        let responder = SimulatedResponder::new();

        let started = Instant::now();
        let reply = responder.invoke(&profile, "hello").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1200));
        assert_eq!(reply.text, "Response from anthropic for input: hello");
        assert_eq!(reply.confidence, DEFAULT_SIMULATED_CONFIDENCE);
    }

    #[tokio::test(start_paused = true)]
    async fn configurable_confidence() {
        let profile = ResponderProfile::new(Provider::OpenAi, ResponderClass::Large);
        let responder = SimulatedResponder::for_provider(Provider::OpenAi).with_confidence(0.5);

        assert_eq!(responder.provider(), Some(&Provider::OpenAi));
        let reply = responder.invoke(&profile, "x").await.unwrap();
        assert_eq!(reply.confidence, 0.5);
    }
}
