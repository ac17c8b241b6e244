//! Responder gateway port
//!
//! Defines the interface for asking a single responder for an answer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use swarm_domain::{Provider, ResponderProfile};
use thiserror::Error;

/// Errors that can occur while invoking a responder
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Missing credential for provider: {0}")]
    MissingCredential(Provider),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider not available: {0}")]
    ProviderNotAvailable(Provider),

    #[error("Other error: {0}")]
    Other(String),
}

/// What a responder answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderReply {
    pub text: String,
    /// Self-reported confidence, clamped to [0, 1] when turned into an outcome
    pub confidence: f64,
}

impl ResponderReply {
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Gateway to responder backends
///
/// This port defines how the application layer reaches responders.
/// Implementations (adapters) live in the infrastructure layer; provider
/// specific behavior stays behind this trait.
#[async_trait]
pub trait ResponderGateway: Send + Sync {
    /// Ask the responder described by `profile` to answer `input`
    async fn invoke(
        &self,
        profile: &ResponderProfile,
        input: &str,
    ) -> Result<ResponderReply, GatewayError>;
}
