//! Responder adapters
//!
//! Each adapter knows how to reach one kind of backend. The
//! [`RoutingGateway`](routing::RoutingGateway) picks an adapter per profile.

pub mod routing;
pub mod simulated;

use async_trait::async_trait;
use swarm_application::ports::responder_gateway::{GatewayError, ResponderReply};
use swarm_domain::{Provider, ResponderProfile};

#[async_trait]
pub trait ResponderAdapter: Send + Sync {
    /// The provider this adapter serves, or `None` if it serves any
    fn provider(&self) -> Option<&Provider>;

    async fn invoke(
        &self,
        profile: &ResponderProfile,
        input: &str,
    ) -> Result<ResponderReply, GatewayError>;
}
