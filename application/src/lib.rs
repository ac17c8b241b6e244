//! Application layer for model-swarm
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    progress::{NoProgress, SwarmProgressNotifier},
    responder_gateway::{GatewayError, ResponderGateway, ResponderReply},
};
pub use use_cases::dispatch::DispatchExecutor;
pub use use_cases::execute_swarm_task::SwarmOrchestrator;
