//! Infrastructure layer for model-swarm
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod responders;

// Re-export commonly used types
pub use config::{
    ConfigLoadError, ConfigLoader, FileConfig, FileOutputConfig, FileOutputFormat,
    FileResponderProfile, FileTaskDefinition,
};
pub use responders::{
    ResponderAdapter,
    routing::RoutingGateway,
    simulated::{DEFAULT_SIMULATED_CONFIDENCE, SimulatedResponder},
};
