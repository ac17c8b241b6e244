//! Progress reporting for swarm execution

pub mod reporter;
