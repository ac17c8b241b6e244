//! Responders and the tasks they can be asked to do.
//!
//! - [`profile::ResponderProfile`]: capabilities, cost and latency of a backend
//! - [`task::TaskDefinition`]: which responders may answer a named task
//! - [`task::SwarmTask`]: one request to run a task through the swarm

pub mod profile;
pub mod task;

pub use profile::{ResponderClass, ResponderProfile};
pub use task::{SwarmTask, TaskDefinition};
