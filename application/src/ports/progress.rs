//! Progress notification port
//!
//! Defines the interface for reporting progress during swarm execution.

use swarm_domain::{Provider, ResponderFailure};

/// Callback for progress updates during a swarm task
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, progress bar, etc.)
pub trait SwarmProgressNotifier: Send + Sync {
    /// Called once responders have been chosen for a task
    fn on_selection(&self, _task: &str, _selected: &[Provider]) {}

    /// Called when dispatch starts
    fn on_dispatch_start(&self, _total: usize) {}

    /// Called when a responder finishes, in completion order
    fn on_responder_complete(&self, _provider: &Provider, _success: bool) {}

    /// Called after every responder has finished
    fn on_dispatch_complete(&self) {}

    /// Called with the failures of a task, if there were any
    fn on_responder_failures(&self, _failures: &[&ResponderFailure]) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SwarmProgressNotifier for NoProgress {}
