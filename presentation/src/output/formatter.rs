//! Output formatter trait

use swarm_domain::SwarmResult;

/// Trait for formatting swarm results
pub trait OutputFormatter {
    /// Format the complete swarm result
    fn format(&self, result: &SwarmResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &SwarmResult) -> String;

    /// Format the answer only (concise output)
    fn format_text_only(&self, result: &SwarmResult) -> String;
}
