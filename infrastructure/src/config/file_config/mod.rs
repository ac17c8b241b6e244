//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod responders;
mod swarm;
mod tasks;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use responders::FileResponderProfile;
pub use swarm::FileSwarmConfig;
pub use tasks::FileTaskDefinition;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use swarm_domain::{
    ConfigIssue, ConfigIssueCode, ResponderProfile, ResponderRegistry, Severity, SwarmConfig,
    TaskDefinition,
};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Swarm execution settings
    pub swarm: FileSwarmConfig,
    /// Responder profiles; empty means the built-in profiles
    pub responders: Vec<FileResponderProfile>,
    /// Task definitions, registered after the built-in `text_generation`
    pub tasks: Vec<FileTaskDefinition>,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This checks:
    /// 1. Empty provider names and unknown classes in `[[responders]]`
    /// 2. Empty task names and unknown classes in `[[tasks]]`
    /// 3. Duplicate task names (the later entry wins)
    ///
    /// Out-of-range `[swarm]` values are not reported here; they are clamped
    /// when the orchestrator validates its config.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (index, responder) in self.responders.iter().enumerate() {
            issues.extend(responder.to_profile(index).1);
        }

        let mut seen = HashSet::new();
        for (index, task) in self.tasks.iter().enumerate() {
            issues.extend(task.to_definition(index).1);

            let name = task.name.trim();
            if !name.is_empty() && !seen.insert(name) {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::DuplicateTaskName {
                        name: name.to_string(),
                    },
                    message: format!(
                        "tasks[{}]: task '{}' is defined more than once, the last definition wins",
                        index, name
                    ),
                });
            }
        }

        issues
    }

    /// The `[swarm]` section over built-in defaults (not yet validated)
    pub fn to_swarm_config(&self) -> SwarmConfig {
        self.swarm.merged_over(&SwarmConfig::default())
    }

    /// Valid responder profiles, or the built-in ones if none are configured
    pub fn to_profiles(&self) -> Vec<ResponderProfile> {
        if self.responders.is_empty() {
            return ResponderProfile::default_profiles();
        }

        self.responders
            .iter()
            .enumerate()
            .filter_map(|(index, responder)| responder.to_profile(index).0)
            .collect()
    }

    /// Valid task definitions, in file order
    pub fn to_task_definitions(&self) -> Vec<TaskDefinition> {
        self.tasks
            .iter()
            .enumerate()
            .filter_map(|(index, task)| task.to_definition(index).0)
            .collect()
    }

    /// Registry with the configured profiles, the built-in `text_generation`
    /// task, and the configured tasks (which may replace it).
    pub fn to_registry(&self) -> ResponderRegistry {
        let mut registry = ResponderRegistry::new();
        for profile in self.to_profiles() {
            registry.register(profile);
        }
        registry.register_task(TaskDefinition::text_generation());
        for definition in self.to_task_definitions() {
            registry.register_task(definition);
        }
        registry
    }
}
