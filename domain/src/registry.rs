//! In-memory catalog of responder profiles and task definitions.

use crate::core::error::SwarmError;
use crate::responder::{ResponderProfile, TaskDefinition};

/// Catalog of responders and task definitions
///
/// Registration order is preserved; it is the tie-break the selector uses
/// for equally scored responders.
///
/// # Example
///
/// ```
/// use swarm_domain::ResponderRegistry;
///
/// let registry = ResponderRegistry::with_defaults();
/// let def = registry.find_task("text_generation").unwrap();
/// assert_eq!(registry.eligible_responders(def).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResponderRegistry {
    profiles: Vec<ResponderProfile>,
    tasks: Vec<TaskDefinition>,
}

impl ResponderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in profiles and the text_generation task
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for profile in ResponderProfile::default_profiles() {
            registry.register(profile);
        }
        registry.register_task(TaskDefinition::text_generation());
        registry
    }

    pub fn register(&mut self, profile: ResponderProfile) {
        self.profiles.push(profile);
    }

    /// Register a task definition, replacing any definition with the same
    /// name. Returns the replaced definition.
    pub fn register_task(&mut self, definition: TaskDefinition) -> Option<TaskDefinition> {
        match self.tasks.iter_mut().find(|t| t.name == definition.name) {
            Some(existing) => Some(std::mem::replace(existing, definition)),
            None => {
                self.tasks.push(definition);
                None
            }
        }
    }

    pub fn find_task(&self, name: &str) -> Result<&TaskDefinition, SwarmError> {
        self.tasks
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| SwarmError::TaskNotFound(name.to_string()))
    }

    /// Profiles that qualify for `definition`, in registration order
    pub fn eligible_responders(&self, definition: &TaskDefinition) -> Vec<&ResponderProfile> {
        self.profiles
            .iter()
            .filter(|p| definition.accepts(p))
            .collect()
    }

    pub fn profiles(&self) -> &[ResponderProfile] {
        &self.profiles
    }

    pub fn tasks(&self) -> &[TaskDefinition] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
