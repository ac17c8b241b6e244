//! Execute Swarm Task use case
//!
//! Orchestrates the full swarm flow: configure, select, dispatch, aggregate.

use crate::ports::progress::{NoProgress, SwarmProgressNotifier};
use crate::ports::responder_gateway::ResponderGateway;
use crate::use_cases::dispatch::DispatchExecutor;
use std::sync::{Arc, RwLock};
use swarm_domain::consensus::failures;
use swarm_domain::{
    ConfigIssue, ConsensusAggregator, Provider, ResponderProfile, ResponderRegistry,
    ResponderSelector, SwarmConfig, SwarmConfigOverride, SwarmError, SwarmResult, SwarmTask,
    TaskDefinition,
};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Entry point for running tasks across a swarm of responders
///
/// Holds the responder registry and the base configuration. Both may be
/// changed between tasks; a running task works on a snapshot of each.
pub struct SwarmOrchestrator<G: ResponderGateway + 'static> {
    dispatcher: DispatchExecutor<G>,
    registry: RwLock<ResponderRegistry>,
    config: RwLock<SwarmConfig>,
}

impl<G: ResponderGateway + 'static> SwarmOrchestrator<G> {
    /// Create an orchestrator with an empty registry.
    ///
    /// `config` is validated; each clamped value is logged.
    pub fn new(gateway: Arc<G>, config: SwarmConfig) -> Self {
        let (config, issues) = config.validated();
        log_issues(&issues);

        Self {
            dispatcher: DispatchExecutor::new(gateway),
            registry: RwLock::new(ResponderRegistry::new()),
            config: RwLock::new(config),
        }
    }

    pub fn with_registry(self, registry: ResponderRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
            ..self
        }
    }

    /// Current base configuration
    pub fn config(&self) -> SwarmConfig {
        self.config
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Apply `patch` to the base configuration.
    ///
    /// Returns the clamps applied while validating the merged result.
    pub fn update_config(&self, patch: &SwarmConfigOverride) -> Vec<ConfigIssue> {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let (updated, issues) = patch.merged_over(&config).validated();
        log_issues(&issues);
        *config = updated;
        issues
    }

    /// Snapshot of the registry
    pub fn registry(&self) -> ResponderRegistry {
        self.registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn register_responder(&self, profile: ResponderProfile) {
        debug!("Registering responder {}", profile.provider);
        self.registry
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .register(profile);
    }

    /// Register a task definition, returning the one it replaced.
    pub fn register_task(&self, definition: TaskDefinition) -> Option<TaskDefinition> {
        debug!("Registering task {}", definition.name);
        let replaced = self
            .registry
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .register_task(definition);
        if let Some(old) = &replaced {
            info!("Task definition '{}' replaced", old.name);
        }
        replaced
    }

    /// Run a task by name with an optional per-call override
    pub async fn execute(
        &self,
        name: &str,
        input: &str,
        overrides: Option<SwarmConfigOverride>,
    ) -> Result<SwarmResult, SwarmError> {
        let mut task = SwarmTask::new(name, input);
        task.config = overrides;
        self.execute_task(task).await
    }

    /// Execute the task with default (no-op) progress
    pub async fn execute_task(&self, task: SwarmTask) -> Result<SwarmResult, SwarmError> {
        self.execute_task_with_progress(task, &NoProgress).await
    }

    /// Execute the task with progress callbacks
    ///
    /// Only [`SwarmError`] escapes: an unknown task, too few eligible
    /// responders, or no responder succeeding. Any other per-responder
    /// problem lowers reliability and is reported as a failure.
    pub async fn execute_task_with_progress(
        &self,
        task: SwarmTask,
        progress: &dyn SwarmProgressNotifier,
    ) -> Result<SwarmResult, SwarmError> {
        let started = Instant::now();
        let config = self.effective_config(task.config.as_ref());

        let selected = {
            let registry = self.registry.read().unwrap_or_else(|e| e.into_inner());
            let definition = registry.find_task(&task.name)?;
            ResponderSelector::select(
                definition,
                registry.profiles(),
                config.min_responders,
                config.max_responders,
            )?
        };

        let providers: Vec<Provider> = selected.iter().map(|p| p.provider.clone()).collect();
        info!(
            "Task '{}': dispatching to {} responders ({})",
            task.name,
            selected.len(),
            providers
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        progress.on_selection(&task.name, &providers);

        let outcomes = self
            .dispatcher
            .execute(&selected, &task.input, config.default_timeout(), progress)
            .await;

        let failed = failures(&outcomes);
        if !failed.is_empty() {
            warn!(
                "Task '{}': {} of {} responders failed: {}",
                task.name,
                failed.len(),
                outcomes.len(),
                failed
                    .iter()
                    .map(|f| format!("{{provider: {}, cause: {}}}", f.provider, f.cause))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            progress.on_responder_failures(&failed);
        }

        let answer = ConsensusAggregator::aggregate(&outcomes, config.agreement_threshold)?;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let result = SwarmResult::assemble(answer, &outcomes, selected.len(), elapsed_ms);

        info!(
            "Task '{}' finished via {} in {}ms (agreement {:.2}, reliability {:.2})",
            task.name, result.path, result.elapsed_ms, result.agreement, result.reliability
        );
        Ok(result)
    }

    fn effective_config(&self, patch: Option<&SwarmConfigOverride>) -> SwarmConfig {
        let base = self.config();
        match patch {
            Some(patch) if !patch.is_empty() => {
                let (config, issues) = patch.merged_over(&base).validated();
                log_issues(&issues);
                config
            }
            _ => base,
        }
    }
}

fn log_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        warn!("{}", issue);
    }
}
