//! Dispatch use case
//!
//! Sends one input to every selected responder at once and collects
//! exactly one outcome per responder.

use crate::ports::progress::SwarmProgressNotifier;
use crate::ports::responder_gateway::{GatewayError, ResponderGateway, ResponderReply};
use std::sync::Arc;
use std::time::Duration;
use swarm_domain::{FailureCause, ResponderOutcome, ResponderProfile};
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// How a single invocation ended, before it becomes an outcome
enum Invocation {
    Replied(ResponderReply),
    Failed(GatewayError),
    TimedOut,
}

/// Concurrent fan-out to responders with a per-responder timeout
pub struct DispatchExecutor<G: ResponderGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ResponderGateway + 'static> DispatchExecutor<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Invoke every profile in `selected` with `input`.
    ///
    /// All invocations start together and each races its own `timeout`.
    /// A timed-out invocation is dropped, not awaited. Returns after every
    /// responder has produced an outcome, in completion order.
    pub async fn execute(
        &self,
        selected: &[ResponderProfile],
        input: &str,
        timeout: Duration,
        progress: &dyn SwarmProgressNotifier,
    ) -> Vec<ResponderOutcome> {
        progress.on_dispatch_start(selected.len());

        let mut join_set = JoinSet::new();

        for (index, profile) in selected.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let profile = profile.clone();
            let input = input.to_string();

            join_set.spawn(async move {
                let invocation =
                    match tokio::time::timeout(timeout, gateway.invoke(&profile, &input)).await {
                        Ok(Ok(reply)) => Invocation::Replied(reply),
                        Ok(Err(e)) => Invocation::Failed(e),
                        Err(_) => Invocation::TimedOut,
                    };
                (index, invocation)
            });
        }

        let timeout_ms = timeout.as_millis() as u64;
        let mut finished = vec![false; selected.len()];
        let mut outcomes = Vec::with_capacity(selected.len());

        while let Some(result) = join_set.join_next().await {
            let (index, invocation) = match result {
                Ok(done) => done,
                Err(e) => {
                    // Identity is recovered after the barrier
                    warn!("Responder task join error: {}", e);
                    continue;
                }
            };
            finished[index] = true;
            let provider = selected[index].provider.clone();

            let outcome = match invocation {
                Invocation::Replied(reply) => {
                    debug!("Responder {} answered", provider);
                    ResponderOutcome::success(provider, reply.text, reply.confidence)
                }
                Invocation::Failed(e) => {
                    debug!("Responder {} failed: {}", provider, e);
                    ResponderOutcome::invocation_error(provider, e.to_string())
                }
                Invocation::TimedOut => {
                    debug!("Responder {} timed out after {}ms", provider, timeout_ms);
                    ResponderOutcome::timeout(provider, timeout_ms)
                }
            };

            progress.on_responder_complete(outcome.provider(), outcome.is_success());
            outcomes.push(outcome);
        }

        for (index, _) in finished.iter().enumerate().filter(|(_, done)| !**done) {
            let outcome =
                ResponderOutcome::failure(selected[index].provider.clone(), FailureCause::Aborted);
            progress.on_responder_complete(outcome.provider(), false);
            outcomes.push(outcome);
        }

        progress.on_dispatch_complete();
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use swarm_domain::{Provider, ResponderClass};
    use tokio::time::Instant;

    // ==================== Test Mocks ====================

    #[derive(Clone)]
    enum Behavior {
        Reply { delay_ms: u64, text: String, confidence: f64 },
        Fail { delay_ms: u64 },
        Panic,
    }

    struct ScriptedGateway {
        behaviors: HashMap<Provider, Behavior>,
    }

    impl ScriptedGateway {
        fn new(behaviors: Vec<(&str, Behavior)>) -> Self {
            Self {
                behaviors: behaviors
                    .into_iter()
                    .map(|(name, b)| (Provider::from(name), b))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl ResponderGateway for ScriptedGateway {
        async fn invoke(
            &self,
            profile: &ResponderProfile,
            _input: &str,
        ) -> Result<ResponderReply, GatewayError> {
            match self.behaviors.get(&profile.provider).cloned() {
                Some(Behavior::Reply {
                    delay_ms,
                    text,
                    confidence,
                }) => {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    Ok(ResponderReply::new(text, confidence))
                }
                Some(Behavior::Fail { delay_ms }) => {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    Err(GatewayError::RequestFailed("boom".to_string()))
                }
                Some(Behavior::Panic) => panic!("responder crashed"),
                None => Err(GatewayError::ProviderNotAvailable(profile.provider.clone())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl SwarmProgressNotifier for RecordingProgress {
        fn on_dispatch_start(&self, total: usize) {
            self.events.lock().unwrap().push(format!("start:{}", total));
        }

        fn on_responder_complete(&self, provider: &Provider, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{}:{}", provider, success));
        }

        fn on_dispatch_complete(&self) {
            self.events.lock().unwrap().push("complete".to_string());
        }
    }

    fn reply(delay_ms: u64, text: &str) -> Behavior {
        Behavior::Reply {
            delay_ms,
            text: text.to_string(),
            confidence: 0.9,
        }
    }

    fn profiles(names: &[&str]) -> Vec<ResponderProfile> {
        names
            .iter()
            .map(|n| ResponderProfile::new(Provider::from(*n), ResponderClass::Large))
            .collect()
    }

    fn providers(outcomes: &[ResponderOutcome]) -> Vec<String> {
        outcomes.iter().map(|o| o.provider().to_string()).collect()
    }

    // ==================== Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_outcomes_in_completion_order() {
        let gateway = ScriptedGateway::new(vec![
            ("a", reply(300, "from a")),
            ("b", reply(100, "from b")),
            ("c", reply(200, "from c")),
        ]);
        let executor = DispatchExecutor::new(Arc::new(gateway));

        let outcomes = executor
            .execute(
                &profiles(&["a", "b", "c"]),
                "q",
                Duration::from_secs(5),
                &NoProgress,
            )
            .await;

        assert_eq!(providers(&outcomes), vec!["b", "c", "a"]);
        assert!(outcomes.iter().all(|o| o.is_success()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_responder_times_out_without_delaying_others() {
        let gateway = ScriptedGateway::new(vec![
            ("fast", reply(100, "Paris")),
            ("slow", reply(60_000, "Paris")),
            ("medium", reply(500, "Paris")),
        ]);
        let executor = DispatchExecutor::new(Arc::new(gateway));

        let started = Instant::now();
        let outcomes = executor
            .execute(
                &profiles(&["fast", "slow", "medium"]),
                "q",
                Duration::from_millis(1000),
                &NoProgress,
            )
            .await;
        let elapsed = started.elapsed();

        assert_eq!(outcomes.len(), 3);
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed < Duration::from_millis(2000));

        let slow = outcomes
            .iter()
            .find(|o| o.provider() == &Provider::from("slow"))
            .unwrap();
        assert_eq!(
            slow.as_failure().unwrap().cause,
            FailureCause::TimeoutExceeded { timeout_ms: 1000 }
        );
        assert_eq!(outcomes.iter().filter(|o| o.is_success()).count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gateway_error_becomes_invocation_failure() {
        let gateway = ScriptedGateway::new(vec![
            ("ok", reply(10, "fine")),
            ("bad", Behavior::Fail { delay_ms: 5 }),
        ]);
        let executor = DispatchExecutor::new(Arc::new(gateway));

        let outcomes = executor
            .execute(
                &profiles(&["ok", "bad"]),
                "q",
                Duration::from_secs(1),
                &NoProgress,
            )
            .await;

        assert_eq!(providers(&outcomes), vec!["bad", "ok"]);
        match &outcomes[0].as_failure().unwrap().cause {
            FailureCause::InvocationError(cause) => assert!(cause.contains("boom")),
            other => panic!("unexpected cause: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_responder_is_recorded_as_aborted() {
        let gateway = ScriptedGateway::new(vec![
            ("ok", reply(10, "fine")),
            ("crash", Behavior::Panic),
        ]);
        let executor = DispatchExecutor::new(Arc::new(gateway));

        let outcomes = executor
            .execute(
                &profiles(&["crash", "ok"]),
                "q",
                Duration::from_secs(1),
                &NoProgress,
            )
            .await;

        assert_eq!(outcomes.len(), 2);
        let crashed = outcomes
            .iter()
            .find(|o| o.provider() == &Provider::from("crash"))
            .unwrap();
        assert_eq!(crashed.as_failure().unwrap().cause, FailureCause::Aborted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_events() {
        let gateway = ScriptedGateway::new(vec![
            ("a", reply(20, "x")),
            ("b", Behavior::Fail { delay_ms: 10 }),
        ]);
        let executor = DispatchExecutor::new(Arc::new(gateway));
        let progress = RecordingProgress::default();

        executor
            .execute(&profiles(&["a", "b"]), "q", Duration::from_secs(1), &progress)
            .await;

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(events, vec!["start:2", "b:false", "a:true", "complete"]);
    }

    #[tokio::test]
    async fn test_empty_selection_returns_no_outcomes() {
        let executor = DispatchExecutor::new(Arc::new(ScriptedGateway::new(vec![])));
        let outcomes = executor
            .execute(&[], "q", Duration::from_secs(1), &NoProgress)
            .await;
        assert!(outcomes.is_empty());
    }
}
