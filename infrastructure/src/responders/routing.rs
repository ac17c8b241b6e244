use super::ResponderAdapter;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use swarm_application::ports::responder_gateway::{GatewayError, ResponderGateway, ResponderReply};
use swarm_domain::{Provider, ResponderProfile};
use tracing::debug;

pub struct RoutingGateway {
    adapters: Vec<Arc<dyn ResponderAdapter>>,
    /// Provider to adapter index; the first adapter registered for a provider wins
    routes: HashMap<Provider, usize>,
    default_adapter: Option<Arc<dyn ResponderAdapter>>,
}

impl RoutingGateway {
    pub fn new(adapters: Vec<Arc<dyn ResponderAdapter>>) -> Self {
        let mut routes = HashMap::new();
        for (idx, adapter) in adapters.iter().enumerate() {
            if let Some(provider) = adapter.provider() {
                routes.entry(provider.clone()).or_insert(idx);
            }
        }

        Self {
            adapters,
            routes,
            default_adapter: None,
        }
    }

    /// Adapter used for providers without a dedicated one
    pub fn with_default(mut self, adapter: Arc<dyn ResponderAdapter>) -> Self {
        self.default_adapter = Some(adapter);
        self
    }

    /// Routing priority:
    ///  1. the adapter registered for the profile's provider
    ///  2. the default adapter
    ///  3. otherwise `GatewayError::ProviderNotAvailable`
    fn resolve_adapter(&self, provider: &Provider) -> Result<&dyn ResponderAdapter, GatewayError> {
        if let Some(&idx) = self.routes.get(provider) {
            return Ok(self.adapters[idx].as_ref());
        }

        self.default_adapter
            .as_deref()
            .ok_or_else(|| GatewayError::ProviderNotAvailable(provider.clone()))
    }
}

#[async_trait]
impl ResponderGateway for RoutingGateway {
    async fn invoke(
        &self,
        profile: &ResponderProfile,
        input: &str,
    ) -> Result<ResponderReply, GatewayError> {
        let adapter = self.resolve_adapter(&profile.provider)?;
        debug!("Routing {} to adapter", profile.provider);
        adapter.invoke(profile, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_domain::ResponderClass;

    // -- Mock ResponderAdapter -------------------------------------------------

    struct MockAdapter {
        provider: Option<Provider>,
        label: &'static str,
    }

    impl MockAdapter {
        fn new(provider: Provider, label: &'static str) -> Arc<dyn ResponderAdapter> {
            Arc::new(Self {
                provider: Some(provider),
                label,
            })
        }

        fn any(label: &'static str) -> Arc<dyn ResponderAdapter> {
            Arc::new(Self {
                provider: None,
                label,
            })
        }
    }

    #[async_trait]
    impl ResponderAdapter for MockAdapter {
        fn provider(&self) -> Option<&Provider> {
            self.provider.as_ref()
        }

        async fn invoke(
            &self,
            _profile: &ResponderProfile,
            _input: &str,
        ) -> Result<ResponderReply, GatewayError> {
            Ok(ResponderReply::new(self.label, 1.0))
        }
    }

    fn profile(provider: Provider) -> ResponderProfile {
        ResponderProfile::new(provider, ResponderClass::Large)
    }

    // -- resolve_adapter routing priority tests --------------------------------

    #[tokio::test]
    async fn routes_to_provider_adapter() {
        let gw = RoutingGateway::new(vec![
            MockAdapter::new(Provider::OpenAi, "openai"),
            MockAdapter::new(Provider::Anthropic, "anthropic"),
        ]);

        let reply = gw.invoke(&profile(Provider::Anthropic), "q").await.unwrap();
        assert_eq!(reply.text, "anthropic");
    }

    #[tokio::test]
    async fn first_adapter_for_provider_wins() {
        let gw = RoutingGateway::new(vec![
            MockAdapter::new(Provider::OpenAi, "first"),
            MockAdapter::new(Provider::OpenAi, "second"),
        ]);

        let reply = gw.invoke(&profile(Provider::OpenAi), "q").await.unwrap();
        assert_eq!(reply.text, "first");
    }

    #[tokio::test]
    async fn dedicated_adapter_beats_default() {
        let gw = RoutingGateway::new(vec![MockAdapter::new(Provider::Google, "google")])
            .with_default(MockAdapter::any("default"));

        let reply = gw.invoke(&profile(Provider::Google), "q").await.unwrap();
        assert_eq!(reply.text, "google");

        let reply = gw.invoke(&profile(Provider::Together), "q").await.unwrap();
        assert_eq!(reply.text, "default");
    }

    #[tokio::test]
    async fn unknown_provider_without_default_is_not_available() {
        let gw = RoutingGateway::new(vec![MockAdapter::new(Provider::OpenAi, "openai")]);

        let result = gw.invoke(&profile(Provider::from("mistral")), "q").await;
        assert_eq!(
            result,
            Err(GatewayError::ProviderNotAvailable(Provider::from("mistral")))
        );
    }

    #[test]
    fn catch_all_adapters_are_not_routed() {
        let gw = RoutingGateway::new(vec![MockAdapter::any("any")]);
        assert!(gw.routes.is_empty());
    }
}
