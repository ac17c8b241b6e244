//! Provider value object naming a model backend

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Model backends that can answer a swarm task (Value Object)
///
/// A provider is the identity of a responder. Several profiles may share the
/// same provider, in which case their answers are counted together in the
/// responder distribution of a [`SwarmResult`](crate::SwarmResult).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
    LlamaCloud,
    Together,
    // Custom
    Custom(String),
}

impl Provider {
    /// Get the string identifier for this provider
    pub fn as_str(&self) -> &str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Google => "google",
            Provider::LlamaCloud => "llama_cloud",
            Provider::Together => "together",
            Provider::Custom(s) => s,
        }
    }

    /// Providers that ship with a built-in responder profile
    pub fn builtin() -> Vec<Provider> {
        vec![Provider::OpenAi, Provider::Anthropic]
    }

    /// Check if this is a provider without a dedicated variant
    pub fn is_custom(&self) -> bool {
        matches!(self, Provider::Custom(_))
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "openai" => Provider::OpenAi,
            "anthropic" => Provider::Anthropic,
            "google" => Provider::Google,
            "llama_cloud" | "llamacloud" => Provider::LlamaCloud,
            "together" => Provider::Together,
            _ => Provider::Custom(s.to_string()),
        })
    }
}

impl From<&str> for Provider {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(provider) => provider,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Provider {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Provider::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_roundtrip() {
        for provider in [
            Provider::OpenAi,
            Provider::Anthropic,
            Provider::Google,
            Provider::LlamaCloud,
            Provider::Together,
        ] {
            let parsed: Provider = provider.to_string().parse().unwrap();
            assert_eq!(provider, parsed);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Provider::from("OpenAI"), Provider::OpenAi);
        assert_eq!(Provider::from("LLAMACLOUD"), Provider::LlamaCloud);
    }

    #[test]
    fn test_custom_provider() {
        let provider = Provider::from("mistral");
        assert_eq!(provider, Provider::Custom("mistral".to_string()));
        assert!(provider.is_custom());
        assert_eq!(provider.to_string(), "mistral");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Provider::Anthropic).unwrap();
        assert_eq!(json, "\"anthropic\"");

        let back: Provider = serde_json::from_str("\"together\"").unwrap();
        assert_eq!(back, Provider::Together);
    }
}
