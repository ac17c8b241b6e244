//! Responder profiles from TOML (`[[responders]]` array)

use swarm_domain::{
    ConfigIssue, ConfigIssueCode, Provider, ResponderClass, ResponderProfile, Severity,
};
use serde::{Deserialize, Serialize};

/// One responder profile from TOML
///
/// # Example
///
/// ```toml
/// [[responders]]
/// provider = "openai"
/// capabilities = ["reasoning", "creativity", "knowledge"]
/// cost_per_unit = 0.002
/// max_output_size = 4096
/// average_latency_ms = 1000
/// class = "large"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResponderProfile {
    /// Provider name; unknown names become custom providers
    pub provider: String,
    pub capabilities: Vec<String>,
    pub cost_per_unit: f64,
    pub max_output_size: u32,
    pub average_latency_ms: u64,
    /// "small", "medium" or "large" (case-insensitive)
    pub class: String,
}

impl Default for FileResponderProfile {
    fn default() -> Self {
        Self {
            provider: String::new(),
            capabilities: Vec::new(),
            cost_per_unit: 0.0,
            max_output_size: 4096,
            average_latency_ms: 1000,
            class: ResponderClass::Large.to_string(),
        }
    }
}

impl FileResponderProfile {
    /// Convert into a domain profile, collecting issues.
    ///
    /// An empty provider name drops the entry; an unknown class falls back
    /// to `large`.
    pub fn to_profile(&self, index: usize) -> (Option<ResponderProfile>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if self.provider.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyProviderName { index },
                message: format!("responders[{}]: provider name cannot be empty", index),
            });
            return (None, issues);
        }

        let (class, class_issues) = parse_class(&format!("responders[{}].class", index), &self.class);
        issues.extend(class_issues);

        let profile = ResponderProfile::new(Provider::from(self.provider.trim()), class)
            .with_capabilities(self.capabilities.iter().cloned())
            .with_cost_per_unit(self.cost_per_unit)
            .with_max_output_size(self.max_output_size)
            .with_average_latency_ms(self.average_latency_ms);

        (Some(profile), issues)
    }
}

/// Parse a responder class, warning and falling back to `large` on unknown values.
pub(super) fn parse_class(field: &str, value: &str) -> (ResponderClass, Vec<ConfigIssue>) {
    match value.parse::<ResponderClass>() {
        Ok(class) => (class, Vec::new()),
        Err(_) => (
            ResponderClass::Large,
            vec![ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidEnumValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    valid_values: vec![
                        "small".to_string(),
                        "medium".to_string(),
                        "large".to_string(),
                    ],
                },
                message: format!("{}: unknown value '{}', falling back to 'large'", field, value),
            }],
        ),
    }
}
