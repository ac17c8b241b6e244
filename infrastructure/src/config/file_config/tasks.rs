//! Task definitions from TOML (`[[tasks]]` array)

use super::responders::parse_class;
use serde::{Deserialize, Serialize};
use swarm_domain::{ConfigIssue, ConfigIssueCode, ResponderClass, Severity, TaskDefinition};

/// One task definition from TOML
///
/// # Example
///
/// ```toml
/// [[tasks]]
/// name = "analysis"
/// description = "Analyze a document"
/// required_capabilities = ["reasoning", "analysis"]
/// class = "large"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTaskDefinition {
    pub name: String,
    pub description: Option<String>,
    pub required_capabilities: Vec<String>,
    pub class: String,
}

impl Default for FileTaskDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            required_capabilities: Vec::new(),
            class: ResponderClass::Large.to_string(),
        }
    }
}

impl FileTaskDefinition {
    /// Convert into a domain task definition, collecting issues.
    pub fn to_definition(&self, index: usize) -> (Option<TaskDefinition>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyTaskName { index },
                message: format!("tasks[{}]: task name cannot be empty", index),
            });
            return (None, issues);
        }

        let (class, class_issues) = parse_class(&format!("tasks[{}].class", index), &self.class);
        issues.extend(class_issues);

        let mut definition = TaskDefinition::new(self.name.trim(), class)
            .with_required_capabilities(self.required_capabilities.iter().cloned());
        if let Some(description) = &self.description {
            definition = definition.with_description(description.clone());
        }

        (Some(definition), issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_task() {
        let toml_str = r#"
[[tasks]]
name = "analysis"
required_capabilities = ["reasoning", "analysis"]
class = "Large"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let (definition, issues) = config.tasks[0].to_definition(0);
        let definition = definition.unwrap();

        assert!(issues.is_empty());
        assert_eq!(definition.name, "analysis");
        assert_eq!(definition.class, ResponderClass::Large);
        assert_eq!(definition.required_capabilities.len(), 2);
        assert!(definition.description.is_none());
    }

    #[test]
    fn test_empty_name_is_dropped() {
        let entry = FileTaskDefinition::default();
        let (definition, issues) = entry.to_definition(3);
        assert!(definition.is_none());
        assert_eq!(issues[0].code, ConfigIssueCode::EmptyTaskName { index: 3 });
    }
}
