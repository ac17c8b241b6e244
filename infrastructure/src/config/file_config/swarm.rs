//! Swarm execution settings from TOML (`[swarm]` section)
//!
//! Every field is optional; unset fields keep the built-in defaults.
//!
//! ```toml
//! [swarm]
//! min_responders = 2
//! max_responders = 5
//! agreement_threshold = 0.6
//! default_timeout_ms = 30000
//! ```

// Re-export the domain override type; it already has the file layout
pub use swarm_domain::SwarmConfigOverride as FileSwarmConfig;

#[cfg(test)]
mod tests {
    use super::super::FileConfig;

    #[test]
    fn test_partial_swarm_section() {
        let toml_str = r#"
[swarm]
agreement_threshold = 0.75
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.swarm.agreement_threshold, Some(0.75));
        assert!(config.swarm.min_responders.is_none());

        let swarm = config.to_swarm_config();
        assert_eq!(swarm.agreement_threshold, 0.75);
        assert_eq!(swarm.min_responders, 2);
    }

    #[test]
    fn test_out_of_range_values_are_kept_for_the_orchestrator_to_clamp() {
        let toml_str = r#"
[swarm]
default_timeout_ms = 10
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.to_swarm_config().default_timeout_ms, 10);
    }
}
