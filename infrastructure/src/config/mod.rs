//! Configuration file loading for model-swarm
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SWARM_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./swarm.toml` or `./.swarm.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/model-swarm/config.toml`
//! 5. Fallback: `~/.config/model-swarm/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileOutputConfig, FileOutputFormat, FileResponderProfile, FileSwarmConfig,
    FileTaskDefinition,
};
pub use loader::{ConfigLoadError, ConfigLoader};
