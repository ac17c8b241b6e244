//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use swarm_domain::SwarmConfigOverride;

/// Output format for swarm results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer with agreement, reliability and responder distribution
    Full,
    /// Only the answer text
    Text,
    /// JSON output
    Json,
}

impl From<swarm_domain::OutputFormat> for OutputFormat {
    fn from(format: swarm_domain::OutputFormat) -> Self {
        match format {
            swarm_domain::OutputFormat::Full => OutputFormat::Full,
            swarm_domain::OutputFormat::Text => OutputFormat::Text,
            swarm_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for model-swarm
#[derive(Parser, Debug)]
#[command(name = "model-swarm")]
#[command(author, version, about = "Model Swarm - Ask several responders and reconcile their answers")]
#[command(long_about = r#"
Model Swarm sends one input to several AI responders at once and reconciles
their answers into a single result.

The process:
1. Selection: The cheapest and fastest responders able to run the task are chosen
2. Dispatch: Every selected responder is asked in parallel, each with its own timeout
3. Consensus: Similar answers are grouped; the best group wins if enough responders agree,
   otherwise the single most confident answer is used

Configuration files are loaded from (in priority order):
1. SWARM_* environment variables
2. --config <path>     Explicit config file
3. ./swarm.toml        Project-level config
4. ~/.config/model-swarm/config.toml   Global config

Example:
  model-swarm text_generation "Explain ownership in Rust"
  model-swarm --min-responders 2 --threshold 0.8 text_generation "What is a monad?"
  model-swarm -o json analysis "Summarize the release notes"
"#)]
pub struct Cli {
    /// Name of a registered task (e.g. text_generation)
    pub task: Option<String>,

    /// Input handed to every selected responder
    pub input: Option<String>,

    /// Fewest responders to dispatch to
    #[arg(long, value_name = "N")]
    pub min_responders: Option<usize>,

    /// Most responders to dispatch to
    #[arg(long, value_name = "N")]
    pub max_responders: Option<usize>,

    /// Share of successful responders that must agree, in (0, 1]
    #[arg(long, value_name = "RATIO")]
    pub threshold: Option<f64>,

    /// Per-responder timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Confidence reported by the simulated responders
    #[arg(long, value_name = "RATIO")]
    pub confidence: Option<f64>,

    /// Output format (defaults to the config file setting, then full)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Per-call settings given on the command line
    pub fn swarm_override(&self) -> Option<SwarmConfigOverride> {
        let overrides = SwarmConfigOverride {
            min_responders: self.min_responders,
            max_responders: self.max_responders,
            agreement_threshold: self.threshold,
            default_timeout_ms: self.timeout_ms,
        };
        (!overrides.is_empty()).then_some(overrides)
    }
}
