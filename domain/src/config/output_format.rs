//! Output format value object

use serde::{Deserialize, Serialize};

/// How a swarm result should be printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Answer plus agreement, reliability and distribution (default)
    #[default]
    Full,
    /// Only the answer text
    Text,
    /// JSON output
    Json,
}
