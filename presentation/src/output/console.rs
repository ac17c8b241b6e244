//! Console output formatter for swarm results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use swarm_domain::{ConsensusPath, SwarmResult};

/// Formats swarm results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete swarm result
    pub fn format(result: &SwarmResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Swarm Results"));
        output.push('\n');

        output.push_str(&Self::section_header("Result"));
        output.push_str(&format!("\n{}\n", result.text));

        output.push_str(&Self::section_header("Metrics"));
        let path = match result.path {
            ConsensusPath::Consensus => "consensus".green().bold(),
            ConsensusPath::Fallback => "fallback (most confident answer)".yellow().bold(),
        };
        output.push_str(&format!("{} {}\n", "Decided by: ".cyan().bold(), path));
        output.push_str(&format!(
            "{} {}\n",
            "Confidence: ".cyan().bold(),
            Self::percent(result.confidence)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Agreement:  ".cyan().bold(),
            Self::percent(result.agreement)
        ));
        output.push_str(&format!(
            "{} {} ({}/{} responders answered)\n",
            "Reliability:".cyan().bold(),
            Self::percent(result.reliability),
            result.successful_responders(),
            result.selected
        ));

        output.push_str(&format!("\n{}\n", "Responder Distribution:".cyan().bold()));
        for (provider, count) in &result.responder_distribution {
            let noun = if *count == 1 { "response" } else { "responses" };
            output.push_str(&format!("  {}: {} {}\n", provider, count, noun));
        }

        output.push_str(&format!(
            "\n{} {}ms\n",
            "Execution Time:".dimmed(),
            result.elapsed_ms
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &SwarmResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the answer only (concise output)
    pub fn format_text_only(result: &SwarmResult) -> String {
        let mut output = result.text.clone();
        output.push('\n');
        output
    }

    /// `0.8567` → `85.67%`
    pub fn percent(ratio: f64) -> String {
        format!("{:.2}%", ratio * 100.0)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &SwarmResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &SwarmResult) -> String {
        Self::format_json(result)
    }

    fn format_text_only(&self, result: &SwarmResult) -> String {
        Self::format_text_only(result)
    }
}
