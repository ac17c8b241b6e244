//! CLI entrypoint for Model Swarm
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use std::sync::Arc;
use swarm_application::{NoProgress, SwarmOrchestrator, SwarmProgressNotifier};
use swarm_domain::{Severity, SwarmTask};
use swarm_infrastructure::{
    ConfigLoader, DEFAULT_SIMULATED_CONFIDENCE, RoutingGateway, SimulatedResponder,
};
use swarm_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Model Swarm");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    for issue in file_config.validate() {
        match issue.severity {
            Severity::Error => error!("{}", issue),
            Severity::Warning => warn!("{}", issue),
        }
    }

    if !file_config.output.color {
        colored::control::set_override(false);
    }

    let (task_name, input) = match (cli.task.clone(), cli.input.clone()) {
        (Some(task), Some(input)) => (task, input),
        _ => bail!("Both a task name and an input are required. Try: model-swarm text_generation \"Hello\""),
    };

    // === Dependency Injection ===
    // Responders without a real client are simulated
    let confidence = cli.confidence.unwrap_or(DEFAULT_SIMULATED_CONFIDENCE);
    let gateway = RoutingGateway::new(vec![])
        .with_default(Arc::new(SimulatedResponder::new().with_confidence(confidence)));

    let orchestrator = SwarmOrchestrator::new(Arc::new(gateway), file_config.to_swarm_config())
        .with_registry(file_config.to_registry());

    let format = cli
        .output
        .or(file_config.output.format.map(OutputFormat::from))
        .unwrap_or(OutputFormat::Full);

    // Print header
    if !cli.quiet && format != OutputFormat::Json {
        println!();
        println!("+============================================================+");
        println!("|           Model Swarm - Responder Consensus                |");
        println!("+============================================================+");
        println!();
        println!("Task:  {}", task_name);
        println!("Input: {}", input);
        println!();
    }

    let mut task = SwarmTask::new(task_name, input);
    task.config = cli.swarm_override();

    // Execute with or without progress reporting
    let show_progress = !cli.quiet && file_config.output.show_progress && format != OutputFormat::Json;
    let reporter = ProgressReporter::new();
    let progress: &dyn SwarmProgressNotifier = if show_progress {
        &reporter
    } else {
        &NoProgress
    };
    let result = orchestrator.execute_task_with_progress(task, progress).await?;

    // Output results
    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Text => ConsoleFormatter::format_text_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}
