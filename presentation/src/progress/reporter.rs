//! Progress reporting for swarm execution

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use swarm_application::ports::progress::SwarmProgressNotifier;
use swarm_domain::{Provider, ResponderFailure};

/// Reports progress during swarm execution with a progress bar
pub struct ProgressReporter {
    multi: MultiProgress,
    dispatch_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            dispatch_bar: Mutex::new(None),
        }
    }

    fn dispatch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn provider_list(providers: &[Provider]) -> String {
        providers
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SwarmProgressNotifier for ProgressReporter {
    fn on_selection(&self, task: &str, selected: &[Provider]) {
        let _ = self.multi.println(format!(
            "{} {} -> {}",
            "Task".cyan().bold(),
            task.bold(),
            Self::provider_list(selected)
        ));
    }

    fn on_dispatch_start(&self, total: usize) {
        let pb = self.multi.add(ProgressBar::new(total as u64));
        pb.set_style(Self::dispatch_style());
        pb.set_prefix("Responders");
        pb.set_message("Waiting...");

        *self.dispatch_bar.lock().unwrap_or_else(|e| e.into_inner()) = Some(pb);
    }

    fn on_responder_complete(&self, provider: &Provider, success: bool) {
        if let Some(pb) = self
            .dispatch_bar
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), provider)
            } else {
                format!("{} {}", "x".red(), provider)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_dispatch_complete(&self) {
        if let Some(pb) = self
            .dispatch_bar
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            pb.finish_with_message(format!("{}", "all responders finished".green()));
        }
    }

    fn on_responder_failures(&self, failures: &[&ResponderFailure]) {
        for failure in failures {
            let _ = self.multi.println(format!(
                "  {} {}: {}",
                "x".red(),
                failure.provider,
                failure.cause
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SwarmProgressNotifier for SimpleProgress {
    fn on_selection(&self, task: &str, selected: &[Provider]) {
        println!(
            "{} {} ({} responders: {})",
            "->".cyan(),
            task.bold(),
            selected.len(),
            ProgressReporter::provider_list(selected)
        );
    }

    fn on_responder_complete(&self, provider: &Provider, success: bool) {
        if success {
            println!("  {} {}", "v".green(), provider);
        } else {
            println!("  {} {} (failed)", "x".red(), provider);
        }
    }

    fn on_dispatch_complete(&self) {
        println!();
    }

    fn on_responder_failures(&self, failures: &[&ResponderFailure]) {
        for failure in failures {
            println!("  {} {}: {}", "!".yellow(), failure.provider, failure.cause);
        }
    }
}
