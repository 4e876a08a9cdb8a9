//! Progress reporting while the model answers

use bggovai_application::ports::progress::AdvisorProgress;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

const WAITING_MESSAGE: &str = "BGGovAI подготвя отговор…";

/// Spinner shown for the duration of one backend call
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {prefix:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisorProgress for ProgressReporter {
    fn on_answer_start(&self, model: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(WAITING_MESSAGE);
        pb.set_prefix(format!("({})", model));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_answer_complete(&self, _success: bool) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl AdvisorProgress for SimpleProgress {
    fn on_answer_start(&self, model: &str) {
        eprintln!("{} {} ({})", "->".cyan(), WAITING_MESSAGE, model);
    }

    fn on_answer_complete(&self, success: bool) {
        if success {
            eprintln!("  {} готово", "v".green());
        } else {
            eprintln!("  {} без отговор от модела", "x".red());
        }
    }

    fn on_cache_hit(&self) {
        eprintln!("{} отговор от кеша", "->".cyan());
    }
}
