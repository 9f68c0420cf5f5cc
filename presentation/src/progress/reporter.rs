//! Progress reporting for completion requests

use chatsutra_application::{CompletionProgress, GatewayError};
use chatsutra_domain::ChatModel;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a "Thinking..." spinner while a completion is pending
///
/// Retry notices are printed above the spinner so they stay visible after
/// it is cleared.
pub struct CompletionReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CompletionReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for CompletionReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionProgress for CompletionReporter {
    fn on_attempt_start(&self, model: ChatModel, attempt: u32, max_attempts: u32) {
        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };
        let pb = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        if attempt == 1 {
            pb.set_message(format!("Thinking... {}", model.to_string().dimmed()));
        } else {
            pb.set_message(format!("Thinking... (attempt {}/{})", attempt, max_attempts));
        }
    }

    fn on_retry(
        &self,
        attempt: u32,
        max_attempts: u32,
        _delay: Option<Duration>,
        _error: &GatewayError,
    ) {
        self.with_spinner(|pb| pb.println(retry_notice(attempt, max_attempts)));
    }

    fn on_unavailable(&self, _attempts: u32) {}

    fn on_finished(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl CompletionProgress for SimpleProgress {
    fn on_retry(
        &self,
        attempt: u32,
        max_attempts: u32,
        _delay: Option<Duration>,
        _error: &GatewayError,
    ) {
        eprintln!("{}", retry_notice(attempt, max_attempts));
    }

    fn on_unavailable(&self, _attempts: u32) {}
}

fn retry_notice(attempt: u32, max_attempts: u32) -> String {
    format!(
        "! Groq service unavailable, retrying... ({}/{})",
        attempt, max_attempts
    )
    .yellow()
    .to_string()
}
