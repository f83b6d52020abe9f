//! Progress reporting while the provider chain is walked

use colored::Colorize;
use facts_application::ports::fact_provider::ProviderError;
use facts_application::ports::fetch_progress::FetchProgressNotifier;
use facts_domain::{FactRequest, NumberFact};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner on stderr
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
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        let mut guard = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        let spinner = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        f(spinner);
    }

    /// Clear the spinner once the query has settled.
    pub fn finish(&self) {
        if let Some(pb) = self
            .spinner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchProgressNotifier for ProgressReporter {
    fn on_provider_attempt(&self, provider: &str, request: &FactRequest) {
        self.with_spinner(|pb| {
            pb.set_prefix(request.to_string());
            pb.set_message(format!("asking {}...", provider));
        });
    }

    fn on_provider_succeeded(&self, provider: &str, _fact: &NumberFact) {
        self.with_spinner(|pb| pb.set_message(format!("{} {}", "v".green(), provider)));
        self.finish();
    }

    fn on_provider_failed(&self, provider: &str, error: &ProviderError) {
        self.with_spinner(|pb| pb.println(format!("  {} {}: {}", "x".red(), provider, error)));
    }

    fn on_provider_skipped(&self, provider: &str) {
        self.with_spinner(|pb| {
            pb.println(format!("  {} {} unreachable", "-".dimmed(), provider))
        });
    }

    fn on_fallback_used(&self, _request: &FactRequest) {
        self.with_spinner(|pb| {
            pb.println(format!(
                "  {} all sources failed, showing a generic fact",
                "!".yellow()
            ))
        });
        self.finish();
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl FetchProgressNotifier for SimpleProgress {
    fn on_provider_attempt(&self, provider: &str, request: &FactRequest) {
        eprintln!("{} {} via {}", "->".cyan(), request, provider.bold());
    }

    fn on_provider_succeeded(&self, provider: &str, _fact: &NumberFact) {
        eprintln!("  {} {}", "v".green(), provider);
    }

    fn on_provider_failed(&self, provider: &str, error: &ProviderError) {
        eprintln!("  {} {} ({})", "x".red(), provider, error);
    }

    fn on_provider_skipped(&self, provider: &str) {
        eprintln!("  {} {} unreachable", "-".dimmed(), provider);
    }

    fn on_fallback_used(&self, _request: &FactRequest) {
        eprintln!("  {} using a generic fact", "!".yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facts_domain::FactCategory;

    #[test]
    fn finish_without_spinner_is_noop() {
        ProgressReporter::new().finish();
    }

    #[test]
    fn spinner_is_cleared_after_success() {
        let reporter = ProgressReporter::new();
        let request = FactRequest::new("42", FactCategory::Trivia);

        reporter.on_provider_attempt("NumbersAPI", &request);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_provider_succeeded(
            "NumbersAPI",
            &NumberFact::new("42", FactCategory::Trivia, "x"),
        );
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
