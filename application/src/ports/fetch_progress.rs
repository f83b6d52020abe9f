//! Fetch progress notification port
//!
//! Defines the interface for reporting progress while the provider chain is
//! walked for a request.

use super::fact_provider::ProviderError;
use facts_domain::{FactRequest, NumberFact};

/// Callback for progress updates during fact retrieval
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain lines, nothing).
pub trait FetchProgressNotifier: Send + Sync {
    /// Called before a provider is asked for a fact
    fn on_provider_attempt(&self, provider: &str, request: &FactRequest);

    /// Called when a provider returned a fact
    fn on_provider_succeeded(&self, provider: &str, fact: &NumberFact);

    /// Called when a provider's fetch failed
    fn on_provider_failed(&self, provider: &str, error: &ProviderError);

    /// Called when a provider's availability probe returned false
    fn on_provider_skipped(&self, _provider: &str) {}

    /// Called when a synthetic fallback fact replaces an error
    fn on_fallback_used(&self, _request: &FactRequest) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoFetchProgress;

impl FetchProgressNotifier for NoFetchProgress {
    fn on_provider_attempt(&self, _provider: &str, _request: &FactRequest) {}
    fn on_provider_succeeded(&self, _provider: &str, _fact: &NumberFact) {}
    fn on_provider_failed(&self, _provider: &str, _error: &ProviderError) {}
}
