//! Provider orchestrator
//!
//! Walks the provider list in priority order until one source returns a
//! fact. Probing and fetching are strictly sequential so that a satisfied
//! request never causes extra network calls.

use crate::ports::fact_provider::{FactProvider, ProviderError};
use crate::ports::fetch_logger::{FetchEvent, FetchLogger, NoFetchLogger};
use crate::ports::fetch_progress::{FetchProgressNotifier, NoFetchProgress};
use facts_domain::{FactRequest, NumberFact};
use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Ordered, immutable chain of fact providers.
pub struct FactOrchestrator {
    providers: Vec<Arc<dyn FactProvider>>,
    fetch_logger: Arc<dyn FetchLogger>,
}

impl FactOrchestrator {
    pub fn new(providers: Vec<Arc<dyn FactProvider>>) -> Self {
        Self {
            providers,
            fetch_logger: Arc::new(NoFetchLogger),
        }
    }

    /// Create with a fetch logger.
    pub fn with_fetch_logger(mut self, logger: Arc<dyn FetchLogger>) -> Self {
        self.fetch_logger = logger;
        self
    }

    /// Provider names in priority order
    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    pub async fn get_number_fact(
        &self,
        request: &FactRequest,
        cancel: &CancellationToken,
    ) -> Result<NumberFact, ProviderError> {
        self.get_number_fact_with_progress(request, cancel, &NoFetchProgress)
            .await
    }

    /// Ask each provider in turn.
    ///
    /// Unavailable providers are skipped without a fetch. The first success
    /// is returned immediately. When the chain is exhausted the most recent
    /// failure is returned unchanged, or [`ProviderError::AllUnavailable`]
    /// if no provider was ever asked.
    pub async fn get_number_fact_with_progress(
        &self,
        request: &FactRequest,
        cancel: &CancellationToken,
        progress: &dyn FetchProgressNotifier,
    ) -> Result<NumberFact, ProviderError> {
        let mut last_error: Option<ProviderError> = None;

        for provider in &self.providers {
            if cancel.is_cancelled() {
                return Err(ProviderError::Cancelled);
            }

            let name = provider.name();

            if !provider.is_available(cancel).await {
                info!("Provider {} is not available", name);
                progress.on_provider_skipped(name);
                self.fetch_logger.log(FetchEvent::new(
                    "provider_skipped",
                    json!({ "provider": name, "request": request.to_string() }),
                ));
                continue;
            }

            progress.on_provider_attempt(name, request);
            match provider.get_number_fact(request, cancel).await {
                Ok(fact) => {
                    info!("Successfully got fact from {}", name);
                    debug!("{}: {}", name, fact.preview(80));
                    progress.on_provider_succeeded(name, &fact);
                    self.fetch_logger.log(FetchEvent::new(
                        "fact_resolved",
                        json!({
                            "provider": name,
                            "request": request.to_string(),
                            "number": fact.number,
                        }),
                    ));
                    return Ok(fact);
                }
                Err(err) => {
                    warn!("Error with provider {}: {}", name, err);
                    progress.on_provider_failed(name, &err);
                    self.fetch_logger.log(FetchEvent::new(
                        "provider_failed",
                        json!({
                            "provider": name,
                            "request": request.to_string(),
                            "error": err.to_string(),
                        }),
                    ));
                    if err.is_cancelled() {
                        return Err(err);
                    }
                    last_error = Some(err);
                }
            }
        }

        let err = last_error.unwrap_or(ProviderError::AllUnavailable);
        self.fetch_logger.log(FetchEvent::new(
            "chain_exhausted",
            json!({ "request": request.to_string(), "error": err.to_string() }),
        ));
        Err(err)
    }

    /// Names of providers whose probe currently succeeds, in list order.
    ///
    /// Probes run concurrently; this never alters the retrieval order.
    pub async fn available_providers(&self, cancel: &CancellationToken) -> Vec<String> {
        let probes = self.providers.iter().map(|p| p.is_available(cancel));
        let results = join_all(probes).await;

        self.providers
            .iter()
            .zip(results)
            .filter(|(_, available)| *available)
            .map(|(p, _)| p.name().to_string())
            .collect()
    }
}
