//! Fact service: the boundary between retrieval and its callers.
//!
//! The orchestrator returns raw provider failures; this is the single place
//! where they are classified.

use super::orchestrator::FactOrchestrator;
use crate::ports::fetch_progress::{FetchProgressNotifier, NoFetchProgress};
use facts_domain::{ClassifiedError, FactRequest, NumberFact, RawFailure, classify};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Classifying facade over [`FactOrchestrator`].
#[derive(Clone)]
pub struct FactService {
    orchestrator: Arc<FactOrchestrator>,
}

impl FactService {
    pub fn new(orchestrator: Arc<FactOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub async fn get_number_fact(
        &self,
        request: &FactRequest,
        cancel: &CancellationToken,
    ) -> Result<NumberFact, ClassifiedError> {
        self.get_number_fact_with_progress(request, cancel, &NoFetchProgress)
            .await
    }

    pub async fn get_number_fact_with_progress(
        &self,
        request: &FactRequest,
        cancel: &CancellationToken,
        progress: &dyn FetchProgressNotifier,
    ) -> Result<NumberFact, ClassifiedError> {
        self.orchestrator
            .get_number_fact_with_progress(request, cancel, progress)
            .await
            .map_err(|err| {
                let classified = classify(&RawFailure::from(&err));
                debug!("{} classified as {}", err, classified.kind);
                classified
            })
    }

    /// Names of currently reachable providers (diagnostics only)
    pub async fn available_providers(&self, cancel: &CancellationToken) -> Vec<String> {
        self.orchestrator.available_providers(cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::fact_provider::{FactProvider, ProviderError};
    use crate::use_cases::orchestrator::tests::MockProvider;
    use facts_domain::{ErrorKind, FactCategory};

    fn service(providers: Vec<MockProvider>) -> FactService {
        let providers = providers
            .into_iter()
            .map(|p| Arc::new(p) as Arc<dyn FactProvider>)
            .collect();
        FactService::new(Arc::new(FactOrchestrator::new(providers)))
    }

    async fn kind_for(err: ProviderError) -> ErrorKind {
        service(vec![MockProvider::failing("only", err)])
            .get_number_fact(
                &FactRequest::new("42", FactCategory::Trivia),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err()
            .kind
    }

    #[tokio::test]
    async fn success_passes_through() {
        let fact = NumberFact::new("42", FactCategory::Trivia, "answer");
        let result = service(vec![MockProvider::ok("only", fact.clone())])
            .get_number_fact(
                &FactRequest::new("42", FactCategory::Trivia),
                &CancellationToken::new(),
            )
            .await
            .unwrap();
        assert_eq!(result, fact);
    }

    #[tokio::test]
    async fn provider_failures_are_classified() {
        assert_eq!(
            kind_for(ProviderError::Http {
                status: 404,
                reason: "Not Found".into()
            })
            .await,
            ErrorKind::NotFound
        );
        assert_eq!(
            kind_for(ProviderError::Http {
                status: 502,
                reason: "Bad Gateway".into()
            })
            .await,
            ErrorKind::ServerError
        );
        assert_eq!(
            kind_for(ProviderError::Timeout {
                operation: "fetch",
                after: std::time::Duration::from_secs(10)
            })
            .await,
            ErrorKind::Timeout
        );
        assert_eq!(
            kind_for(ProviderError::Network("connection refused".into())).await,
            ErrorKind::NetworkError
        );
        assert_eq!(kind_for(ProviderError::EmptyResponse).await, ErrorKind::ApiError);
    }

    #[tokio::test]
    async fn exhausted_chain_is_api_error_with_message() {
        let err = service(vec![MockProvider::unavailable("a")])
            .get_number_fact(
                &FactRequest::new("1", FactCategory::Date),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ApiError);
        assert_eq!(err.message, "All API providers are unavailable");
    }

    #[tokio::test]
    async fn http_status_is_preserved() {
        let err = service(vec![MockProvider::failing(
            "only",
            ProviderError::Http {
                status: 503,
                reason: "Service Unavailable".into(),
            },
        )])
        .get_number_fact(
            &FactRequest::new("1", FactCategory::Math),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, Some(503));
        assert_eq!(err.details.as_deref(), Some("HTTP 503: Service Unavailable"));
    }
}
