//! Fact provider port
//!
//! Defines the interface every fact source adapter implements, and the raw
//! failure type those adapters return.

use async_trait::async_trait;
use facts_domain::{FactRequest, NumberFact, RawFailure};
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Unclassified failure raised by a provider.
///
/// The display strings are what the classifier inspects, so they keep the
/// status code and the words `timeout` / `network` where applicable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Empty response from API")]
    EmptyResponse,

    #[error("{operation} timeout after {}ms", .after.as_millis())]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("All API providers are unavailable")]
    AllUnavailable,
}

impl ProviderError {
    /// HTTP status, when the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ProviderError::Cancelled)
    }
}

impl From<&ProviderError> for RawFailure {
    fn from(err: &ProviderError) -> Self {
        RawFailure::error(err.to_string(), err.status())
    }
}

/// A source of number facts
///
/// Providers are stateless apart from static configuration. Every call is
/// bounded by the provider's own deadline and aborts early when `cancel`
/// fires.
#[async_trait]
pub trait FactProvider: Send + Sync {
    /// Display name used in logs and diagnostics
    fn name(&self) -> &str;

    /// Base URL or other identifier of the source
    fn base_url(&self) -> &str;

    /// Lightweight liveness probe. Never fails: any error means `false`.
    async fn is_available(&self, cancel: &CancellationToken) -> bool;

    /// Fetch and normalize a fact.
    async fn get_number_fact(
        &self,
        request: &FactRequest,
        cancel: &CancellationToken,
    ) -> Result<NumberFact, ProviderError>;
}
