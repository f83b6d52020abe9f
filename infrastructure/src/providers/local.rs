//! Offline provider backed by the built-in fact table

use async_trait::async_trait;
use facts_application::ports::fact_provider::{FactProvider, ProviderError};
use facts_domain::{FactRequest, NumberFact, local_fact};
use tokio_util::sync::CancellationToken;

/// Always available; never fails.
#[derive(Debug, Default)]
pub struct LocalFactsProvider;

impl LocalFactsProvider {
    pub const NAME: &'static str = "LocalFacts";
}

#[async_trait]
impl FactProvider for LocalFactsProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn base_url(&self) -> &str {
        "local"
    }

    async fn is_available(&self, _cancel: &CancellationToken) -> bool {
        true
    }

    async fn get_number_fact(
        &self,
        request: &FactRequest,
        _cancel: &CancellationToken,
    ) -> Result<NumberFact, ProviderError> {
        Ok(NumberFact::new(
            request.number(),
            request.category(),
            local_fact(request.category(), request.number()),
        ))
    }
}
