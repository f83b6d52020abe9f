//! Fact source adapters
//!
//! Two remote sources ([`NumbersApiProvider`], [`MathToolsProvider`]) and the
//! offline [`LocalFactsProvider`], assembled into a priority chain by
//! [`build_provider_chain`].

mod http;
mod local;
mod math_tools;
mod numbers_api;

#[cfg(test)]
pub(crate) mod stub_server;

pub use http::HttpSettings;
pub use local::LocalFactsProvider;
pub use math_tools::MathToolsProvider;
pub use numbers_api::NumbersApiProvider;

use facts_application::ports::fact_provider::FactProvider;
use facts_domain::{ProviderConfig, ProviderId};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ProviderBuildError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Build the shared HTTP client.
///
/// Connection pooling is shared by every remote provider; deadlines are
/// applied per call, not on the client.
pub fn build_http_client(config: &ProviderConfig) -> Result<reqwest::Client, ProviderBuildError> {
    Ok(reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .build()?)
}

/// Instantiate the providers named in `config.order`, in that order.
pub fn build_provider_chain(
    config: &ProviderConfig,
    client: reqwest::Client,
) -> Vec<Arc<dyn FactProvider>> {
    let settings = HttpSettings::from(config);

    config
        .order
        .iter()
        .map(|id| -> Arc<dyn FactProvider> {
            debug!("Adding provider {}", id);
            match id {
                ProviderId::NumbersApi => Arc::new(NumbersApiProvider::new(
                    client.clone(),
                    config.numbers_api.base_url.clone(),
                    settings.clone(),
                )),
                ProviderId::MathTools => Arc::new(MathToolsProvider::new(
                    client.clone(),
                    config.math_tools.clone(),
                    settings.clone(),
                )),
                ProviderId::Local => Arc::new(LocalFactsProvider),
            }
        })
        .collect()
}
