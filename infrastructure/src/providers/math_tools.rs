//! JSON math facts API (`GET {base}/numbers/{category}/{number}`)

use super::http::{HttpSettings, fetch_body, probe};
use async_trait::async_trait;
use facts_application::ports::fact_provider::{FactProvider, ProviderError};
use facts_domain::{FactRequest, MathToolsConfig, NumberFact};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

const FALLBACK_TEXT: &str = "An interesting math fact.";

pub struct MathToolsProvider {
    client: Client,
    config: MathToolsConfig,
    settings: HttpSettings,
}

/// Response body. `number` may arrive as a string or a number.
#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    number: Value,
    #[serde(default)]
    text: Value,
    #[serde(default)]
    fact: Value,
}

impl MathToolsProvider {
    pub const NAME: &'static str = "MathFactsAPI";

    pub fn new(client: Client, config: MathToolsConfig, settings: HttpSettings) -> Self {
        Self {
            client,
            config,
            settings,
        }
    }

    fn fact_url(&self, request: &FactRequest) -> String {
        format!(
            "{}/numbers/{}/{}",
            self.config.base_url,
            self.config.upstream_category(request.category()),
            request.number()
        )
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_fact(request: &FactRequest, body: &str) -> Result<NumberFact, ProviderError> {
    if body.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    let payload: Payload =
        serde_json::from_str(body).map_err(|e| ProviderError::InvalidPayload(e.to_string()))?;

    let number = match &payload.number {
        Value::Number(n) => n.to_string(),
        other => non_empty_str(other)
            .unwrap_or(request.number())
            .to_string(),
    };
    let text = non_empty_str(&payload.text)
        .or_else(|| non_empty_str(&payload.fact))
        .unwrap_or(FALLBACK_TEXT);

    // The requested category is echoed, whatever bucket served it
    Ok(NumberFact::new(number, request.category(), text))
}

#[async_trait]
impl FactProvider for MathToolsProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn is_available(&self, cancel: &CancellationToken) -> bool {
        let url = format!(
            "{}/numbers/{}/42",
            self.config.base_url,
            MathToolsConfig::DEFAULT_BUCKET
        );
        probe(&self.client, &url, &self.settings, cancel).await
    }

    async fn get_number_fact(
        &self,
        request: &FactRequest,
        cancel: &CancellationToken,
    ) -> Result<NumberFact, ProviderError> {
        let body = fetch_body(
            &self.client,
            &self.fact_url(request),
            "application/json",
            &self.settings,
            cancel,
        )
        .await?;
        parse_fact(request, &body)
    }
}
