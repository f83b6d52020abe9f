//! Plain-text numbers API (`GET {base}/{number}/{category}`)

use super::http::{HttpSettings, fetch_body, probe};
use async_trait::async_trait;
use facts_application::ports::fact_provider::{FactProvider, ProviderError};
use facts_domain::{FactRequest, NumberFact};
use reqwest::Client;
use tokio_util::sync::CancellationToken;

pub struct NumbersApiProvider {
    client: Client,
    base_url: String,
    settings: HttpSettings,
}

impl NumbersApiProvider {
    pub const NAME: &'static str = "NumbersAPI";

    pub fn new(client: Client, base_url: impl Into<String>, settings: HttpSettings) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            settings,
        }
    }

    fn fact_url(&self, request: &FactRequest) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            request.number(),
            request.category()
        )
    }
}

/// Normalize a text body. For random requests the number is the first word
/// of the fact ("7 is the number of ...").
fn parse_fact(request: &FactRequest, body: &str) -> Result<NumberFact, ProviderError> {
    let text = body.trim();
    if text.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    let number = if request.is_random() {
        text.split_whitespace().next().unwrap_or(text)
    } else {
        request.number()
    };

    Ok(NumberFact::new(number, request.category(), text))
}

#[async_trait]
impl FactProvider for NumbersApiProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn is_available(&self, cancel: &CancellationToken) -> bool {
        let url = format!("{}/42/trivia", self.base_url);
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
            "text/plain",
            &self.settings,
            cancel,
        )
        .await?;
        parse_fact(request, &body)
    }
}
