//! Shared HTTP plumbing for the remote providers
//!
//! Every remote call races its deadline against the caller's cancellation
//! token. Failures are mapped onto [`ProviderError`] here so that the
//! provider adapters only deal with payloads.

use facts_application::ports::fact_provider::ProviderError;
use facts_domain::ProviderConfig;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Per-request settings shared by the remote providers
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub user_agent: String,
    pub probe_timeout: Duration,
    pub fetch_timeout: Duration,
}

impl From<&ProviderConfig> for HttpSettings {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            probe_timeout: config.probe_timeout,
            fetch_timeout: config.fetch_timeout,
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self::from(&ProviderConfig::default())
    }
}

/// Run `fut` bounded by `after`, aborting early on `cancel`.
pub(crate) async fn bounded<T, F>(
    operation: &'static str,
    after: Duration,
    cancel: &CancellationToken,
    fut: F,
) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ProviderError::Cancelled),
        result = tokio::time::timeout(after, fut) => match result {
            Ok(inner) => inner,
            Err(_) => Err(ProviderError::Timeout { operation, after }),
        },
    }
}

/// `HEAD url`; true only for a 2xx answer within the probe deadline.
pub(crate) async fn probe(
    client: &Client,
    url: &str,
    settings: &HttpSettings,
    cancel: &CancellationToken,
) -> bool {
    let request = async {
        client
            .head(url)
            .header(USER_AGENT, &settings.user_agent)
            .send()
            .await
            .map_err(|e| map_send_error(e, "probe", settings.probe_timeout))
    };

    match bounded("probe", settings.probe_timeout, cancel, request).await {
        Ok(response) => response.status().is_success(),
        Err(e) => {
            debug!("Probe {} failed: {}", url, e);
            false
        }
    }
}

/// `GET url` with the given `Accept`, returning the body of a 2xx answer.
///
/// The whole exchange (headers and body) counts against the fetch deadline.
pub(crate) async fn fetch_body(
    client: &Client,
    url: &str,
    accept: &str,
    settings: &HttpSettings,
    cancel: &CancellationToken,
) -> Result<String, ProviderError> {
    let request = async {
        let response = client
            .get(url)
            .header(ACCEPT, accept)
            .header(USER_AGENT, &settings.user_agent)
            .send()
            .await
            .map_err(|e| map_send_error(e, "fetch", settings.fetch_timeout))?;

        let response = check_status(response)?;
        response
            .text()
            .await
            .map_err(|e| map_send_error(e, "fetch", settings.fetch_timeout))
    };

    bounded("fetch", settings.fetch_timeout, cancel, request).await
}

fn check_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(ProviderError::Http {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}

fn map_send_error(err: reqwest::Error, operation: &'static str, after: Duration) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout { operation, after }
    } else {
        // The URL carries the requested number, which must not reach the classifier
        ProviderError::Network(err.without_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bounded_times_out() {
        let result: Result<(), _> = bounded(
            "fetch",
            Duration::from_millis(10),
            &CancellationToken::new(),
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            },
        )
        .await;

        assert_eq!(
            result,
            Err(ProviderError::Timeout {
                operation: "fetch",
                after: Duration::from_millis(10)
            })
        );
    }

    #[tokio::test]
    async fn bounded_prefers_cancellation() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = bounded("fetch", Duration::from_secs(1), &cancel, async { Ok(1) }).await;
        assert_eq!(result, Err(ProviderError::Cancelled));
    }

    #[tokio::test]
    async fn bounded_passes_inner_result_through() {
        let result = bounded(
            "fetch",
            Duration::from_secs(1),
            &CancellationToken::new(),
            async { Err::<(), _>(ProviderError::EmptyResponse) },
        )
        .await;
        assert_eq!(result, Err(ProviderError::EmptyResponse));
    }
}
