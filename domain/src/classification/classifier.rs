//! Failure classification rules

use super::kind::{ClassifiedError, ErrorKind};
use regex::Regex;
use std::sync::LazyLock;

/// A whole 5xx token such as `500` or `503`, not a digit run like `5000`.
static SERVER_STATUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b5\d{2}\b").unwrap());

/// An unclassified failure as raised by a fact source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFailure {
    /// A described error, optionally carrying an HTTP status
    Error {
        message: String,
        status: Option<u16>,
    },
    /// A failure with nothing to inspect (e.g. a crashed task)
    Opaque,
}

impl RawFailure {
    pub fn error(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Error {
            message: message.into(),
            status,
        }
    }
}

/// Classify a raw failure. Rules are applied in order, first match wins:
///
/// 1. `404` → [`ErrorKind::NotFound`]
/// 2. a 5xx status → [`ErrorKind::ServerError`]
/// 3. `timeout` / `timed out` → [`ErrorKind::Timeout`]
/// 4. `fetch` / `network` → [`ErrorKind::NetworkError`]
/// 5. any other described error → [`ErrorKind::ApiError`], message verbatim
/// 6. otherwise → [`ErrorKind::Unknown`]
pub fn classify(raw: &RawFailure) -> ClassifiedError {
    let RawFailure::Error { message, status } = raw else {
        return fixed(ErrorKind::Unknown);
    };

    let lower = message.to_lowercase();

    let kind = if *status == Some(404) || message.contains("404") {
        Some(ErrorKind::NotFound)
    } else if status.is_some_and(|s| (500..600).contains(&s)) || SERVER_STATUS.is_match(message)
    {
        Some(ErrorKind::ServerError)
    } else if lower.contains("timeout") || lower.contains("timed out") {
        Some(ErrorKind::Timeout)
    } else if lower.contains("fetch") || lower.contains("network") {
        Some(ErrorKind::NetworkError)
    } else {
        None
    };

    match kind {
        Some(kind) => fixed(kind)
            .with_status(*status)
            .with_details(message.clone()),
        None => ClassifiedError::new(ErrorKind::ApiError, message.clone()).with_status(*status),
    }
}

fn fixed(kind: ErrorKind) -> ClassifiedError {
    ClassifiedError::new(kind, kind.user_message().unwrap_or_default())
}
