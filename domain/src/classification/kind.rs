//! Classified error value objects

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level error taxonomy shown to the user
///
/// | Kind | Code | Typical source |
/// |------|------|----------------|
/// | `NotFound` | `NOT_FOUND` | HTTP 404 |
/// | `ServerError` | `SERVER_ERROR` | HTTP 5xx |
/// | `Timeout` | `TIMEOUT` | deadline elapsed |
/// | `NetworkError` | `NETWORK` | connection / fetch failure |
/// | `ApiError` | `API_ERROR` | any other described failure |
/// | `Unknown` | `UNKNOWN` | failure with no description |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    ServerError,
    Timeout,
    NetworkError,
    ApiError,
    Unknown,
}

impl ErrorKind {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::ServerError => "SERVER_ERROR",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::NetworkError => "NETWORK",
            ErrorKind::ApiError => "API_ERROR",
            ErrorKind::Unknown => "UNKNOWN",
        }
    }

    /// Fixed user-facing message for this kind.
    ///
    /// `ApiError` has no fixed message; the classifier passes the source
    /// message through instead.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            ErrorKind::NotFound => {
                Some("No fact was found for this number. Try a different number.")
            }
            ErrorKind::ServerError => {
                Some("The fact service is temporarily unavailable. Please try again later.")
            }
            ErrorKind::Timeout => Some(
                "The server took too long to respond. Check your internet connection.",
            ),
            ErrorKind::NetworkError => Some(
                "Could not connect to the server. Check your internet connection and try again.",
            ),
            ErrorKind::ApiError => None,
            ErrorKind::Unknown => Some("An unknown error occurred while contacting the API."),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A failure mapped onto [`ErrorKind`], ready for display.
///
/// Only produced by [`classify`](super::classify).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    /// Human-readable message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Raw failure text, kept for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ClassifiedError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            details: None,
        }
    }

    pub(crate) fn with_status(mut self, status: Option<u16>) -> Self {
        self.status = status;
        self
    }

    pub(crate) fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
