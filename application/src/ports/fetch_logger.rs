//! Port for the structured fetch journal.
//!
//! Defines the [`FetchLogger`] trait for recording what happened while a fact
//! was retrieved (skipped providers, failures, the winning source, fallbacks).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable record (JSONL).

use serde_json::Value;

/// A structured fetch event for logging.
pub struct FetchEvent {
    /// Event type identifier (e.g., "provider_failed", "fact_resolved").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl FetchEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging fetch events to a structured log.
///
/// `log` is synchronous and infallible; logging failures are ignored.
pub trait FetchLogger: Send + Sync {
    /// Record a fetch event.
    fn log(&self, event: FetchEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoFetchLogger;

impl FetchLogger for NoFetchLogger {
    fn log(&self, _event: FetchEvent) {}
}
