//! Logging infrastructure: the structured fetch journal.
//!
//! Provides [`JsonlFetchLogger`], a JSONL file writer that implements
//! the [`FetchLogger`](facts_application::FetchLogger) port.

mod jsonl_fetch_logger;

pub use jsonl_fetch_logger::JsonlFetchLogger;
