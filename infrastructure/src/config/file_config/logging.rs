//! Logging configuration from TOML (`[logging]` section)

use super::storage::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// fetch_log = "~/.local/state/number-facts/fetch.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path of the JSONL fetch journal. Disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_log: Option<String>,
}

impl FileLoggingConfig {
    pub fn fetch_log_path(&self) -> Option<PathBuf> {
        self.fetch_log.as_deref().map(expand_home)
    }
}
