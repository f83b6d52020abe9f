//! Storage configuration from TOML (`[storage]` section)

use facts_domain::CollectionLimits;
use facts_domain::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "number-facts";

/// Raw storage configuration from TOML
///
/// # Example
///
/// ```toml
/// [storage]
/// dir = "~/.local/share/number-facts"
/// history_limit = 50
/// favorites_limit = 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory for favorites.json / history.json. Defaults to the
    /// platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    pub history_limit: usize,
    pub favorites_limit: usize,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        let limits = CollectionLimits::default();
        Self {
            dir: None,
            history_limit: limits.history,
            favorites_limit: limits.favorites,
        }
    }
}

impl FileStorageConfig {
    /// Resolve the storage directory, expanding a leading `~/`.
    pub fn resolve_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => expand_home(dir),
            None => dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_DIR))),
        }
    }

    pub fn to_limits(&self) -> (CollectionLimits, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        for (field, value) in [
            ("storage.history_limit", self.history_limit),
            ("storage.favorites_limit", self.favorites_limit),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroValue {
                        field: field.to_string(),
                    },
                    format!("{}: must be greater than 0", field),
                ));
            }
        }

        let limits = CollectionLimits {
            favorites: self.favorites_limit,
            history: self.history_limit,
        };
        (limits, issues)
    }
}

pub(crate) fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
