//! Query configuration from TOML (`[query]` section)

use facts_domain::config::validation::{ConfigIssue, ConfigIssueCode};
use facts_domain::{QueryConfig, QueryMode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw query configuration from TOML
///
/// # Example
///
/// ```toml
/// [query]
/// mode = "resilient"      # "resilient" or "strict"
/// cache_ttl_secs = 60     # 0 disables caching
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQueryConfig {
    pub mode: String,
    pub cache_ttl_secs: u64,
}

impl Default for FileQueryConfig {
    fn default() -> Self {
        let defaults = QueryConfig::default();
        Self {
            mode: defaults.default_mode.as_str().to_string(),
            cache_ttl_secs: defaults.cache_ttl.as_secs(),
        }
    }
}

impl FileQueryConfig {
    /// Parse mode string into [`QueryMode`], warning and falling back on failure.
    pub fn parse_mode(&self) -> (QueryMode, Vec<ConfigIssue>) {
        match self.mode.parse::<QueryMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "query.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values: vec!["resilient".to_string(), "strict".to_string()],
                    },
                    format!(
                        "query.mode: unknown value '{}', falling back to 'resilient'",
                        self.mode
                    ),
                );
                (QueryMode::default(), vec![issue])
            }
        }
    }

    pub fn to_query_config(&self) -> (QueryConfig, Vec<ConfigIssue>) {
        let (default_mode, issues) = self.parse_mode();
        let config = QueryConfig {
            default_mode,
            cache_ttl: Duration::from_secs(self.cache_ttl_secs),
        };
        (config, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_mode_parses() {
        let file: FileQueryConfig = toml::from_str("mode = \"strict\"").unwrap();
        let (config, issues) = file.to_query_config();
        assert_eq!(config.default_mode, QueryMode::Strict);
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert!(issues.is_empty());
    }

    #[test]
    fn unknown_mode_warns_and_falls_back() {
        let file = FileQueryConfig {
            mode: "optimistic".into(),
            ..Default::default()
        };
        let (mode, issues) = file.parse_mode();
        assert_eq!(mode, QueryMode::Resilient);
        assert_eq!(issues.len(), 1);
        assert!(!ConfigIssue::has_errors(&issues));
    }
}
