//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain settings.

mod logging;
mod providers;
mod query;
mod storage;

pub use logging::FileLoggingConfig;
pub use providers::{FileMathToolsConfig, FileNumbersApiConfig, FileProvidersConfig};
pub use query::FileQueryConfig;
pub use storage::FileStorageConfig;

use facts_domain::config::validation::ConfigIssue;
use facts_domain::{CollectionLimits, ProviderConfig, QueryConfig};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Fact source settings
    pub providers: FileProvidersConfig,
    /// Query layer settings
    pub query: FileQueryConfig,
    /// Favorites / history storage
    pub storage: FileStorageConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks provider names and order, timeouts, query mode and list
    /// limits. Callers abort on any [`Severity::Error`](facts_domain::Severity).
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.providers.to_provider_config().1);
        issues.extend(self.query.to_query_config().1);
        issues.extend(self.storage.to_limits().1);
        issues
    }

    pub fn provider_config(&self) -> ProviderConfig {
        self.providers.to_provider_config().0
    }

    pub fn query_config(&self) -> QueryConfig {
        self.query.to_query_config().0
    }

    pub fn collection_limits(&self) -> CollectionLimits {
        self.storage.to_limits().0
    }
}
