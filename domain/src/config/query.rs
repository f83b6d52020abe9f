//! Query layer settings

use std::time::Duration;

/// What the query layer does when every provider has failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryMode {
    /// Substitute a synthetic fact from the fallback pool
    #[default]
    Resilient,
    /// Surface the classified error
    Strict,
}

impl QueryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::Resilient => "resilient",
            QueryMode::Strict => "strict",
        }
    }
}

impl std::str::FromStr for QueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resilient" => Ok(QueryMode::Resilient),
            "strict" => Ok(QueryMode::Strict),
            other => Err(format!("unknown query mode '{}'", other)),
        }
    }
}

/// Query layer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub default_mode: QueryMode,
    /// How long a settled fact stays cached. Zero disables caching.
    pub cache_ttl: Duration,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_mode: QueryMode::default(),
            cache_ttl: Duration::from_secs(60),
        }
    }
}

/// Capacity of the saved-fact lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionLimits {
    pub favorites: usize,
    pub history: usize,
}

impl Default for CollectionLimits {
    fn default() -> Self {
        Self {
            favorites: 100,
            history: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Strict".parse::<QueryMode>(), Ok(QueryMode::Strict));
        assert_eq!("resilient".parse::<QueryMode>(), Ok(QueryMode::Resilient));
        assert!("lenient".parse::<QueryMode>().is_err());
    }

    #[test]
    fn defaults() {
        assert_eq!(QueryConfig::default().default_mode, QueryMode::Resilient);
        assert_eq!(CollectionLimits::default().history, 50);
        assert_eq!(CollectionLimits::default().favorites, 100);
    }
}
