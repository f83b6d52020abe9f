//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of fact source settings without depending
//! on any serialization format (TOML, JSON, etc.).

use crate::core::category::FactCategory;
use std::collections::HashMap;
use std::time::Duration;

/// Identifies one of the built-in fact sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    /// Remote plain-text API (numbersapi.com)
    NumbersApi,
    /// Remote JSON API (api.math.tools)
    MathTools,
    /// Offline lookup table
    Local,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::NumbersApi => "numbers_api",
            ProviderId::MathTools => "math_tools",
            ProviderId::Local => "local",
        }
    }

    /// Default priority order: primary remote, secondary remote, local.
    pub fn default_order() -> Vec<ProviderId> {
        vec![ProviderId::NumbersApi, ProviderId::MathTools, ProviderId::Local]
    }
}

impl std::str::FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numbers_api" => Ok(ProviderId::NumbersApi),
            "math_tools" => Ok(ProviderId::MathTools),
            "local" => Ok(ProviderId::Local),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top-level provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Providers to consult, in priority order.
    pub order: Vec<ProviderId>,
    /// User-Agent header sent to remote sources.
    pub user_agent: String,
    /// Bound on each availability probe (default: 3s).
    pub probe_timeout: Duration,
    /// Bound on each fact fetch (default: 10s).
    pub fetch_timeout: Duration,
    pub numbers_api: NumbersApiConfig,
    pub math_tools: MathToolsConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            order: ProviderId::default_order(),
            user_agent: "NumberFactsApp/1.0".to_string(),
            probe_timeout: Duration::from_secs(3),
            fetch_timeout: Duration::from_secs(10),
            numbers_api: NumbersApiConfig::default(),
            math_tools: MathToolsConfig::default(),
        }
    }
}

/// Plain-text numbers API settings.
#[derive(Debug, Clone)]
pub struct NumbersApiConfig {
    pub base_url: String,
}

impl Default for NumbersApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://numbersapi.com".to_string(),
        }
    }
}

/// JSON math facts API settings.
#[derive(Debug, Clone)]
pub struct MathToolsConfig {
    pub base_url: String,
    /// Our category → the API's category path segment.
    pub category_map: HashMap<FactCategory, String>,
}

impl MathToolsConfig {
    /// The upstream only serves one fact bucket, so every category maps to it.
    pub const DEFAULT_BUCKET: &'static str = "nct";

    /// Upstream category for `category`, falling back to the default bucket.
    pub fn upstream_category(&self, category: FactCategory) -> &str {
        self.category_map
            .get(&category)
            .map(String::as_str)
            .unwrap_or(Self::DEFAULT_BUCKET)
    }
}

impl Default for MathToolsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.math.tools".to_string(),
            category_map: FactCategory::ALL
                .into_iter()
                .map(|c| (c, Self::DEFAULT_BUCKET.to_string()))
                .collect(),
        }
    }
}
