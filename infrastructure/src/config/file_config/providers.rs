//! Provider configuration from TOML (`[providers]` section)

use facts_domain::config::validation::{ConfigIssue, ConfigIssueCode};
use facts_domain::{FactCategory, MathToolsConfig, NumbersApiConfig, ProviderConfig, ProviderId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Raw provider configuration from TOML
///
/// # Example
///
/// ```toml
/// [providers]
/// user_agent = "NumberFactsApp/1.0"
/// probe_timeout_ms = 3000
/// fetch_timeout_ms = 10000
/// order = ["numbers_api", "math_tools", "local"]
///
/// [providers.numbers_api]
/// base_url = "http://numbersapi.com"
///
/// [providers.math_tools]
/// base_url = "https://api.math.tools"
///
/// [providers.math_tools.category_map]
/// trivia = "nct"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub user_agent: String,
    pub probe_timeout_ms: u64,
    pub fetch_timeout_ms: u64,
    /// Provider names in priority order
    pub order: Vec<String>,
    pub numbers_api: FileNumbersApiConfig,
    pub math_tools: FileMathToolsConfig,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        let defaults = ProviderConfig::default();
        Self {
            user_agent: defaults.user_agent,
            probe_timeout_ms: defaults.probe_timeout.as_millis() as u64,
            fetch_timeout_ms: defaults.fetch_timeout.as_millis() as u64,
            order: defaults.order.iter().map(|p| p.to_string()).collect(),
            numbers_api: FileNumbersApiConfig::default(),
            math_tools: FileMathToolsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNumbersApiConfig {
    pub base_url: String,
}

impl Default for FileNumbersApiConfig {
    fn default() -> Self {
        Self {
            base_url: NumbersApiConfig::default().base_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMathToolsConfig {
    pub base_url: String,
    /// Category name → upstream category path segment
    pub category_map: BTreeMap<String, String>,
}

impl Default for FileMathToolsConfig {
    fn default() -> Self {
        Self {
            base_url: MathToolsConfig::default().base_url,
            category_map: FactCategory::ALL
                .into_iter()
                .map(|c| (c.to_string(), MathToolsConfig::DEFAULT_BUCKET.to_string()))
                .collect(),
        }
    }
}

impl FileProvidersConfig {
    /// Parse `order` into provider ids.
    ///
    /// Unknown and repeated names are dropped with a warning. An order that
    /// ends up empty is an error.
    pub fn parse_order(&self) -> (Vec<ProviderId>, Vec<ConfigIssue>) {
        let mut order = Vec::new();
        let mut issues = Vec::new();

        for name in &self.order {
            match name.parse::<ProviderId>() {
                Ok(id) if order.contains(&id) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateProvider { name: name.clone() },
                    format!("providers.order: '{}' is listed more than once", name),
                )),
                Ok(id) => order.push(id),
                Err(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "providers.order".to_string(),
                        value: name.clone(),
                        valid_values: ProviderId::default_order()
                            .iter()
                            .map(|p| p.to_string())
                            .collect(),
                    },
                    format!("providers.order: unknown provider '{}', ignoring it", name),
                )),
            }
        }

        if order.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyProviderOrder,
                "providers.order: no usable providers configured",
            ));
        }

        (order, issues)
    }

    fn parse_category_map(&self) -> (HashMap<FactCategory, String>, Vec<ConfigIssue>) {
        let mut map: HashMap<FactCategory, String> = MathToolsConfig::default().category_map;
        let mut issues = Vec::new();

        for (key, value) in &self.math_tools.category_map {
            match key.parse::<FactCategory>() {
                Ok(category) => {
                    map.insert(category, value.clone());
                }
                Err(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "providers.math_tools.category_map".to_string(),
                        value: key.clone(),
                        valid_values: FactCategory::ALL.iter().map(|c| c.to_string()).collect(),
                    },
                    format!(
                        "providers.math_tools.category_map: unknown category '{}', ignoring it",
                        key
                    ),
                )),
            }
        }

        (map, issues)
    }

    fn timeout_issue(field: &str) -> ConfigIssue {
        ConfigIssue::error(
            ConfigIssueCode::ZeroValue {
                field: field.to_string(),
            },
            format!("{}: must be greater than 0", field),
        )
    }

    /// Convert to domain [`ProviderConfig`], collecting any issues found.
    pub fn to_provider_config(&self) -> (ProviderConfig, Vec<ConfigIssue>) {
        let (order, mut issues) = self.parse_order();
        let (category_map, map_issues) = self.parse_category_map();
        issues.extend(map_issues);

        if self.probe_timeout_ms == 0 {
            issues.push(Self::timeout_issue("providers.probe_timeout_ms"));
        }
        if self.fetch_timeout_ms == 0 {
            issues.push(Self::timeout_issue("providers.fetch_timeout_ms"));
        }

        let config = ProviderConfig {
            order,
            user_agent: self.user_agent.clone(),
            probe_timeout: Duration::from_millis(self.probe_timeout_ms),
            fetch_timeout: Duration::from_millis(self.fetch_timeout_ms),
            numbers_api: NumbersApiConfig {
                base_url: self.numbers_api.base_url.trim_end_matches('/').to_string(),
            },
            math_tools: MathToolsConfig {
                base_url: self.math_tools.base_url.trim_end_matches('/').to_string(),
                category_map,
            },
        };

        (config, issues)
    }
}
