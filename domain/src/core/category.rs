//! Fact category value object

use serde::{Deserialize, Serialize};

/// The kind of fact requested about a number (Value Object)
///
/// The wire name is the lowercase variant name, which is also the path
/// segment used by the text API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactCategory {
    #[default]
    Trivia,
    Math,
    Date,
}

impl FactCategory {
    /// All categories in display order
    pub const ALL: [FactCategory; 3] = [FactCategory::Trivia, FactCategory::Math, FactCategory::Date];

    /// Get the string identifier for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            FactCategory::Trivia => "trivia",
            FactCategory::Math => "math",
            FactCategory::Date => "date",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FactCategory::Trivia => "General (Trivia)",
            FactCategory::Math => "Mathematical (Math)",
            FactCategory::Date => "Date (Date)",
        }
    }
}

impl std::fmt::Display for FactCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not a known category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown fact category: {0}")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for FactCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trivia" => Ok(FactCategory::Trivia),
            "math" => Ok(FactCategory::Math),
            "date" => Ok(FactCategory::Date),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
