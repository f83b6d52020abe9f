//! FactRequest value object

use super::category::FactCategory;
use super::error::ValidationError;

/// Sentinel number asking the source to pick a number itself
pub const RANDOM: &str = "random";

/// A request for a fact about `number` in `category` (Value Object)
///
/// `number` is either a string of ASCII digits or [`RANDOM`]. The pair is
/// hashable and serves as the query key for in-flight deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FactRequest {
    number: String,
    category: FactCategory,
}

impl FactRequest {
    /// Build a request without validation (providers and tests)
    pub fn new(number: impl Into<String>, category: FactCategory) -> Self {
        Self {
            number: number.into(),
            category,
        }
    }

    pub fn random(category: FactCategory) -> Self {
        Self::new(RANDOM, category)
    }

    /// Validate raw form input.
    ///
    /// A random request ignores `number`. Otherwise the number is required
    /// and must consist of digits only.
    pub fn from_input(
        number: Option<&str>,
        category: &str,
        random: bool,
    ) -> Result<Self, ValidationError> {
        let category: FactCategory = category
            .parse()
            .map_err(|_| ValidationError::InvalidCategory(category.to_string()))?;

        if random {
            return Ok(Self::random(category));
        }

        let number = number.map(str::trim).unwrap_or_default();
        if number.is_empty() {
            return Err(ValidationError::NumberRequired);
        }
        if !is_digits(number) {
            return Err(ValidationError::InvalidNumber(number.to_string()));
        }

        Ok(Self::new(number, category))
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn category(&self) -> FactCategory {
        self.category
    }

    pub fn is_random(&self) -> bool {
        self.number == RANDOM
    }
}

impl std::fmt::Display for FactRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.number, self.category)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
