//! NumberFact entity

use super::category::FactCategory;
use serde::{Deserialize, Serialize};

/// A fact about a number, normalized from whichever source produced it.
///
/// `number` and `category` together form the natural key used to
/// deduplicate favorites and history entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFact {
    /// The requested number, or the resolved number for random requests
    pub number: String,
    pub category: FactCategory,
    /// Free text of the fact
    pub fact: String,
    /// Creation time in epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
}

impl NumberFact {
    pub fn new(number: impl Into<String>, category: FactCategory, fact: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            category,
            fact: fact.into(),
            timestamp: None,
        }
    }

    /// Stamp the creation time. An existing timestamp is never overwritten.
    pub fn stamped(mut self, epoch_millis: i64) -> Self {
        if self.timestamp.is_none() {
            self.timestamp = Some(epoch_millis);
        }
        self
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    /// Leading part of the fact text, at most `max_bytes` long, cut on a
    /// character boundary.
    pub fn preview(&self, max_bytes: usize) -> &str {
        let text = self.fact.as_str();
        if text.len() <= max_bytes {
            return text;
        }
        let end = (0..=max_bytes)
            .rev()
            .find(|&i| text.is_char_boundary(i))
            .unwrap_or(0);
        &text[..end]
    }

    /// Whether two facts share the same natural key
    pub fn same_key(&self, other: &NumberFact) -> bool {
        self.number == other.number && self.category == other.category
    }
}
