//! Saved fact entities

use crate::core::fact::NumberFact;
use serde::{Deserialize, Serialize};

/// Build the entry id: `{number}-{category}-{epoch_millis}`
pub fn entry_id(fact: &NumberFact, epoch_millis: i64) -> String {
    format!("{}-{}-{}", fact.number, fact.category, epoch_millis)
}

/// A fact the user marked as a favorite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteFact {
    #[serde(flatten)]
    pub fact: NumberFact,
    pub id: String,
    /// RFC 3339 time the favorite was added
    pub added_at: String,
}

impl FavoriteFact {
    pub fn new(fact: NumberFact, epoch_millis: i64, added_at: impl Into<String>) -> Self {
        Self {
            id: entry_id(&fact, epoch_millis),
            fact,
            added_at: added_at.into(),
        }
    }
}

/// A fact the user looked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    #[serde(flatten)]
    pub fact: NumberFact,
    pub id: String,
    /// RFC 3339 time of the lookup
    pub searched_at: String,
}

impl HistoryItem {
    pub fn new(fact: NumberFact, epoch_millis: i64, searched_at: impl Into<String>) -> Self {
        Self {
            id: entry_id(&fact, epoch_millis),
            fact,
            searched_at: searched_at.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::FactCategory;

    #[test]
    fn id_combines_key_and_time() {
        let fav = FavoriteFact::new(
            NumberFact::new("42", FactCategory::Math, "x"),
            1700,
            "2026-01-01T00:00:00Z",
        );
        assert_eq!(fav.id, "42-math-1700");
    }

    #[test]
    fn fact_fields_are_flattened() {
        let item = HistoryItem::new(
            NumberFact::new("7", FactCategory::Date, "week").stamped(5),
            5,
            "2026-01-01T00:00:00Z",
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["number"], "7");
        assert_eq!(json["category"], "date");
        assert_eq!(json["timestamp"], 5);
        assert_eq!(json["searched_at"], "2026-01-01T00:00:00Z");

        let back: HistoryItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
