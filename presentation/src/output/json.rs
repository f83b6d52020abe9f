//! JSON output formatter

use super::formatter::OutputFormatter;
use facts_domain::{
    ClassifiedError, FactCategory, FavoriteFact, HistoryItem, NumberFact, ValidationError,
};
use serde::Serialize;
use serde_json::{Value, json};

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

impl OutputFormatter for JsonFormatter {
    fn format_fact(&self, fact: &NumberFact) -> String {
        pretty(fact)
    }

    fn format_fact_list(&self, category: FactCategory, facts: &[NumberFact]) -> String {
        pretty(&json!({ "category": category, "facts": facts }))
    }

    fn format_error(&self, error: &ClassifiedError) -> String {
        let mut body = serde_json::to_value(error).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut body {
            map.insert("code".to_string(), Value::from(error.kind.code()));
        }
        pretty(&json!({ "error": body }))
    }

    fn format_validation_error(&self, error: &ValidationError) -> String {
        pretty(&json!({ "error": { "kind": "validation", "message": error.to_string() } }))
    }

    fn format_providers(&self, configured: &[String], available: &[String]) -> String {
        let providers: Vec<Value> = configured
            .iter()
            .map(|name| json!({ "name": name, "available": available.contains(name) }))
            .collect();
        pretty(&json!({ "providers": providers }))
    }

    fn format_favorites(&self, favorites: &[FavoriteFact]) -> String {
        pretty(favorites)
    }

    fn format_history(&self, history: &[HistoryItem]) -> String {
        pretty(history)
    }

    fn format_notice(&self, action: &str, id: Option<&str>) -> String {
        pretty(&json!({ "status": action, "id": id }))
    }
}
