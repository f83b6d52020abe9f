//! Output formatter trait

use super::console::ConsoleFormatter;
use super::json::JsonFormatter;
use facts_domain::{
    ClassifiedError, FactCategory, FavoriteFact, HistoryItem, NumberFact, OutputFormat,
    ValidationError,
};

/// Trait for rendering command results
pub trait OutputFormatter {
    fn format_fact(&self, fact: &NumberFact) -> String;

    fn format_fact_list(&self, category: FactCategory, facts: &[NumberFact]) -> String;

    fn format_error(&self, error: &ClassifiedError) -> String;

    fn format_validation_error(&self, error: &ValidationError) -> String;

    /// `configured` in priority order; `available` is the reachable subset
    fn format_providers(&self, configured: &[String], available: &[String]) -> String;

    fn format_favorites(&self, favorites: &[FavoriteFact]) -> String;

    fn format_history(&self, history: &[HistoryItem]) -> String;

    /// Short confirmation for a list mutation
    fn format_notice(&self, action: &str, id: Option<&str>) -> String;
}

/// Formatter for the requested output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
