//! Console output formatter

use super::formatter::OutputFormatter;
use colored::Colorize;
use facts_domain::{
    ClassifiedError, FactCategory, FavoriteFact, HistoryItem, NumberFact, ValidationError,
};

/// Formats results for colored terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn fact_title(fact: &NumberFact) -> String {
        format!("Number {} · {}", fact.number, fact.category.label())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_fact(&self, fact: &NumberFact) -> String {
        format!(
            "{}\n\n{}\n",
            Self::header(&Self::fact_title(fact)),
            Self::indent(&fact.fact, "  ")
        )
    }

    fn format_fact_list(&self, category: FactCategory, facts: &[NumberFact]) -> String {
        let mut output = format!("{}\n", Self::header(&format!("{} facts", category.label())));
        for fact in facts {
            output.push_str(&format!(
                "\n{}\n{}\n",
                Self::fact_title(fact).yellow().bold(),
                Self::indent(&fact.fact, "  ")
            ));
        }
        output
    }

    fn format_error(&self, error: &ClassifiedError) -> String {
        let mut output = format!(
            "{} {}\n",
            format!("Error [{}]:", error.kind.code()).red().bold(),
            error.message
        );
        if let Some(details) = &error.details {
            output.push_str(&format!("  {}\n", details.dimmed()));
        }
        output
    }

    fn format_validation_error(&self, error: &ValidationError) -> String {
        format!("{} {}\n", "Invalid input:".yellow().bold(), error)
    }

    fn format_providers(&self, configured: &[String], available: &[String]) -> String {
        let mut output = format!("{}\n", "Fact sources (priority order):".cyan().bold());
        for (i, name) in configured.iter().enumerate() {
            let status = if available.contains(name) {
                "available".green()
            } else {
                "unreachable".red()
            };
            output.push_str(&format!("  {}. {:<14} {}\n", i + 1, name, status));
        }
        output
    }

    fn format_favorites(&self, favorites: &[FavoriteFact]) -> String {
        if favorites.is_empty() {
            return format!("{}\n", "No favorites yet.".dimmed());
        }
        let mut output = format!("{}\n", Self::header("Favorites"));
        for favorite in favorites {
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                Self::fact_title(&favorite.fact).yellow().bold(),
                format!("({})", favorite.id).dimmed(),
                Self::indent(&favorite.fact.fact, "  ")
            ));
        }
        output
    }

    fn format_history(&self, history: &[HistoryItem]) -> String {
        if history.is_empty() {
            return format!("{}\n", "History is empty.".dimmed());
        }
        let mut output = format!("{}\n", Self::header("Recent lookups"));
        for item in history {
            output.push_str(&format!(
                "\n{} {} {}\n{}\n",
                item.searched_at.dimmed(),
                Self::fact_title(&item.fact).yellow().bold(),
                format!("({})", item.id).dimmed(),
                Self::indent(&item.fact.fact, "  ")
            ));
        }
        output
    }

    fn format_notice(&self, action: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{} {}\n", action.green(), id),
            None => format!("{}\n", action.green()),
        }
    }
}
