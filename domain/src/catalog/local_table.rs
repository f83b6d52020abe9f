//! Canned facts served when no remote source is reachable

use crate::core::category::FactCategory;
use crate::core::request::RANDOM;

const TRIVIA: &[(&str, &str)] = &[
    (
        "42",
        "42 is the answer to the ultimate question of life, the universe, and everything (from \"The Hitchhiker's Guide to the Galaxy\").",
    ),
    ("7", "7 is considered a lucky number in many cultures."),
    ("13", "13 is often considered an unlucky number, especially in Western culture."),
    ("100", "100 is the square of 10 and the basis of percentages."),
    (
        RANDOM,
        "Every number has its own unique story and meaning in mathematics and culture.",
    ),
];

const MATH: &[(&str, &str)] = &[
    ("42", "42 = 2 × 3 × 7, the product of three distinct primes."),
    ("7", "7 is a prime number that cannot be written as a sum of three squares."),
    ("13", "13 is a prime number that is the sum of two squares: 2² + 3²."),
    ("100", "100 = 10² = 2² × 5², a composite number with prime divisors 2 and 5."),
    (RANDOM, "Mathematics is the language in which nature is written."),
];

const DATE: &[(&str, &str)] = &[
    ("42", "The 42nd day of the year is February 11 (in a non-leap year)."),
    ("7", "The 7th day of the year is January 7 (in a non-leap year)."),
    ("13", "The 13th day of the year is January 13 (in a non-leap year)."),
    ("100", "The 100th day of the year is April 10 (in a non-leap year)."),
    (RANDOM, "Every day of the year has its own number and history."),
];

fn table(category: FactCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        FactCategory::Trivia => TRIVIA,
        FactCategory::Math => MATH,
        FactCategory::Date => DATE,
    }
}

/// Look up the canned fact for `number`.
///
/// Unknown numbers fall back to the category's [`RANDOM`] entry, so this
/// always yields a fact.
pub fn local_fact(category: FactCategory, number: &str) -> &'static str {
    let entries = table(category);
    entries
        .iter()
        .find(|(n, _)| *n == number)
        .or_else(|| entries.iter().find(|(n, _)| *n == RANDOM))
        .map(|(_, fact)| *fact)
        .unwrap_or("An interesting fact about a number.")
}

/// Numbers that have a dedicated entry (excluding the random entry)
#[cfg(test)]
fn known_numbers(category: FactCategory) -> impl Iterator<Item = &'static str> {
    table(category)
        .iter()
        .map(|(n, _)| *n)
        .filter(|n| *n != RANDOM)
}
