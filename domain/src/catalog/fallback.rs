//! Synthetic fallback facts
//!
//! Used by the resilient query mode when every source has failed: instead of
//! surfacing an error, a fact is drawn pseudo-randomly from a small pool.

use crate::core::category::FactCategory;
use crate::core::fact::NumberFact;
use crate::core::request::FactRequest;
use rand::Rng;
use rand::seq::SliceRandom;

const TRIVIA_POOL: &[&str] = &[
    "42 is the answer to the ultimate question of life, the universe, and everything.",
    "7 is considered a lucky number in many cultures.",
    "13 is often considered unlucky in Western culture.",
    "0 is the only number that cannot be represented in Roman numerals.",
    "1 is the first natural number and the foundation of all counting.",
];

const MATH_POOL: &[&str] = &[
    "42 is the product of 6 and 7.",
    "7 is a prime number.",
    "13 is also a prime number.",
    "0 is the additive identity element.",
    "1 is the multiplicative identity element.",
];

const DATE_POOL: &[&str] = &[
    "42 days from now will be a special day.",
    "7 days make up a week.",
    "13 is the number of weeks in a quarter.",
    "0 represents the beginning of time.",
    "1 represents the first day of any month.",
];

/// The fallback pool for a category
pub fn fallback_pool(category: FactCategory) -> &'static [&'static str] {
    match category {
        FactCategory::Trivia => TRIVIA_POOL,
        FactCategory::Math => MATH_POOL,
        FactCategory::Date => DATE_POOL,
    }
}

/// Build a synthetic fact for `request`.
///
/// Random requests get a number in `1..=100`; otherwise the requested number
/// is echoed. The fact is not timestamped.
pub fn synthetic_fact<R: Rng>(request: &FactRequest, rng: &mut R) -> NumberFact {
    let category = request.category();
    let text = fallback_pool(category)
        .choose(rng)
        .copied()
        .unwrap_or("Every number has a story.");

    let number = if request.is_random() {
        rng.gen_range(1..=100u32).to_string()
    } else {
        request.number().to_string()
    };

    NumberFact::new(number, category, text)
}

/// Every pool fact for `category`, numbered from 1 in pool order.
pub fn category_facts(category: FactCategory) -> Vec<NumberFact> {
    fallback_pool(category)
        .iter()
        .enumerate()
        .map(|(i, text)| NumberFact::new((i + 1).to_string(), category, *text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn synthetic_fact_comes_from_category_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for category in FactCategory::ALL {
            let fact = synthetic_fact(&FactRequest::new("42", category), &mut rng);
            assert_eq!(fact.category, category);
            assert_eq!(fact.number, "42");
            assert!(fallback_pool(category).contains(&fact.fact.as_str()));
        }
    }

    #[test]
    fn random_request_gets_number_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let fact = synthetic_fact(&FactRequest::random(FactCategory::Math), &mut rng);
            let n: u32 = fact.number.parse().unwrap();
            assert!((1..=100).contains(&n));
        }
    }

    #[test]
    fn pools_have_five_entries() {
        for category in FactCategory::ALL {
            assert_eq!(fallback_pool(category).len(), 5);
        }
    }

    #[test]
    fn category_facts_are_numbered_in_pool_order() {
        let facts = category_facts(FactCategory::Date);
        let numbers: Vec<_> = facts.iter().map(|f| f.number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(facts[1].fact, "7 days make up a week.");
        assert!(facts.iter().all(|f| f.category == FactCategory::Date));
    }
}
