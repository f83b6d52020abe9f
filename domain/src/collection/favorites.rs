//! Favorites list rules

use super::entities::FavoriteFact;
use crate::core::fact::NumberFact;

/// Ordered favorites, oldest first, bounded by `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesList {
    items: Vec<FavoriteFact>,
    limit: usize,
}

impl FavoritesList {
    pub fn new(items: Vec<FavoriteFact>, limit: usize) -> Self {
        Self { items, limit }
    }

    /// Add a favorite.
    ///
    /// Returns `false` without changes if a favorite with the same
    /// (number, category) already exists. At capacity the oldest entry is
    /// evicted first.
    pub fn add(&mut self, favorite: FavoriteFact) -> bool {
        if self.contains(&favorite.fact) {
            return false;
        }
        while !self.items.is_empty() && self.items.len() >= self.limit {
            self.items.remove(0);
        }
        self.items.push(favorite);
        true
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|f| f.id != id);
        self.items.len() != before
    }

    pub fn contains(&self, fact: &NumberFact) -> bool {
        self.items.iter().any(|f| f.fact.same_key(fact))
    }

    pub fn get(&self, id: &str) -> Option<&FavoriteFact> {
        self.items.iter().find(|f| f.id == id)
    }

    pub fn items(&self) -> &[FavoriteFact] {
        &self.items
    }

    pub fn into_items(self) -> Vec<FavoriteFact> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::FactCategory;

    fn fav(number: &str, at: i64) -> FavoriteFact {
        FavoriteFact::new(
            NumberFact::new(number, FactCategory::Trivia, "text"),
            at,
            "2026-01-01T00:00:00Z",
        )
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut list = FavoritesList::new(vec![], 10);
        assert!(list.add(fav("42", 1)));
        assert!(!list.add(fav("42", 2)));
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].id, "42-trivia-1");
    }

    #[test]
    fn oldest_is_evicted_at_capacity() {
        let mut list = FavoritesList::new(vec![], 2);
        list.add(fav("1", 1));
        list.add(fav("2", 2));
        list.add(fav("3", 3));
        let numbers: Vec<_> = list.items().iter().map(|f| f.fact.number.as_str()).collect();
        assert_eq!(numbers, vec!["2", "3"]);
    }

    #[test]
    fn remove_and_lookup_by_id() {
        let mut list = FavoritesList::new(vec![fav("7", 1), fav("13", 2)], 10);
        assert!(list.get("13-trivia-2").is_some());
        assert!(list.remove("7-trivia-1"));
        assert!(!list.remove("7-trivia-1"));
        assert!(!list.contains(&NumberFact::new("7", FactCategory::Trivia, "")));
    }
}
