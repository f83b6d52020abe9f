//! Favorites and search history
//!
//! Both lists deduplicate on the fact's natural key (number, category).

pub mod entities;
pub mod favorites;
pub mod history;

pub use entities::{FavoriteFact, HistoryItem};
pub use favorites::FavoritesList;
pub use history::HistoryList;
