//! Persistence port for favorites and history

use facts_domain::{FavoriteFact, HistoryItem};
use thiserror::Error;

/// Errors raised when saved lists cannot be written
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Keyed persistence for the two saved-fact lists.
///
/// Loads never fail: unreadable data is treated as an empty list.
pub trait CollectionStore: Send + Sync {
    fn load_favorites(&self) -> Vec<FavoriteFact>;

    fn save_favorites(&self, favorites: &[FavoriteFact]) -> Result<(), StoreError>;

    fn load_history(&self) -> Vec<HistoryItem>;

    fn save_history(&self, history: &[HistoryItem]) -> Result<(), StoreError>;
}
