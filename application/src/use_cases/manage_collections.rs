//! Favorites and history management
//!
//! Applies the list rules from the domain and persists the result through
//! [`CollectionStore`].

use crate::ports::collection_store::{CollectionStore, StoreError};
use chrono::{SecondsFormat, Utc};
use facts_domain::{
    CollectionLimits, FavoriteFact, FavoritesList, HistoryItem, HistoryList, NumberFact,
};
use std::sync::Arc;
use tracing::debug;

pub struct ManageCollectionsUseCase {
    store: Arc<dyn CollectionStore>,
    limits: CollectionLimits,
}

impl ManageCollectionsUseCase {
    pub fn new(store: Arc<dyn CollectionStore>, limits: CollectionLimits) -> Self {
        Self { store, limits }
    }

    pub fn favorites(&self) -> Vec<FavoriteFact> {
        self.load_favorites().into_items()
    }

    pub fn is_favorite(&self, fact: &NumberFact) -> bool {
        self.load_favorites().contains(fact)
    }

    pub fn get_favorite(&self, id: &str) -> Option<FavoriteFact> {
        self.load_favorites().get(id).cloned()
    }

    /// Add a fact to favorites. Returns `Ok(false)` when it is already saved.
    pub fn add_favorite(&self, fact: &NumberFact) -> Result<bool, StoreError> {
        let mut favorites = self.load_favorites();
        let (millis, time) = now();
        if !favorites.add(FavoriteFact::new(fact.clone(), millis, time)) {
            debug!("{}-{} is already a favorite", fact.number, fact.category);
            return Ok(false);
        }
        self.store.save_favorites(favorites.items())?;
        Ok(true)
    }

    pub fn remove_favorite(&self, id: &str) -> Result<bool, StoreError> {
        let mut favorites = self.load_favorites();
        if !favorites.remove(id) {
            return Ok(false);
        }
        self.store.save_favorites(favorites.items())?;
        Ok(true)
    }

    pub fn history(&self) -> Vec<HistoryItem> {
        self.load_history().into_items()
    }

    /// Record a successful lookup at the front of the history.
    pub fn record_search(&self, fact: &NumberFact) -> Result<HistoryItem, StoreError> {
        let mut history = self.load_history();
        let (millis, time) = now();
        let item = HistoryItem::new(fact.clone(), millis, time);
        history.record(item.clone());
        self.store.save_history(history.items())?;
        Ok(item)
    }

    pub fn remove_history_item(&self, id: &str) -> Result<bool, StoreError> {
        let mut history = self.load_history();
        if !history.remove(id) {
            return Ok(false);
        }
        self.store.save_history(history.items())?;
        Ok(true)
    }

    pub fn clear_history(&self) -> Result<(), StoreError> {
        let mut history = self.load_history();
        history.clear();
        self.store.save_history(history.items())
    }

    fn load_favorites(&self) -> FavoritesList {
        FavoritesList::new(self.store.load_favorites(), self.limits.favorites)
    }

    fn load_history(&self) -> HistoryList {
        HistoryList::new(self.store.load_history(), self.limits.history)
    }
}

fn now() -> (i64, String) {
    let now = Utc::now();
    (
        now.timestamp_millis(),
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}
