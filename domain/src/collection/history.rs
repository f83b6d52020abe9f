//! Search history rules

use super::entities::HistoryItem;

/// Search history, most recent first, bounded by `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryList {
    items: Vec<HistoryItem>,
    limit: usize,
}

impl HistoryList {
    pub fn new(items: Vec<HistoryItem>, limit: usize) -> Self {
        Self { items, limit }
    }

    /// Record a lookup: any entry with the same (number, category) is
    /// replaced and the new entry moves to the front.
    pub fn record(&mut self, item: HistoryItem) {
        self.items.retain(|h| !h.fact.same_key(&item.fact));
        self.items.insert(0, item);
        self.items.truncate(self.limit);
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|h| h.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<HistoryItem> {
        self.items
    }
}
