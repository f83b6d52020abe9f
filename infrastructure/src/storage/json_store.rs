//! JSON-file collection store
//!
//! Keeps `favorites.json` and `history.json` side by side in one directory.
//! Each save rewrites the whole list through a temporary file and a rename.

use facts_application::ports::collection_store::{CollectionStore, StoreError};
use facts_domain::{FavoriteFact, HistoryItem};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const FAVORITES_FILE: &str = "favorites.json";
const HISTORY_FILE: &str = "history.json";

pub struct JsonFileCollectionStore {
    dir: PathBuf,
}

impl JsonFileCollectionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_list<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        let path = self.dir.join(file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(items) => items,
            Err(e) => {
                warn!("Ignoring unreadable {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    fn write_list<T: Serialize>(&self, file: &str, items: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, serde_json::to_vec_pretty(items)?)?;
        fs::rename(&tmp, &path)?;

        debug!("Wrote {} entries to {}", items.len(), path.display());
        Ok(())
    }
}

impl CollectionStore for JsonFileCollectionStore {
    fn load_favorites(&self) -> Vec<FavoriteFact> {
        self.read_list(FAVORITES_FILE)
    }

    fn save_favorites(&self, favorites: &[FavoriteFact]) -> Result<(), StoreError> {
        self.write_list(FAVORITES_FILE, favorites)
    }

    fn load_history(&self) -> Vec<HistoryItem> {
        self.read_list(HISTORY_FILE)
    }

    fn save_history(&self, history: &[HistoryItem]) -> Result<(), StoreError> {
        self.write_list(HISTORY_FILE, history)
    }
}
