//! Local persistence for saved facts.

mod json_store;

pub use json_store::JsonFileCollectionStore;
