//! Infrastructure layer for number-facts
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod storage;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlFetchLogger;
pub use providers::{
    HttpSettings, LocalFactsProvider, MathToolsProvider, NumbersApiProvider, ProviderBuildError,
    build_http_client, build_provider_chain,
};
pub use storage::JsonFileCollectionStore;
