//! Application layer for number-facts
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    collection_store::{CollectionStore, StoreError},
    fact_provider::{FactProvider, ProviderError},
    fetch_logger::{FetchEvent, FetchLogger, NoFetchLogger},
    fetch_progress::{FetchProgressNotifier, NoFetchProgress},
};
pub use use_cases::fact_query::{FactQueryClient, QueryHandle, QueryState};
pub use use_cases::fact_service::FactService;
pub use use_cases::manage_collections::ManageCollectionsUseCase;
pub use use_cases::orchestrator::FactOrchestrator;
