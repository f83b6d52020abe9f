//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod collection_store;
pub mod fact_provider;
pub mod fetch_logger;
pub mod fetch_progress;
