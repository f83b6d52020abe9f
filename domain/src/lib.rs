//! Domain layer for number-facts
//!
//! This crate contains the core entities, value objects and pure rules.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Facts
//!
//! A [`NumberFact`] is the normalized result of asking any source about a
//! number in a [`FactCategory`]. Requests are keyed by [`FactRequest`].
//!
//! ## Classification
//!
//! Raw source failures are mapped onto [`ErrorKind`] by [`classify`], once,
//! at the boundary where a result is handed to the caller.
//!
//! ## Catalog
//!
//! Static data that keeps the app useful offline: the local lookup table and
//! the synthetic fallback pools.

pub mod catalog;
pub mod classification;
pub mod collection;
pub mod config;
pub mod core;
pub mod providers;

// Re-export commonly used types
pub use catalog::{category_facts, fallback_pool, local_fact, synthetic_fact};
pub use classification::{ClassifiedError, ErrorKind, RawFailure, classify};
pub use collection::{FavoriteFact, FavoritesList, HistoryItem, HistoryList};
pub use config::{
    CollectionLimits, ConfigIssue, ConfigIssueCode, OutputFormat, QueryConfig, QueryMode,
    Severity,
};
pub use self::core::{
    category::{FactCategory, UnknownCategory},
    error::ValidationError,
    fact::NumberFact,
    request::{FactRequest, RANDOM},
};
pub use providers::{MathToolsConfig, NumbersApiConfig, ProviderConfig, ProviderId};
