//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod fact_query;
pub mod fact_service;
pub mod manage_collections;
pub mod orchestrator;
