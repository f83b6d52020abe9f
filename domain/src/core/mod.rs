//! Core domain concepts shared across all subdomains.
//!
//! - [`category::FactCategory`] — trivia, math or date
//! - [`fact::NumberFact`] — the normalized fact returned by every source
//! - [`request::FactRequest`] — a validated (number, category) request
//! - [`error::ValidationError`] — input validation failures

pub mod category;
pub mod error;
pub mod fact;
pub mod request;
