//! Error classification
//!
//! Fact sources fail in many shapes: HTTP statuses, empty bodies, timeouts,
//! connection errors. [`classify`] maps a [`RawFailure`] onto the small
//! [`ErrorKind`] taxonomy exactly once, at the boundary where a result is
//! handed to the caller.

mod classifier;
mod kind;

pub use classifier::{RawFailure, classify};
pub use kind::{ClassifiedError, ErrorKind};
