//! Fetch progress display

pub mod reporter;
