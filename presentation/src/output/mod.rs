//! Result rendering for the console

pub mod console;
pub mod formatter;
pub mod json;
