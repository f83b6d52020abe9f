//! Domain error types

use thiserror::Error;

/// Errors raised while validating a fact request from user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a number.")]
    NumberRequired,

    #[error("The number must be in digit format.")]
    InvalidNumber(String),

    #[error("Invalid form data.")]
    InvalidCategory(String),
}
