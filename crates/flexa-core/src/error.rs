//! Domain-level error types.

use thiserror::Error;

/// Domain errors - raised when constructing an `AccessToken` from an empty string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}
