//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent route configuration bugs.
/// They are raised immediately and never recovered internally.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("route descriptor is missing required field: {0}")]
    MissingField(String),

    #[error("invalid route descriptor: {0}")]
    InvalidDescriptor(String),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
