//! Cross-cutting error types for Vantage.
//!
//! Domain-specific errors (`ApiError`, `StoreError`, `ConfigError`) live in
//! their respective crates. They converge as `anyhow::Error` in `vantage-cli`.

use thiserror::Error;

/// Errors that can be raised by any Vantage crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// User input failed validation before any backend call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value could not be parsed into one of the known enum variants.
    #[error("invalid {field} '{value}'")]
    InvalidValue { field: String, value: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
