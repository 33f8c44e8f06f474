//! Error types for wompi-core.

use crate::ids::IdError;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while inspecting or assembling payment records.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A record (or a required part of one) is absent.
    #[error("{0} not found")]
    NotFound(String),

    /// Invalid identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] naming the missing entity.
    #[must_use]
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound(entity.into())
    }
}
