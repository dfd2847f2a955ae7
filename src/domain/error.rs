//! Domain error types for the DailyUs application.
//!
//! These errors represent data-access failures that can occur during
//! feed and mood operations. They are caught at the controller boundary
//! and converted to user-visible messages; none of them should crash a view.

use thiserror::Error;

/// Errors surfaced by the data access layer.
#[derive(Debug, Error)]
pub enum DataError {
    /// The referenced post or response id does not exist in the canonical store.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A caller-side precondition was violated before any store mutation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Any other adapter failure. Optimistic UI state must be rolled back
    /// when an operation resolves to this.
    #[error("Operation failed: {0}")]
    Transient(#[from] anyhow::Error),
}

impl DataError {
    pub fn not_found(what: impl Into<String>) -> Self {
        DataError::NotFound(what.into())
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        DataError::Validation(reason.into())
    }
}

pub type DataResult<T> = Result<T, DataError>;
