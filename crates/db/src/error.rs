//! Error type for composite repository operations.
//!
//! Plain storage calls return `sqlx::Error` directly; operations that also
//! run domain validation (question create/update, answer create) return
//! [`DbError`] so both failure kinds propagate with `?`.

use qanda_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain-level failure (validation, not-found, ownership).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An underlying persistence failure, propagated unmodified.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for composite repository return values.
pub type DbResult<T> = Result<T, DbError>;
