//! Error types for repository operations.

use syncdoc_store::{EntityId, StoreError};
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur in synced repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying document store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A strict read did not find the entity.
    #[error("entity {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: EntityId,
    },

    /// A tick-assigning write kept losing the tick race.
    ///
    /// Fatal: sustained contention at this level means the retry bound
    /// is misconfigured or the unique tick index is missing.
    #[error("write tries limit exceeded after {attempts} attempts")]
    RetryExhausted {
        /// How many attempts were made.
        attempts: u32,
    },
}

impl RepositoryError {
    /// Creates a not-found error.
    pub const fn not_found(id: EntityId) -> Self {
        Self::NotFound { id }
    }

    /// Creates a retry-exhausted error.
    pub const fn retry_exhausted(attempts: u32) -> Self {
        Self::RetryExhausted { attempts }
    }

    /// Returns true if this is the not-found condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
