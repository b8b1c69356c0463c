//! Error types for document store operations.

use std::io;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique tick index rejected a write.
    ///
    /// A different document already holds this tick value. Writers that
    /// assign ticks optimistically treat this as a retryable conflict;
    /// every other error aborts the operation.
    #[error("duplicate ticks: {ticks} is already taken")]
    DuplicateTicks {
        /// The conflicting tick value.
        ticks: u64,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Any other store-side failure.
    #[error("backend error: {message}")]
    Backend {
        /// Description of the failure.
        message: String,
    },
}

impl StoreError {
    /// Creates a duplicate-ticks error.
    pub const fn duplicate_ticks(ticks: u64) -> Self {
        Self::DuplicateTicks { ticks }
    }

    /// Creates a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Returns true if this is a uniqueness conflict on the tick index.
    #[must_use]
    pub const fn is_duplicate_ticks(&self) -> bool {
        matches!(self, Self::DuplicateTicks { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ticks_classifier() {
        assert!(StoreError::duplicate_ticks(7).is_duplicate_ticks());
        assert!(!StoreError::backend("down").is_duplicate_ticks());
    }

    #[test]
    fn display_includes_ticks() {
        let err = StoreError::duplicate_ticks(42);
        assert!(err.to_string().contains("42"));
    }
}
