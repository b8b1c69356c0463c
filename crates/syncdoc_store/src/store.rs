//! Document store trait definition.

use crate::document::Document;
use crate::error::StoreResult;
use crate::id::EntityId;

/// Predicate over documents, passed by reference so the trait stays
/// object-safe.
pub type DocumentFilter<'a, T> = &'a dyn Fn(&T) -> bool;

/// In-place mutation applied to a stored document.
pub type DocumentUpdate<'a, T> = &'a dyn Fn(&mut T);

/// A collection of documents keyed by [`EntityId`].
///
/// Stores are **dumb containers**: they hold documents, answer filtered
/// reads, and enforce a single uniqueness constraint on the tick field.
/// Tick assignment, soft-delete and retry policy all live above the
/// store.
///
/// # Invariants
///
/// - `upsert` replaces the document with the same id, or inserts it
/// - `upsert` and `update_first` fail with
///   [`StoreError::DuplicateTicks`](crate::StoreError::DuplicateTicks)
///   when the written tick value is already held by a *different*
///   document, and leave the store unchanged in that case
/// - unfiltered reads return documents in insertion order
/// - stores must be `Send + Sync` for concurrent access
///
/// # Implementors
///
/// - [`MemoryStore`](crate::MemoryStore) - in-memory reference
///   implementation
pub trait DocumentStore<T: Document>: Send + Sync {
    /// Looks up a document by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup cannot be served.
    fn find_by_id(&self, id: EntityId) -> StoreResult<Option<T>>;

    /// Returns all documents matching `filter`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan cannot be served.
    fn find(&self, filter: DocumentFilter<'_, T>) -> StoreResult<Vec<T>>;

    /// Returns a page of matching documents.
    ///
    /// With no filter every document is eligible. The first `skip`
    /// matches are dropped, then at most `limit` are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan cannot be served.
    fn find_page(
        &self,
        filter: Option<DocumentFilter<'_, T>>,
        skip: usize,
        limit: usize,
    ) -> StoreResult<Vec<T>>;

    /// Returns every document in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan cannot be served.
    fn find_all(&self) -> StoreResult<Vec<T>>;

    /// Counts documents matching `filter` (all documents when `None`).
    ///
    /// # Errors
    ///
    /// Returns an error if the count cannot be served.
    fn count(&self, filter: Option<DocumentFilter<'_, T>>) -> StoreResult<u64>;

    /// Replaces the document with the same id, or inserts a new one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateTicks`](crate::StoreError::DuplicateTicks)
    /// if a different document already holds `document.ticks()`; the
    /// store is left unchanged in that case.
    fn upsert(&self, document: &T) -> StoreResult<()>;

    /// Applies `update` to the first document matching `filter`.
    ///
    /// Returns whether a document matched. The updated document is
    /// checked against the unique tick index before it is committed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateTicks`](crate::StoreError::DuplicateTicks)
    /// if the update would duplicate another document's tick value; the
    /// matched document is left unchanged in that case.
    fn update_first(
        &self,
        filter: DocumentFilter<'_, T>,
        update: DocumentUpdate<'_, T>,
    ) -> StoreResult<bool>;

    /// Returns the maximum tick value stored, or 0 when empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan cannot be served.
    fn max_ticks(&self) -> StoreResult<u64>;

    /// Removes every document.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared.
    fn clear(&self) -> StoreResult<()>;
}
