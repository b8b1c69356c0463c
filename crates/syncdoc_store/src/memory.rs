//! In-memory document store.

use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use crate::id::EntityId;
use crate::store::{DocumentFilter, DocumentStore, DocumentUpdate};
use parking_lot::RwLock;

/// An in-memory document store.
///
/// Documents live in insertion order behind a single `RwLock`. The
/// unique tick index is enforced the same way a database-side unique
/// index would be: any write that would leave two documents sharing a
/// tick value is rejected wholesale.
///
/// Suitable for unit tests, demos and ephemeral embedding.
///
/// # Thread Safety
///
/// Each operation holds the lock for its full duration, so individual
/// operations are atomic. Sequences of operations are not: callers doing
/// read-then-write (optimistic tick assignment, for instance) must
/// expect [`StoreError::DuplicateTicks`] under contention.
#[derive(Debug)]
pub struct MemoryStore<T> {
    documents: RwLock<Vec<T>>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Document> MemoryStore<T> {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Returns true when the store holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    fn holds_conflicting_ticks(documents: &[T], id: EntityId, ticks: u64) -> bool {
        documents
            .iter()
            .any(|d| d.ticks() == ticks && d.id() != id)
    }
}

impl<T: Document> DocumentStore<T> for MemoryStore<T> {
    fn find_by_id(&self, id: EntityId) -> StoreResult<Option<T>> {
        Ok(self.documents.read().iter().find(|d| d.id() == id).cloned())
    }

    fn find(&self, filter: DocumentFilter<'_, T>) -> StoreResult<Vec<T>> {
        Ok(self
            .documents
            .read()
            .iter()
            .filter(|d| filter(d))
            .cloned()
            .collect())
    }

    fn find_page(
        &self,
        filter: Option<DocumentFilter<'_, T>>,
        skip: usize,
        limit: usize,
    ) -> StoreResult<Vec<T>> {
        Ok(self
            .documents
            .read()
            .iter()
            .filter(|d| filter.map_or(true, |f| f(d)))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> StoreResult<Vec<T>> {
        Ok(self.documents.read().clone())
    }

    fn count(&self, filter: Option<DocumentFilter<'_, T>>) -> StoreResult<u64> {
        let documents = self.documents.read();
        let count = match filter {
            Some(f) => documents.iter().filter(|d| f(d)).count(),
            None => documents.len(),
        };
        Ok(count as u64)
    }

    fn upsert(&self, document: &T) -> StoreResult<()> {
        let mut documents = self.documents.write();

        if Self::holds_conflicting_ticks(&documents, document.id(), document.ticks()) {
            return Err(StoreError::duplicate_ticks(document.ticks()));
        }

        match documents.iter().position(|d| d.id() == document.id()) {
            Some(i) => documents[i] = document.clone(),
            None => documents.push(document.clone()),
        }

        Ok(())
    }

    fn update_first(
        &self,
        filter: DocumentFilter<'_, T>,
        update: DocumentUpdate<'_, T>,
    ) -> StoreResult<bool> {
        let mut documents = self.documents.write();

        let Some(i) = documents.iter().position(|d| filter(d)) else {
            return Ok(false);
        };

        let mut updated = documents[i].clone();
        update(&mut updated);

        let conflict = documents
            .iter()
            .enumerate()
            .any(|(j, d)| j != i && d.ticks() == updated.ticks());
        if conflict {
            return Err(StoreError::duplicate_ticks(updated.ticks()));
        }

        documents[i] = updated;
        Ok(true)
    }

    fn max_ticks(&self) -> StoreResult<u64> {
        Ok(self
            .documents
            .read()
            .iter()
            .map(Document::ticks)
            .max()
            .unwrap_or(0))
    }

    fn clear(&self) -> StoreResult<()> {
        self.documents.write().clear();
        Ok(())
    }
}
