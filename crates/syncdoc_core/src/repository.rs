//! Synced repository over a document store.

use crate::config::RepositoryConfig;
use crate::entity::SyncedEntity;
use crate::error::{RepositoryError, RepositoryResult};
use crate::sync::SyncResult;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::SystemTime;
use syncdoc_store::{Document, DocumentStore, EntityId};

/// CRUD plus an incremental change feed over one entity collection.
///
/// The repository owns the tick invariant: every successful write
/// (soft deletes included) stamps the entity with a tick one past the
/// current stored maximum. The store's unique tick index turns
/// concurrent claims on the same tick into
/// [`DuplicateTicks`](syncdoc_store::StoreError::DuplicateTicks)
/// conflicts, which the repository resolves by retrying with a fresh
/// tick up to the configured bound. Winners of each race form a strict
/// global total order; losers land later in that order.
///
/// Deletion is soft: removing an entity rewrites it with the delete
/// flag set and a fresh tick, so sync readers see the deletion as one
/// more change in the feed. Once deleted an entity stays deleted;
/// writes cannot resurrect it.
///
/// Cloning the repository is cheap and shares the underlying store, so
/// one repository can serve many threads.
pub struct SyncedRepository<T, S> {
    store: Arc<S>,
    config: RepositoryConfig,
    _marker: PhantomData<T>,
}

impl<T, S> Clone for SyncedRepository<T, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, S> SyncedRepository<T, S>
where
    T: SyncedEntity,
    S: DocumentStore<T>,
{
    /// Creates a repository over `store` with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, RepositoryConfig::default())
    }

    /// Creates a repository with an explicit configuration.
    pub fn with_config(store: S, config: RepositoryConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the entity with `id`.
    ///
    /// # Errors
    ///
    /// Fails with [`RepositoryError::NotFound`] when no entity has this
    /// id.
    pub fn read(&self, id: EntityId) -> RepositoryResult<T> {
        self.try_read(id)?
            .ok_or(RepositoryError::NotFound { id })
    }

    /// Reads the entity with `id`, or `None` when absent.
    pub fn try_read(&self, id: EntityId) -> RepositoryResult<Option<T>> {
        Ok(self.store.find_by_id(id)?)
    }

    /// Reads all entities matching `filter`.
    ///
    /// Zero matches is an empty vec, never an error.
    pub fn read_where<F>(&self, filter: F) -> RepositoryResult<Vec<T>>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.store.find(&filter)?)
    }

    /// Reads a page of entities in store order.
    pub fn read_page(&self, skip: usize, limit: usize) -> RepositoryResult<Vec<T>> {
        Ok(self.store.find_page(None, skip, limit)?)
    }

    /// Reads a page of entities matching `filter`.
    pub fn read_where_page<F>(&self, filter: F, skip: usize, limit: usize) -> RepositoryResult<Vec<T>>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.store.find_page(Some(&filter), skip, limit)?)
    }

    /// Reads every entity, soft-deleted ones included.
    pub fn read_all(&self) -> RepositoryResult<Vec<T>> {
        Ok(self.store.find_all()?)
    }

    /// Reads only the ids of entities matching `filter`.
    pub fn read_ids<F>(&self, filter: F) -> RepositoryResult<Vec<EntityId>>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.store.find(&filter)?.iter().map(Document::id).collect())
    }

    /// Returns whether an entity with `id` exists, deleted or not.
    pub fn exists(&self, id: EntityId) -> RepositoryResult<bool> {
        Ok(self.store.find_by_id(id)?.is_some())
    }

    /// Counts all entities.
    pub fn count(&self) -> RepositoryResult<u64> {
        Ok(self.store.count(None)?)
    }

    /// Counts entities matching `filter`.
    pub fn count_where<F>(&self, filter: F) -> RepositoryResult<u64>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.store.count(Some(&filter))?)
    }

    /// Returns the highest tick assigned so far, or 0 for an empty
    /// collection.
    ///
    /// Doubles as the sync cursor and as the seed for the next tick.
    pub fn last_tick(&self) -> RepositoryResult<u64> {
        Ok(self.store.max_ticks()?)
    }

    /// Writes `entity`, assigning id, last-modified stamp and a fresh
    /// tick. Returns the entity as stored.
    ///
    /// A nil id is replaced with a generated one. A non-nil id whose
    /// stored copy is soft-deleted keeps the delete flag: writes do not
    /// resurrect.
    ///
    /// # Errors
    ///
    /// Fails with [`RepositoryError::RetryExhausted`] when the
    /// configured attempt bound is spent losing tick races; any other
    /// store error propagates as-is.
    pub fn write(&self, mut entity: T) -> RepositoryResult<T> {
        if entity.id().is_nil() {
            entity.set_id(EntityId::new());
        } else if let Some(current) = self.store.find_by_id(entity.id())? {
            if current.is_deleted() {
                entity.set_deleted(true);
            }
        }

        entity.set_last_modified(SystemTime::now());
        self.upsert_with_fresh_ticks(entity)
    }

    /// Writes each entity in order.
    ///
    /// Not atomic as a batch: a failure leaves earlier entities written.
    pub fn write_many(&self, entities: Vec<T>) -> RepositoryResult<Vec<T>> {
        let mut written = Vec::with_capacity(entities.len());
        for entity in entities {
            written.push(self.write(entity)?);
        }
        Ok(written)
    }

    /// Soft-deletes the entity with `id`.
    ///
    /// The entity is rewritten with the delete flag set, so it receives
    /// a fresh tick and shows up in the deleted partition of sync reads.
    ///
    /// # Errors
    ///
    /// Fails with [`RepositoryError::NotFound`] when no entity has this
    /// id.
    pub fn remove(&self, id: EntityId) -> RepositoryResult<()> {
        let mut entity = self.read(id)?;
        entity.set_deleted(true);
        self.write(entity)?;
        tracing::trace!(%id, "entity soft-deleted");
        Ok(())
    }

    /// Soft-deletes each id in order.
    ///
    /// Not atomic as a batch: a failure leaves earlier entities removed.
    pub fn remove_many(&self, ids: &[EntityId]) -> RepositoryResult<()> {
        for &id in ids {
            self.remove(id)?;
        }
        Ok(())
    }

    /// Reads the incremental changes since `last_sync`.
    ///
    /// Pass 0 for "from the beginning"; pass the returned cursor on the
    /// next call to never see the same change twice.
    pub fn read_synced(&self, last_sync: u64) -> RepositoryResult<SyncResult<T>> {
        self.read_synced_inner(last_sync, None)
    }

    /// Reads the incremental changes since `last_sync`, narrowed by an
    /// additional filter applied to both partitions.
    pub fn read_synced_where<F>(&self, last_sync: u64, additional: F) -> RepositoryResult<SyncResult<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.read_synced_inner(last_sync, Some(&additional))
    }

    /// Re-stamps the entity with a fresh tick, touching nothing else.
    ///
    /// Pulls an entity into the next sync window without a content
    /// change. Returns whether an entity matched the id.
    pub fn update_ticks(&self, id: EntityId) -> RepositoryResult<bool> {
        self.update_first_with_fresh_ticks(&|e: &T| e.id() == id, &|_: &mut T| {})
    }

    /// Applies `apply` to the first entity matching `filter` without
    /// assigning a tick.
    ///
    /// The change stays invisible to sync readers until the entity is
    /// ticked again. Returns whether an entity matched.
    pub fn update<F, U>(&self, filter: F, apply: U) -> RepositoryResult<bool>
    where
        F: Fn(&T) -> bool,
        U: Fn(&mut T),
    {
        Ok(self.store.update_first(&filter, &apply)?)
    }

    /// Applies `apply` to the first entity matching `filter` and stamps
    /// a fresh tick, making the change visible to sync readers.
    ///
    /// Returns whether an entity matched.
    pub fn update_with_ticks<F, U>(&self, filter: F, apply: U) -> RepositoryResult<bool>
    where
        F: Fn(&T) -> bool,
        U: Fn(&mut T),
    {
        self.update_first_with_fresh_ticks(&filter, &apply)
    }

    /// Sync window read.
    ///
    /// The upper bound is captured first so writes racing in during the
    /// call stay outside the window. Each entity is scored by its single
    /// current tick, so the two partitions cannot overlap.
    fn read_synced_inner(
        &self,
        last_sync: u64,
        additional: Option<&dyn Fn(&T) -> bool>,
    ) -> RepositoryResult<SyncResult<T>> {
        let new_last_sync = self.last_tick()?;

        let in_window = |entity: &T| {
            entity.ticks() > last_sync
                && entity.ticks() <= new_last_sync
                && additional.map_or(true, |f| f(entity))
        };

        let new_data = self.store.find(&|e: &T| !e.is_deleted() && in_window(e))?;
        let deleted_data = self.store.find(&|e: &T| e.is_deleted() && in_window(e))?;

        tracing::debug!(
            last_sync,
            new_last_sync,
            new = new_data.len(),
            deleted = deleted_data.len(),
            "synced read"
        );

        Ok(SyncResult {
            last_sync: new_last_sync,
            new_data,
            deleted_data,
        })
    }

    /// Upserts `entity` under the optimistic tick loop.
    fn upsert_with_fresh_ticks(&self, mut entity: T) -> RepositoryResult<T> {
        for attempt in 1..=self.config.write_attempts {
            let ticks = self.last_tick()? + 1;
            entity.set_ticks(ticks);

            match self.store.upsert(&entity) {
                Ok(()) => {
                    tracing::trace!(id = %entity.id(), ticks, "entity written");
                    return Ok(entity);
                }
                Err(err) if err.is_duplicate_ticks() => {
                    tracing::trace!(id = %entity.id(), ticks, attempt, "tick race lost, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(RepositoryError::retry_exhausted(self.config.write_attempts))
    }

    /// Runs a store-side update under the optimistic tick loop.
    fn update_first_with_fresh_ticks(
        &self,
        filter: &dyn Fn(&T) -> bool,
        apply: &dyn Fn(&mut T),
    ) -> RepositoryResult<bool> {
        for attempt in 1..=self.config.write_attempts {
            let ticks = self.last_tick()? + 1;

            match self.store.update_first(filter, &|entity: &mut T| {
                apply(entity);
                entity.set_ticks(ticks);
            }) {
                Ok(matched) => return Ok(matched),
                Err(err) if err.is_duplicate_ticks() => {
                    tracing::trace!(ticks, attempt, "tick race lost, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(RepositoryError::retry_exhausted(self.config.write_attempts))
    }
}
