//! Entity service: DTO-facing orchestration over the synced repository.

use crate::mapper::EntityMapper;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use syncdoc_core::{
    Document, DocumentStore, EntityId, RepositoryResult, SyncedEntity, SyncedRepository,
};

/// The sync envelope returned to DTO callers.
///
/// Deleted entities are reported by id only; callers only need to know
/// which records to drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSync<A> {
    /// Live entities changed inside the window.
    pub data: Vec<A>,
    /// Ids soft-deleted inside the window.
    pub deleted: Vec<EntityId>,
    /// The next cursor.
    pub last_sync: u64,
}

/// DTO-facing operations over one entity collection.
///
/// A thin composition of a [`SyncedRepository`] and an [`EntityMapper`];
/// it contributes no algorithmic content of its own.
pub struct EntityService<A, E, S, M> {
    repository: SyncedRepository<E, S>,
    mapper: M,
    _marker: PhantomData<fn() -> A>,
}

impl<A, E, S, M> EntityService<A, E, S, M>
where
    E: SyncedEntity,
    S: DocumentStore<E>,
    M: EntityMapper<A, E>,
{
    /// Creates a service over `repository` using `mapper`.
    pub fn new(repository: SyncedRepository<E, S>, mapper: M) -> Self {
        Self {
            repository,
            mapper,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &SyncedRepository<E, S> {
        &self.repository
    }

    /// Reads the entity with `id` as its external representation.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error when no entity has this id.
    pub fn read(&self, id: EntityId) -> RepositoryResult<A> {
        let entity = self.repository.read(id)?;
        Ok(self.mapper.api_from_entity(&entity))
    }

    /// Reads a page of entities in store order.
    pub fn read_page(&self, skip: usize, limit: usize) -> RepositoryResult<Vec<A>> {
        let entities = self.repository.read_page(skip, limit)?;
        Ok(self.mapper.api_from_entities(&entities))
    }

    /// Reads all entities matching `filter`.
    pub fn read_where<F>(&self, filter: F) -> RepositoryResult<Vec<A>>
    where
        F: Fn(&E) -> bool,
    {
        let entities = self.repository.read_where(filter)?;
        Ok(self.mapper.api_from_entities(&entities))
    }

    /// Reads a page of entities matching `filter`.
    pub fn read_where_page<F>(&self, filter: F, skip: usize, limit: usize) -> RepositoryResult<Vec<A>>
    where
        F: Fn(&E) -> bool,
    {
        let entities = self.repository.read_where_page(filter, skip, limit)?;
        Ok(self.mapper.api_from_entities(&entities))
    }

    /// Reads every entity, soft-deleted ones included.
    pub fn read_all(&self) -> RepositoryResult<Vec<A>> {
        let entities = self.repository.read_all()?;
        Ok(self.mapper.api_from_entities(&entities))
    }

    /// Returns whether an entity with `id` exists, deleted or not.
    pub fn exists(&self, id: EntityId) -> RepositoryResult<bool> {
        self.repository.exists(id)
    }

    /// Writes the entity described by `api`.
    ///
    /// Returns the stored state as a DTO, including the assigned id.
    pub fn write(&self, api: &A) -> RepositoryResult<A> {
        let entity = self.mapper.entity_from_api(api);
        let written = self.repository.write(entity)?;
        Ok(self.mapper.api_from_entity(&written))
    }

    /// Writes each DTO in order.
    ///
    /// Not atomic as a batch: a failure leaves earlier entities written.
    pub fn write_many(&self, api: &[A]) -> RepositoryResult<Vec<A>> {
        let mut written = Vec::with_capacity(api.len());
        for item in api {
            written.push(self.write(item)?);
        }
        Ok(written)
    }

    /// Soft-deletes the entity with `id`.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error when no entity has this id.
    pub fn remove(&self, id: EntityId) -> RepositoryResult<()> {
        self.repository.remove(id)
    }

    /// Soft-deletes each id in order. Not atomic as a batch.
    pub fn remove_many(&self, ids: &[EntityId]) -> RepositoryResult<()> {
        self.repository.remove_many(ids)
    }

    /// Soft-deletes the entity a DTO refers to.
    pub fn remove_api(&self, api: &A) -> RepositoryResult<()> {
        let entity = self.mapper.entity_from_api(api);
        self.repository.remove(entity.id())
    }

    /// Soft-deletes the entities a batch of DTOs refer to. Not atomic.
    pub fn remove_api_many(&self, api: &[A]) -> RepositoryResult<()> {
        for item in api {
            self.remove_api(item)?;
        }
        Ok(())
    }

    /// Reads the incremental changes since `last_sync` as a wire
    /// envelope.
    pub fn sync(&self, last_sync: u64) -> RepositoryResult<ApiSync<A>> {
        let synced = self.repository.read_synced(last_sync)?;
        Ok(self.envelope(synced))
    }

    /// Reads the incremental changes since `last_sync`, narrowed by an
    /// additional entity filter.
    pub fn sync_where<F>(&self, last_sync: u64, additional: F) -> RepositoryResult<ApiSync<A>>
    where
        F: Fn(&E) -> bool,
    {
        let synced = self.repository.read_synced_where(last_sync, additional)?;
        Ok(self.envelope(synced))
    }

    fn envelope(&self, synced: syncdoc_core::SyncResult<E>) -> ApiSync<A> {
        ApiSync {
            data: self.mapper.api_from_entities(&synced.new_data),
            deleted: synced.deleted_data.iter().map(Document::id).collect(),
            last_sync: synced.last_sync,
        }
    }
}
