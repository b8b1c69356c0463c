//! Sample entity kind.
//!
//! The reference entity the scaffold demonstrates with: one payload
//! field on top of the bookkeeping fields the repository manages.

use crate::mapper::EntityMapper;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use syncdoc_core::{Document, EntityId, SyncedEntity};

/// The persisted sample entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleEntity {
    /// Unique id; nil until first written.
    pub id: EntityId,
    /// Soft-delete flag, owned by the repository.
    pub is_deleted: bool,
    /// Stamped by the repository on every write.
    pub last_modified: SystemTime,
    /// Tick stamp, assigned by the repository.
    pub ticks: u64,
    /// Payload.
    pub some_data: String,
}

impl SampleEntity {
    /// Creates an unsaved sample entity carrying `some_data`.
    #[must_use]
    pub fn new(some_data: impl Into<String>) -> Self {
        Self {
            id: EntityId::nil(),
            is_deleted: false,
            last_modified: SystemTime::UNIX_EPOCH,
            ticks: 0,
            some_data: some_data.into(),
        }
    }
}

impl Document for SampleEntity {
    fn id(&self) -> EntityId {
        self.id
    }

    fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl SyncedEntity for SampleEntity {
    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }

    fn last_modified(&self) -> SystemTime {
        self.last_modified
    }

    fn set_last_modified(&mut self, at: SystemTime) {
        self.last_modified = at;
    }

    fn set_ticks(&mut self, ticks: u64) {
        self.ticks = ticks;
    }
}

/// The wire representation of [`SampleEntity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSample {
    /// Entity id; nil for DTOs that have not been written yet.
    pub id: EntityId,
    /// Payload.
    pub some_data: String,
}

impl ApiSample {
    /// Creates an unsaved DTO carrying `some_data`.
    #[must_use]
    pub fn new(some_data: impl Into<String>) -> Self {
        Self {
            id: EntityId::nil(),
            some_data: some_data.into(),
        }
    }
}

/// Maps between [`ApiSample`] and [`SampleEntity`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleMapper;

impl EntityMapper<ApiSample, SampleEntity> for SampleMapper {
    fn api_from_entity(&self, entity: &SampleEntity) -> ApiSample {
        ApiSample {
            id: entity.id,
            some_data: entity.some_data.clone(),
        }
    }

    fn entity_from_api(&self, api: &ApiSample) -> SampleEntity {
        SampleEntity {
            id: api.id,
            is_deleted: false,
            last_modified: SystemTime::UNIX_EPOCH,
            ticks: 0,
            some_data: api.some_data.clone(),
        }
    }
}
