//! Shared test entity and repository constructor.

use std::time::SystemTime;
use syncdoc_core::{Document, EntityId, MemoryStore, SyncedEntity, SyncedRepository};

/// The entity kind integration tests run against.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: EntityId,
    pub deleted: bool,
    pub modified: SystemTime,
    pub ticks: u64,
    pub data: String,
}

impl Document for Item {
    fn id(&self) -> EntityId {
        self.id
    }

    fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl SyncedEntity for Item {
    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.deleted = deleted;
    }

    fn last_modified(&self) -> SystemTime {
        self.modified
    }

    fn set_last_modified(&mut self, at: SystemTime) {
        self.modified = at;
    }

    fn set_ticks(&mut self, ticks: u64) {
        self.ticks = ticks;
    }
}

/// A fresh item carrying `data`, with an assigned id.
pub fn item(data: &str) -> Item {
    Item {
        id: EntityId::new(),
        deleted: false,
        modified: SystemTime::UNIX_EPOCH,
        ticks: 0,
        data: data.to_string(),
    }
}

/// A repository over a fresh in-memory store.
pub fn repository() -> SyncedRepository<Item, MemoryStore<Item>> {
    SyncedRepository::new(MemoryStore::new())
}
