//! Entity capability contract.

use std::time::SystemTime;
use syncdoc_store::{Document, EntityId};

/// An entity the synced repository can manage.
///
/// On top of the store-facing [`Document`] accessors this adds setters
/// for the bookkeeping fields the repository owns: the id (for
/// autofill), the soft-delete flag, the last-modified stamp and the
/// tick counter. Implementations hold these as plain fields; the
/// repository overwrites them on every write.
pub trait SyncedEntity: Document {
    /// Assigns the id. Called when a nil-id entity is first written.
    fn set_id(&mut self, id: EntityId);

    /// Returns whether the entity is soft-deleted.
    fn is_deleted(&self) -> bool;

    /// Sets the soft-delete flag.
    fn set_deleted(&mut self, deleted: bool);

    /// Returns when the entity was last written.
    fn last_modified(&self) -> SystemTime;

    /// Sets the last-modified stamp.
    fn set_last_modified(&mut self, at: SystemTime);

    /// Sets the tick stamp.
    fn set_ticks(&mut self, ticks: u64);
}
