//! Document capability contract.

use crate::id::EntityId;

/// A value the store can hold.
///
/// The store needs exactly two things from a document: the key it is
/// filed under and the tick value the unique index covers. Everything
/// else about the payload is opaque at this layer.
pub trait Document: Clone + Send + Sync + 'static {
    /// Returns the document key.
    fn id(&self) -> EntityId;

    /// Returns the tick stamp covered by the unique index.
    fn ticks(&self) -> u64;
}
