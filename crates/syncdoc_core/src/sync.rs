//! Sync read result.

/// The outcome of an incremental sync read.
///
/// `last_sync` is the cursor the caller passes back on the next call.
/// Entities whose latest tick falls inside the window partition by
/// their soft-delete flag: an entity appears in `new_data` or in
/// `deleted_data`, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncResult<T> {
    /// Upper bound of the window; the next cursor.
    pub last_sync: u64,
    /// Live entities changed inside the window.
    pub new_data: Vec<T>,
    /// Soft-deleted entities whose deletion tick falls inside the window.
    pub deleted_data: Vec<T>,
}

impl<T> SyncResult<T> {
    /// Returns true when the window contained no changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.new_data.is_empty() && self.deleted_data.is_empty()
    }
}
