//! syncdoc walkthrough.
//!
//! Demonstrates the full scaffold:
//! - an in-memory document store with a unique tick index
//! - the synced repository assigning ticks optimistically
//! - the DTO service layer and its sync envelope
//!
//! Run with: cargo run -p sample_sync
//! Set RUST_LOG=trace to watch tick assignment.

use syncdoc_core::{RepositoryResult, SyncedRepository};
use syncdoc_service::{ApiSample, EntityService, SampleEntity, SampleMapper};
use syncdoc_store::MemoryStore;

fn main() -> RepositoryResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store: MemoryStore<SampleEntity> = MemoryStore::new();
    let repository = SyncedRepository::new(store);
    let service = EntityService::new(repository, SampleMapper);

    // A client starts from cursor 0 and pulls everything.
    let first = service.write(&ApiSample::new("first"))?;
    let second = service.write(&ApiSample::new("second"))?;
    tracing::info!(first = %first.id, second = %second.id, "wrote two samples");

    let synced = service.sync(0)?;
    println!(
        "initial sync: {} new, {} deleted, cursor {}",
        synced.data.len(),
        synced.deleted.len(),
        synced.last_sync
    );

    // Deleting is a write too: the client sees it on the next pull.
    service.remove(first.id)?;

    let synced = service.sync(synced.last_sync)?;
    println!(
        "after remove: {} new, {} deleted, cursor {}",
        synced.data.len(),
        synced.deleted.len(),
        synced.last_sync
    );

    // A field update without ticks stays invisible to sync readers
    // until the entity is ticked again.
    let id = second.id;
    service
        .repository()
        .update(|e| e.id == id, |e| e.some_data = "second, revised".to_string())?;

    let quiet = service.sync(synced.last_sync)?;
    println!("after plain update: {} new (expected 0)", quiet.data.len());

    service.repository().update_ticks(id)?;

    let synced = service.sync(synced.last_sync)?;
    println!(
        "after update_ticks: {:?} at cursor {}",
        synced.data[0].some_data, synced.last_sync
    );

    Ok(())
}
