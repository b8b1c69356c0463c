//! Concurrent writer behavior: the unique tick index plus bounded retry
//! must serialize every mutation into one contiguous tick sequence.

mod common;

use common::{item, repository};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use syncdoc_core::EntityId;

const WRITERS: usize = 4;
const WRITES_PER_THREAD: usize = 25;

#[test]
fn concurrent_writes_produce_contiguous_unique_ticks() {
    let repo = repository();

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let repo = repo.clone();
            thread::spawn(move || {
                for i in 0..WRITES_PER_THREAD {
                    repo.write(item(&format!("{w}-{i}"))).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let total = (WRITERS * WRITES_PER_THREAD) as u64;
    let all = repo.read_all().unwrap();
    assert_eq!(all.len() as u64, total);

    let mut ticks: Vec<u64> = all.iter().map(|i| i.ticks).collect();
    ticks.sort_unstable();
    let expected: Vec<u64> = (1..=total).collect();
    assert_eq!(ticks, expected);
    assert_eq!(repo.last_tick().unwrap(), total);
}

#[test]
fn sync_reader_catches_up_with_concurrent_writers() {
    let repo = repository();
    let written: Arc<Mutex<Vec<EntityId>>> = Arc::new(Mutex::new(Vec::new()));

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let repo = repo.clone();
            let written = Arc::clone(&written);
            thread::spawn(move || {
                for i in 0..WRITES_PER_THREAD {
                    let entity = repo.write(item(&format!("{w}-{i}"))).unwrap();
                    written.lock().unwrap().push(entity.id);
                }
            })
        })
        .collect();

    let total = (WRITERS * WRITES_PER_THREAD) as u64;
    let deadline = Instant::now() + Duration::from_secs(20);
    let mut cursor = 0;
    let mut seen: HashSet<EntityId> = HashSet::new();

    while cursor < total && Instant::now() < deadline {
        let synced = repo.read_synced(cursor).unwrap();
        for entity in &synced.new_data {
            seen.insert(entity.id);
        }
        cursor = synced.last_sync;
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(seen.len() as u64, total);
    let written = written.lock().unwrap();
    let expected: HashSet<EntityId> = written.iter().copied().collect();
    assert_eq!(seen, expected);
}

#[test]
fn concurrent_removes_and_writes_keep_ticks_unique() {
    let repo = repository();

    let targets: Vec<EntityId> = (0..20)
        .map(|i| repo.write(item(&i.to_string())).unwrap().id)
        .collect();

    let remover = {
        let repo = repo.clone();
        let targets = targets.clone();
        thread::spawn(move || {
            for id in targets {
                repo.remove(id).unwrap();
            }
        })
    };
    let writer = {
        let repo = repo.clone();
        thread::spawn(move || {
            for i in 0..20 {
                repo.write(item(&format!("new-{i}"))).unwrap();
            }
        })
    };

    remover.join().unwrap();
    writer.join().unwrap();

    let all = repo.read_all().unwrap();
    let ticks: HashSet<u64> = all.iter().map(|i| i.ticks).collect();
    assert_eq!(ticks.len(), all.len());
    assert_eq!(
        all.iter().filter(|i| i.deleted).count(),
        targets.len()
    );
}
