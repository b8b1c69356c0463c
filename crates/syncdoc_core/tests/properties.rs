//! Property coverage for the tick and sync invariants.

mod common;

use common::{item, repository};
use proptest::prelude::*;
use std::collections::HashSet;
use syncdoc_core::EntityId;

/// One step of a randomized workload. The indices are resolved against
/// the ids written so far, so every step is applicable.
#[derive(Debug, Clone)]
enum Step {
    Write(String),
    Rewrite(usize),
    Remove(usize),
    Touch(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Step::Write),
        (0usize..64).prop_map(Step::Rewrite),
        (0usize..64).prop_map(Step::Remove),
        (0usize..64).prop_map(Step::Touch),
    ]
}

proptest! {
    /// No workload ever produces two entities sharing a tick, and the
    /// tick maximum always matches the reported cursor.
    #[test]
    fn ticks_stay_unique(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let repo = repository();
        let mut ids: Vec<EntityId> = Vec::new();

        for step in steps {
            match step {
                Step::Write(data) => {
                    ids.push(repo.write(item(&data)).unwrap().id);
                }
                Step::Rewrite(i) if !ids.is_empty() => {
                    let id = ids[i % ids.len()];
                    let current = repo.read(id).unwrap();
                    repo.write(current).unwrap();
                }
                Step::Remove(i) if !ids.is_empty() => {
                    repo.remove(ids[i % ids.len()]).unwrap();
                }
                Step::Touch(i) if !ids.is_empty() => {
                    repo.update_ticks(ids[i % ids.len()]).unwrap();
                }
                _ => {}
            }

            let all = repo.read_all().unwrap();
            let ticks: HashSet<u64> = all.iter().map(|e| e.ticks).collect();
            prop_assert_eq!(ticks.len(), all.len());

            let max = all.iter().map(|e| e.ticks).max().unwrap_or(0);
            prop_assert_eq!(repo.last_tick().unwrap(), max);
        }
    }

    /// Walking the cursor from zero accumulates exactly the live and
    /// deleted partitions of the final state, with no overlap.
    #[test]
    fn cursor_walk_matches_state(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let repo = repository();
        let mut ids: Vec<EntityId> = Vec::new();

        for step in steps {
            match step {
                Step::Write(data) => {
                    ids.push(repo.write(item(&data)).unwrap().id);
                }
                Step::Rewrite(i) if !ids.is_empty() => {
                    let id = ids[i % ids.len()];
                    let current = repo.read(id).unwrap();
                    repo.write(current).unwrap();
                }
                Step::Remove(i) if !ids.is_empty() => {
                    repo.remove(ids[i % ids.len()]).unwrap();
                }
                Step::Touch(i) if !ids.is_empty() => {
                    repo.update_ticks(ids[i % ids.len()]).unwrap();
                }
                _ => {}
            }
        }

        let all = repo.read_all().unwrap();
        let live: HashSet<EntityId> = all.iter().filter(|e| !e.deleted).map(|e| e.id).collect();
        let removed: HashSet<EntityId> = all.iter().filter(|e| e.deleted).map(|e| e.id).collect();

        let mut cursor = 0;
        let mut seen_new = HashSet::new();
        let mut seen_deleted = HashSet::new();
        loop {
            let synced = repo.read_synced(cursor).unwrap();
            seen_new.extend(synced.new_data.iter().map(|e| e.id));
            seen_deleted.extend(synced.deleted_data.iter().map(|e| e.id));
            if synced.last_sync == cursor {
                break;
            }
            cursor = synced.last_sync;
        }

        prop_assert_eq!(seen_new, live);
        prop_assert_eq!(seen_deleted, removed);
    }
}
