//! Per-trainer, per-kind mutual exclusion.
//!
//! A turn reads its encounter, checks that no sibling encounter of the same
//! kind is active, then writes the encounter and the shared team back. All of
//! that is only consistent if no other turn of the same trainer and kind runs
//! in between, so each (trainer, kind) key gets its own async mutex. Other
//! trainers, and the other kind of the same trainer, proceed in parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dojo_battle::EncounterKind;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::repository::TrainerId;

pub type LockKey = (TrainerId, EncounterKind);

#[derive(Debug, Default)]
pub struct EncounterLocks {
    locks: Mutex<HashMap<LockKey, Arc<AsyncMutex<()>>>>,
}

impl EncounterLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to one trainer's encounters of a kind.
    /// Released on drop.
    pub async fn acquire(&self, key: LockKey) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            // Only the map holds an idle entry; holders and waiters own a clone.
            locks.retain(|k, lock| *k == key || Arc::strong_count(lock) > 1);
            locks.entry(key).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Number of keys currently tracked
    pub fn len(&self) -> usize {
        self.locks.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
