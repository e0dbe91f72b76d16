//! Per-game mutual exclusion for round mutations.
//!
//! Round append, round update and finalization for one game must not
//! interleave; otherwise two submissions can both validate against a stale
//! "not finished" read. Different games never contend.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Default)]
pub struct GameLocks {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the mutex for `game_id`.
    fn lock_for(&self, game_id: i64) -> Arc<Mutex<()>> {
        self.locks
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    /// Wait for exclusive access to `game_id`.
    pub async fn acquire(&self, game_id: i64) -> OwnedMutexGuard<()> {
        self.lock_for(game_id).lock_owned().await
    }

    /// Drop the entry for a game nobody is holding, e.g. once it has finished.
    pub fn release(&self, game_id: i64) {
        self.locks
            .remove_if(&game_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
