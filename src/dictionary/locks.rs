// Per-dictionary mutation locks
//
// Word-level mutations read the whole dictionary, change it in memory and
// write the word list back. Holding the dictionary's lock across that
// sequence serializes concurrent mutations of one dictionary while leaving
// other dictionaries independent.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use super::DictionaryId;

/// Lazily created async lock per dictionary ID
#[derive(Debug, Default)]
pub struct DictionaryLocks {
    locks: Mutex<HashMap<DictionaryId, Arc<AsyncMutex<()>>>>,
}

impl DictionaryLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to a dictionary. Released when the guard drops.
    pub async fn acquire(&self, id: DictionaryId) -> OwnedMutexGuard<()> {
        let lock = self.lock_for(id);
        lock.lock_owned().await
    }

    /// Forget the lock of a deleted dictionary.
    ///
    /// Tasks already holding or waiting on it keep their handle.
    pub fn remove(&self, id: DictionaryId) {
        self.locks.lock().remove(&id);
    }

    /// Number of dictionaries with a live lock entry
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    fn lock_for(&self, id: DictionaryId) -> Arc<AsyncMutex<()>> {
        self.locks
            .lock()
            .entry(id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}

#[cfg(test)]
#[path = "locks_test.rs"]
mod tests;
