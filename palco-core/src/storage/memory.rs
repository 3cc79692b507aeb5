//! In-memory storage (non-persistent, for tests and ephemeral runs).

use std::collections::HashMap;
use std::sync::Mutex;

use super::Storage;
use crate::error::{PalcoError, PalcoResult};

/// Keeps payloads in a map. Dropping the storage drops the data.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> PalcoError {
    PalcoError::Storage("lock poisoned: a thread panicked while holding it".to_string())
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> PalcoResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> PalcoResult<()> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PalcoResult<()> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }
}
