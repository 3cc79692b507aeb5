//! Key-value persistence for palco collections.
//!
//! Every mutating store call writes its full collection through here: one
//! read, one replace, one write. Payloads are JSON documents under three
//! fixed keys; there is no batching and no partial update at this layer.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{PalcoError, PalcoResult};

/// Key for the signed-in account (absent when anonymous).
pub const SESSION_KEY: &str = "session";
/// Key for the full account collection.
pub const ACCOUNTS_KEY: &str = "accounts";
/// Key for the full event collection.
pub const EVENTS_KEY: &str = "events";

/// Synchronous key-value backend the stores persist through.
pub trait Storage: Send + Sync {
    /// Read the raw payload stored under `key`, if any.
    fn read(&self, key: &str) -> PalcoResult<Option<String>>;

    /// Replace the payload stored under `key`.
    fn write(&self, key: &str, payload: &str) -> PalcoResult<()>;

    /// Drop the payload stored under `key`. Removing an absent key is fine.
    fn remove(&self, key: &str) -> PalcoResult<()>;
}

/// Load and deserialize the record under `key`.
///
/// Unreadable or malformed payloads degrade to `None` (with a warning in
/// the log) so callers fall back to empty or seed data instead of failing.
pub fn load<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let payload = match storage.read(key) {
        Ok(payload) => payload?,
        Err(err) => {
            warn!(key, %err, "failed to read persisted record");
            return None;
        }
    };

    match serde_json::from_str(&payload) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, %err, "ignoring malformed persisted record");
            None
        }
    }
}

/// Serialize and persist `value` under `key`.
pub fn save<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) -> PalcoResult<()> {
    let payload =
        serde_json::to_string(value).map_err(|e| PalcoError::Storage(e.to_string()))?;
    storage.write(key, &payload)
}
