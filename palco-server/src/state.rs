use std::sync::{Arc, RwLock};

use anyhow::Result;
use palco_core::{AccountStore, EventCatalog, FileStorage, PalcoConfig};

/// Shared application state.
///
/// Both stores are built once at startup over one file-backed storage and
/// handed to every handler; nothing else touches the data directory. The
/// locks exist only because axum is multi-threaded — store operations are
/// synchronous and never hold one across an await.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<RwLock<AccountStore>>,
    pub catalog: Arc<RwLock<EventCatalog>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = PalcoConfig::load()?;
        let storage = Arc::new(FileStorage::open(config.data_path())?);

        let accounts = AccountStore::open(storage.clone());
        let catalog = EventCatalog::open(storage);

        Ok(AppState {
            accounts: Arc::new(RwLock::new(accounts)),
            catalog: Arc::new(RwLock::new(catalog)),
        })
    }
}
