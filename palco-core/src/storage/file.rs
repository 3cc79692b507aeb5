//! File-backed storage: one JSON document per key.

use std::path::PathBuf;

use super::Storage;
use crate::error::PalcoResult;

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go through a temp file and a rename so a crash mid-write never
/// leaves a half-written document behind.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open a storage directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> PalcoResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(FileStorage { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> PalcoResult<Option<String>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, payload: &str) -> PalcoResult<()> {
        let path = self.path(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        std::fs::write(&temp, payload)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> PalcoResult<()> {
        let path = self.path(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}
