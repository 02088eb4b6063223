//! File-backed session store.
//!
//! The binary's stand-in for the browser cookie jar: a flat JSON object on
//! disk, loaded at open and rewritten on every set.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PortalError, Result};

use super::SessionStore;

/// Session store persisted as a JSON object of string pairs.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, loading existing values if the file exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let data = fs::read_to_string(&path)
                .map_err(|e| PortalError::Store(format!("read {}: {}", path.display(), e)))?;
            serde_json::from_str(&data)
                .map_err(|e| PortalError::Store(format!("parse {}: {}", path.display(), e)))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.values)
            .map_err(|e| PortalError::Store(format!("serialize session: {}", e)))?;
        fs::write(&self.path, data)
            .map_err(|e| PortalError::Store(format!("write {}: {}", self.path.display(), e)))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
