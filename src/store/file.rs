use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{KeyValueStore, StoreError};

/// Store persisted as a single JSON object file (`{"key": "value", ...}`).
///
/// The file is read once at [`FileStore::open`]; every mutation rewrites it.
#[derive(Debug)]
pub struct FileStore {
    /// Backing file.
    path: PathBuf,
    /// In-memory copy of the persisted map.
    map: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// What: Open the store at `path`, loading any existing contents.
    ///
    /// Inputs:
    /// - `path`: JSON file location; need not exist yet.
    ///
    /// Output:
    /// - A store holding the parsed map, or an empty one.
    ///
    /// Details:
    /// - A missing file is silent; an unreadable or malformed file is logged and treated as empty
    ///   so startup never fails on bad persisted state.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str::<BTreeMap<String, String>>(&s) {
                Ok(map) => {
                    tracing::debug!(
                        path = %path.display(),
                        keys = map.len(),
                        "[Store] Loaded key-value store"
                    );
                    map
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "[Store] Ignoring malformed store file"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "[Store] Failed to read store file"
                );
                BTreeMap::new()
            }
        };
        Self {
            path,
            map: Mutex::new(map),
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What: Serialize `map` and write it to the backing file.
    ///
    /// Details:
    /// - Creates the parent directory when missing.
    fn persist(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let s = serde_json::to_string_pretty(map)?;
        let io_err = |source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, &s).map_err(io_err)?;
        tracing::trace!(
            path = %self.path.display(),
            bytes = s.len(),
            "[Store] Store persisted"
        );
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let map = self
            .map
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        map.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self
            .map
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        map.insert(key.to_string(), value.to_string());
        self.persist(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self
            .map
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&map)
    }
}
