//! Key-value string storage backing search history and display preferences.
//!
//! The store mirrors the browser's `localStorage`: flat string keys mapping to
//! string values. [`FileStore`] persists the whole map as one JSON object on
//! disk; [`MemoryStore`] keeps it in-process and counts writes.

use std::sync::Arc;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the JSON-encoded search history array.
pub const HISTORY_KEY: &str = "searchHistory";
/// Key holding the dark mode display preference (`"enabled"` / `"disabled"`).
pub const DARK_MODE_KEY: &str = "darkMode";

/// Errors raised while writing the persisted store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store I/O error at {path}: {source}")]
    Io {
        /// Backing file path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Serializing the map to JSON failed.
    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What: Synchronous string key-value storage.
///
/// Details:
/// - Methods take `&self`; implementations use interior mutability so one store can be shared
///   between the history and preference layers.
/// - `get` never fails: unreadable state is reported as an absent key.
pub trait KeyValueStore: Send + Sync {
    /// Return the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// What: Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// - Returns [`StoreError`] when the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// What: Delete `key`; absent keys are not an error.
    ///
    /// # Errors
    /// - Returns [`StoreError`] when the removal cannot be persisted.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Shared handles observe each other's writes through the `Arc` blanket impl.
    ///
    /// Inputs:
    /// - Two clones of one `Arc<MemoryStore>`.
    ///
    /// Output:
    /// - A value written through one clone is readable through the other.
    fn arc_store_shares_state() {
        let a = Arc::new(MemoryStore::default());
        let b = Arc::clone(&a);
        a.set(DARK_MODE_KEY, "enabled").expect("memory set");
        assert_eq!(b.get(DARK_MODE_KEY).as_deref(), Some("enabled"));
        assert_eq!(b.writes(), 1);
    }
}
