use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{KeyValueStore, StoreError};

/// In-process store used in headless runs and tests.
///
/// Counts every successful `set`/`remove` so callers can assert how many
/// persistence writes an operation performed.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored values.
    map: Mutex<BTreeMap<String, String>>,
    /// Number of mutations applied.
    writes: AtomicUsize,
}

impl MemoryStore {
    /// What: Build a store pre-seeded with `entries` (not counted as writes).
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            map: Mutex::new(map),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of writes performed since construction.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryStore {
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
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self
            .map
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if map.remove(key).is_some() {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Seeded entries are readable and do not count as writes.
    fn seeded_entries_are_not_writes() {
        let store = MemoryStore::with_entries([("searchHistory", "[\"ADP\"]")]);
        assert_eq!(store.get("searchHistory").as_deref(), Some("[\"ADP\"]"));
        assert_eq!(store.writes(), 0);
        store.remove("searchHistory").expect("memory remove");
        assert!(store.get("searchHistory").is_none());
        assert_eq!(store.writes(), 1);
    }

    #[test]
    /// What: Removing an absent key is not a write, matching the file-backed store.
    ///
    /// Inputs:
    /// - Empty store; history `clear`, then a direct `remove`.
    ///
    /// Output:
    /// - Write count stays at zero.
    fn remove_absent_key_is_not_a_write() {
        let store = std::sync::Arc::new(MemoryStore::default());
        crate::history::SearchHistoryStore::new(std::sync::Arc::clone(&store)).clear();
        store.remove("darkMode").expect("memory remove");
        assert_eq!(store.writes(), 0);
    }
}
