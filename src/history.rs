//! Bounded, de-duplicated, most-recent-first search history.
//!
//! The list is stored as a JSON array of strings under
//! [`HISTORY_KEY`](crate::store::HISTORY_KEY) and re-read on every operation,
//! so external edits to the store are picked up.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::store::{HISTORY_KEY, KeyValueStore};

/// Maximum number of searches retained (most-recent-first).
pub const HISTORY_CAPACITY: usize = 10;

/// Ordered search history, most recent first.
pub type SearchHistoryList = Vec<String>;

/// What: Provide the non-zero capacity used by the history LRU.
///
/// Inputs: None.
///
/// Output:
/// - Non-zero capacity for the history cache.
///
/// Details:
/// - `HISTORY_CAPACITY` is a non-zero constant, so the fallback branch is unreachable.
#[must_use]
pub const fn history_capacity() -> NonZeroUsize {
    match NonZeroUsize::new(HISTORY_CAPACITY) {
        Some(n) => n,
        None => NonZeroUsize::MIN,
    }
}

/// Search history persisted in a [`KeyValueStore`].
#[derive(Debug)]
pub struct SearchHistoryStore<S> {
    /// Backing key-value store.
    store: S,
}

impl<S: KeyValueStore> SearchHistoryStore<S> {
    /// Wrap `store`; nothing is read until the first operation.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// What: Read the persisted history.
    ///
    /// Inputs: None.
    ///
    /// Output:
    /// - The stored list, most recent first; empty when absent, corrupt, or not an array of
    ///   strings.
    ///
    /// Details:
    /// - Never writes. Duplicates and overflow in a hand-edited value are normalized away
    ///   (first occurrence wins, first `HISTORY_CAPACITY` kept).
    #[must_use]
    pub fn load(&self) -> SearchHistoryList {
        let Some(raw) = self.store.get(HISTORY_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(items) => {
                let mut cache = LruCache::new(history_capacity());
                for item in items.into_iter().rev() {
                    cache.put(item, ());
                }
                collect(&cache)
            }
            Err(e) => {
                tracing::debug!(error = %e, "[History] Persisted history unparsable; using empty");
                Vec::new()
            }
        }
    }

    /// What: Record a submitted search.
    ///
    /// Inputs:
    /// - `query`: Raw query text; surrounding whitespace is trimmed.
    ///
    /// Output:
    /// - The resulting list, most recent first.
    ///
    /// Details:
    /// - Empty or whitespace-only input returns the current list without writing.
    /// - Otherwise an exact duplicate is moved to the front, the list is clamped to
    ///   `HISTORY_CAPACITY` (oldest evicted), and the result is persisted with one write.
    pub fn add(&self, query: &str) -> SearchHistoryList {
        let current = self.load();
        let query = query.trim();
        if query.is_empty() {
            return current;
        }
        let mut cache = LruCache::new(history_capacity());
        for item in current.into_iter().rev() {
            cache.put(item, ());
        }
        cache.put(query.to_string(), ());
        let list = collect(&cache);
        self.persist(&list);
        tracing::debug!(count = list.len(), "[History] Recorded search");
        list
    }

    /// What: Delete the entry at `index` (0 = most recent).
    ///
    /// Output:
    /// - `Some(entry)` when removed (and persisted); `None` for an out-of-range index.
    pub fn remove_at(&self, index: usize) -> Option<String> {
        let mut list = self.load();
        if index >= list.len() {
            return None;
        }
        let removed = list.remove(index);
        self.persist(&list);
        Some(removed)
    }

    /// What: Forget all history by deleting the stored key.
    pub fn clear(&self) {
        match self.store.remove(HISTORY_KEY) {
            Ok(()) => tracing::info!("[History] Search history cleared"),
            Err(e) => tracing::warn!(error = %e, "[History] Failed to clear search history"),
        }
    }

    /// What: Write `list` as the new stored value.
    ///
    /// Details:
    /// - Failures are logged and swallowed; the in-memory result stays authoritative for the
    ///   caller.
    fn persist(&self, list: &[String]) {
        let s = match serde_json::to_string(list) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "[History] Failed to encode search history");
                return;
            }
        };
        if let Err(e) = self.store.set(HISTORY_KEY, &s) {
            tracing::warn!(error = %e, "[History] Failed to persist search history");
        }
    }
}

/// Snapshot an LRU in most-recent-first order.
fn collect(cache: &LruCache<String, ()>) -> SearchHistoryList {
    cache.iter().map(|(k, ())| k.clone()).collect()
}
