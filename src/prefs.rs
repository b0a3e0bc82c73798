//! Persisted display preference for the dark palette.

use crate::store::{DARK_MODE_KEY, KeyValueStore};

/// Stored value meaning "dark mode on".
const ENABLED: &str = "enabled";
/// Stored value meaning "dark mode off".
const DISABLED: &str = "disabled";

/// Dark mode flag stored as `"enabled"` / `"disabled"` under [`DARK_MODE_KEY`].
#[derive(Debug)]
pub struct DarkModePreference<S> {
    /// Backing key-value store.
    store: S,
}

impl<S: KeyValueStore> DarkModePreference<S> {
    /// Wrap `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// What: Read the flag; only the exact value `"enabled"` counts as on.
    #[must_use]
    pub fn load(&self) -> bool {
        self.store.get(DARK_MODE_KEY).as_deref() == Some(ENABLED)
    }

    /// What: Persist `enabled`.
    ///
    /// Details:
    /// - Write failures are logged; the caller keeps the requested value for this session.
    pub fn set(&self, enabled: bool) {
        let value = if enabled { ENABLED } else { DISABLED };
        if let Err(e) = self.store.set(DARK_MODE_KEY, value) {
            tracing::warn!(error = %e, "[Prefs] Failed to persist dark mode preference");
        }
    }

    /// What: Flip the stored flag and return the new value.
    pub fn toggle(&self) -> bool {
        let next = !self.load();
        self.set(next);
        tracing::debug!(dark_mode = next, "[Prefs] Dark mode toggled");
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    /// What: Toggling alternates the stored string and the loaded flag.
    ///
    /// Inputs:
    /// - Fresh store, then two toggles.
    ///
    /// Output:
    /// - off -> `"enabled"` -> `"disabled"`, with `load` tracking each step.
    fn toggle_alternates_values() {
        let pref = DarkModePreference::new(MemoryStore::default());
        assert!(!pref.load());
        assert!(pref.toggle());
        assert_eq!(pref.store.get(DARK_MODE_KEY).as_deref(), Some("enabled"));
        assert!(!pref.toggle());
        assert_eq!(pref.store.get(DARK_MODE_KEY).as_deref(), Some("disabled"));
        assert!(!pref.load());
    }

    #[test]
    /// What: Unrecognized stored values read as disabled.
    fn unknown_value_is_disabled() {
        let pref = DarkModePreference::new(MemoryStore::with_entries([(DARK_MODE_KEY, "true")]));
        assert!(!pref.load());
    }
}
