//! Settings, palettes, and on-disk locations for marketiq.

/// Line-level config parsing helpers.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings file parsing.
mod settings;
/// Palette definitions.
mod types;

pub use paths::{config_dir, logs_dir, settings_path, store_path};
pub use settings::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_CHARS, Settings, SuggestionSource, load_settings,
    parse_settings,
};
pub use types::Theme;

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
