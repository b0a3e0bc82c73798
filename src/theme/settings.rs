use std::path::Path;

use super::parsing::{parse_bool, parse_key_value, skip_comment_or_empty};

/// Default wait after the last keystroke before suggestions are computed.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
/// Largest accepted debounce delay.
const MAX_DEBOUNCE_MS: u64 = 5_000;
/// Default minimum trimmed query length (in characters) that triggers suggestions.
pub const DEFAULT_MIN_CHARS: usize = 3;
/// Accepted range for `suggest_min_chars`.
const MIN_CHARS_RANGE: std::ops::RangeInclusive<usize> = 1..=32;

/// Which suggestion provider backs the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionSource {
    /// Fixed phrasings around the query.
    #[default]
    Templates,
    /// Fuzzy matches from the search history.
    History,
    /// History matches followed by templates.
    Both,
}

impl SuggestionSource {
    /// What: Parse a config value (`templates`, `history`, `both`), case-insensitively.
    #[must_use]
    pub fn from_config_key(val: &str) -> Option<Self> {
        match val.trim().to_ascii_lowercase().as_str() {
            "templates" | "template" => Some(Self::Templates),
            "history" | "recent" => Some(Self::History),
            "both" | "all" => Some(Self::Both),
            _ => None,
        }
    }
}

/// User-configurable behavior read from `settings.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Debounce delay for suggestions, in milliseconds.
    pub suggest_debounce_ms: u64,
    /// Minimum trimmed query length (characters) before suggestions are shown.
    pub suggest_min_chars: usize,
    /// Provider used for the dropdown.
    pub suggestion_source: SuggestionSource,
    /// Whether the Recent pane is visible.
    pub show_recent_pane: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            suggest_debounce_ms: DEFAULT_DEBOUNCE_MS,
            suggest_min_chars: DEFAULT_MIN_CHARS,
            suggestion_source: SuggestionSource::Templates,
            show_recent_pane: true,
        }
    }
}

/// What: Parse settings from `settings.conf` content on top of `settings`.
///
/// Inputs:
/// - `content`: File contents.
/// - `settings`: Values to update in place.
///
/// Output:
/// - None (modifies `settings`).
///
/// Details:
/// - Unknown keys and unparsable values are ignored, keeping the previous value.
/// - Numeric values are clamped to their accepted ranges.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "suggest_debounce_ms" | "debounce_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.suggest_debounce_ms = v.min(MAX_DEBOUNCE_MS);
                }
            }
            "suggest_min_chars" | "min_query_chars" => {
                if let Ok(v) = val.parse::<usize>() {
                    settings.suggest_min_chars =
                        v.clamp(*MIN_CHARS_RANGE.start(), *MIN_CHARS_RANGE.end());
                }
            }
            "suggestion_source" | "suggestions" => {
                if let Some(src) = SuggestionSource::from_config_key(val) {
                    settings.suggestion_source = src;
                }
            }
            "show_recent_pane" | "recent_visible" => {
                settings.show_recent_pane = parse_bool(val);
            }
            _ => {
                tracing::trace!(key = %key, "[Settings] Ignoring unknown key");
            }
        }
    }
}

/// What: Load settings from `path`, falling back to defaults.
///
/// Output:
/// - Parsed settings; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();
    match std::fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut settings);
            tracing::debug!(path = %path.display(), ?settings, "[Settings] Loaded settings");
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "[Settings] Failed to read settings"
            );
        }
    }
    settings
}
