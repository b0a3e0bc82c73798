//! Suggestion providers for the search input.
//!
//! Suggestions sit behind [`SuggestionProvider`] so the local generators here
//! can be swapped for a backend autocomplete without touching the UI or the
//! debounce plumbing.

use std::collections::HashSet;
use std::sync::Arc;

mod history;
mod templates;

pub use history::{HistorySuggestions, SharedHistory};
pub use templates::{PROMPT_SUGGESTIONS, TemplateSuggestions};

/// Upper bound on items returned by [`CombinedSuggestions`].
pub const MAX_SUGGESTIONS: usize = 8;

/// Source of search suggestions for a query.
pub trait SuggestionProvider: Send + Sync {
    /// What: Produce suggestions for `query`, best first.
    ///
    /// Details:
    /// - Implementations must be deterministic for a given query and provider state.
    fn suggest(&self, query: &str) -> Vec<String>;

    /// Short label used in logs.
    fn name(&self) -> &'static str;
}

impl<P: SuggestionProvider + ?Sized> SuggestionProvider for Arc<P> {
    fn suggest(&self, query: &str) -> Vec<String> {
        (**self).suggest(query)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<P: SuggestionProvider + ?Sized> SuggestionProvider for Box<P> {
    fn suggest(&self, query: &str) -> Vec<String> {
        (**self).suggest(query)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Concatenation of several providers with duplicates removed.
pub struct CombinedSuggestions {
    /// Providers queried in order.
    providers: Vec<Box<dyn SuggestionProvider>>,
}

impl CombinedSuggestions {
    /// Build from `providers`, queried in the given order.
    #[must_use]
    pub fn new(providers: Vec<Box<dyn SuggestionProvider>>) -> Self {
        Self { providers }
    }
}

impl SuggestionProvider for CombinedSuggestions {
    /// What: Collect each provider's output in order.
    ///
    /// Output:
    /// - First occurrence of each string wins; at most `MAX_SUGGESTIONS` items.
    fn suggest(&self, query: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.providers
            .iter()
            .flat_map(|p| p.suggest(query))
            .filter(|s| seen.insert(s.clone()))
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    fn name(&self) -> &'static str {
        "combined"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Combined output keeps history matches first, removes duplicates, and is capped.
    ///
    /// Inputs:
    /// - History provider holding an entry identical to a template phrasing, then templates.
    ///
    /// Output:
    /// - Shared string appears once; total length within `MAX_SUGGESTIONS`.
    fn combined_dedups_and_caps() {
        let shared = SharedHistory::default();
        shared.replace(vec![
            "Compare TNET with competitors".to_string(),
            "TNET margins".to_string(),
        ]);
        let combined = CombinedSuggestions::new(vec![
            Box::new(HistorySuggestions::new(shared)),
            Box::new(TemplateSuggestions),
        ]);
        let items = combined.suggest("TNET");
        assert!(items.len() <= MAX_SUGGESTIONS);
        assert_eq!(
            items
                .iter()
                .filter(|s| *s == "Compare TNET with competitors")
                .count(),
            1
        );
        assert!(items.contains(&"TNET margins".to_string()));
        assert!(items.contains(&"Latest 10-K filings for TNET".to_string()));
        assert_eq!(combined.name(), "combined");
    }
}
