use std::sync::{Arc, RwLock};

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::SuggestionProvider;

/// Maximum number of history matches returned.
const HISTORY_MATCH_LIMIT: usize = 5;

/// Snapshot of the search history shared between the UI and the suggestion worker.
#[derive(Debug, Clone, Default)]
pub struct SharedHistory {
    /// Most-recent-first history entries.
    inner: Arc<RwLock<Vec<String>>>,
}

impl SharedHistory {
    /// What: Replace the snapshot after the history changed.
    pub fn replace(&self, items: Vec<String>) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = items;
    }

    /// Clone the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

/// Fuzzy (fzf-style) matches of the query against past searches.
pub struct HistorySuggestions {
    /// History to match against.
    history: SharedHistory,
    /// Reused matcher instance.
    matcher: SkimMatcherV2,
}

impl HistorySuggestions {
    /// Match against `history`.
    #[must_use]
    pub fn new(history: SharedHistory) -> Self {
        Self {
            history,
            matcher: SkimMatcherV2::default(),
        }
    }
}

impl SuggestionProvider for HistorySuggestions {
    /// What: Rank history entries by fuzzy score against `query`.
    ///
    /// Output:
    /// - Up to `HISTORY_MATCH_LIMIT` entries, best score first; ties keep recency order.
    ///
    /// Details:
    /// - An entry identical to the query is skipped since it is already in the input.
    fn suggest(&self, query: &str) -> Vec<String> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let mut scored: Vec<(i64, String)> = self
            .history
            .snapshot()
            .into_iter()
            .filter(|entry| entry != query)
            .filter_map(|entry| {
                self.matcher
                    .fuzzy_match(&entry, query)
                    .map(|score| (score, entry))
            })
            .collect();
        // sort_by is stable, so equal scores stay most-recent-first
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(HISTORY_MATCH_LIMIT)
            .map(|(_, entry)| entry)
            .collect()
    }

    fn name(&self) -> &'static str {
        "history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Only fuzzy-matching entries are returned and the typed query itself is skipped.
    ///
    /// Inputs:
    /// - History with matching, non-matching, and identical entries.
    ///
    /// Output:
    /// - Matching entries only, no exact echo of the query.
    fn filters_non_matches_and_echo() {
        let shared = SharedHistory::default();
        shared.replace(vec![
            "ADP margins".to_string(),
            "TNET revenue".to_string(),
            "PAYX headcount".to_string(),
            "adp".to_string(),
        ]);
        let provider = HistorySuggestions::new(shared);
        let items = provider.suggest("adp");
        assert!(items.contains(&"ADP margins".to_string()));
        assert!(!items.contains(&"adp".to_string()));
        assert!(!items.contains(&"PAYX headcount".to_string()));
        assert_eq!(provider.name(), "history");
    }

    #[test]
    /// What: Blank queries and an empty history yield nothing.
    fn blank_or_empty_yields_nothing() {
        let shared = SharedHistory::default();
        let provider = HistorySuggestions::new(shared.clone());
        assert!(provider.suggest("TNET").is_empty());
        shared.replace(vec!["TNET".to_string()]);
        assert!(provider.suggest("   ").is_empty());
        assert_eq!(shared.snapshot(), vec!["TNET"]);
    }

    #[test]
    /// What: Better matches rank first and equal scores keep most-recent-first order.
    ///
    /// Inputs:
    /// - A scattered match listed first, then two entries with identical contiguous prefixes.
    ///
    /// Output:
    /// - Contiguous matches lead in history order; the scattered match comes last.
    fn ranks_by_score_then_recency() {
        let shared = SharedHistory::default();
        shared.replace(vec![
            "tax on net earnings".to_string(),
            "tnet alpha".to_string(),
            "tnet beta".to_string(),
        ]);
        let provider = HistorySuggestions::new(shared);
        assert_eq!(
            provider.suggest("tnet"),
            vec!["tnet alpha", "tnet beta", "tax on net earnings"]
        );
    }

    #[test]
    /// What: Results are capped at the history match limit.
    fn capped_at_limit() {
        let shared = SharedHistory::default();
        shared.replace((0..9).map(|i| format!("TNET note {i}")).collect());
        let provider = HistorySuggestions::new(shared);
        assert_eq!(provider.suggest("tnet").len(), HISTORY_MATCH_LIMIT);
    }
}
