use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::debounce::Debouncer;
use crate::history::SearchHistoryStore;
use crate::prefs::DarkModePreference;
use crate::state::{AppState, SuggestionQuery, SuggestionResults};
use crate::store::KeyValueStore;
use crate::suggest::{
    CombinedSuggestions, HistorySuggestions, SharedHistory, SuggestionProvider,
    TemplateSuggestions,
};
use crate::theme::{Settings, SuggestionSource};

/// Key-value store shared by every persisted component.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Long-lived services wired once at startup and handed to the event loop.
pub struct AppContext {
    /// Effective settings.
    pub settings: Settings,
    /// Persisted search history.
    pub history: SearchHistoryStore<SharedStore>,
    /// Persisted dark mode flag.
    pub dark_mode: DarkModePreference<SharedStore>,
    /// History snapshot read by the history suggestion provider.
    pub shared_history: SharedHistory,
    /// Debounced suggestion requests.
    pub suggester: Debouncer<SuggestionQuery>,
}

impl AppContext {
    /// What: Wire stores, the suggestion provider, and the debouncer.
    ///
    /// Inputs:
    /// - `settings`: Effective settings (debounce delay, min chars, provider choice).
    /// - `store`: Key-value store for history and preferences.
    /// - `results_tx`: Channel receiving computed suggestions.
    ///
    /// Output:
    /// - Ready context; the history snapshot is primed from the store.
    ///
    /// Details:
    /// - Must be called within a tokio runtime (the debouncer spawns its worker).
    #[must_use]
    pub fn new(
        settings: Settings,
        store: SharedStore,
        results_tx: mpsc::UnboundedSender<SuggestionResults>,
    ) -> Self {
        let history = SearchHistoryStore::new(Arc::clone(&store));
        let dark_mode = DarkModePreference::new(store);
        let shared_history = SharedHistory::default();
        shared_history.replace(history.load());

        let provider = build_provider(settings.suggestion_source, &shared_history);
        let min_chars = settings.suggest_min_chars;
        let suggester = Debouncer::new(
            Duration::from_millis(settings.suggest_debounce_ms),
            move |q: SuggestionQuery| {
                let text = q.text.trim();
                let items = if text.chars().count() >= min_chars {
                    provider.suggest(text)
                } else {
                    Vec::new()
                };
                tracing::debug!(
                    id = q.id,
                    provider = provider.name(),
                    count = items.len(),
                    "[Suggest] Suggestions computed"
                );
                let _ = results_tx.send(SuggestionResults {
                    id: q.id,
                    query: text.to_string(),
                    items,
                });
            },
        );
        tracing::info!(
            debounce_ms = settings.suggest_debounce_ms,
            min_chars,
            source = ?settings.suggestion_source,
            "[Runtime] Context initialized"
        );
        Self {
            settings,
            history,
            dark_mode,
            shared_history,
            suggester,
        }
    }

    /// What: Build the initial [`AppState`] from persisted data and settings.
    #[must_use]
    pub fn initial_state(&self, initial_query: Option<&str>) -> AppState {
        let mut app = AppState {
            input: initial_query.unwrap_or_default().to_string(),
            dark_mode: self.dark_mode.load(),
            show_recent_pane: self.settings.show_recent_pane,
            ..AppState::default()
        };
        app.set_recent(self.history.load());
        tracing::info!(count = app.recent.len(), "[History] Loaded recent searches");
        app
    }

    /// What: Refresh the UI and provider snapshots after the history changed.
    pub fn publish_history(&self, app: &mut AppState, list: Vec<String>) {
        self.shared_history.replace(list.clone());
        app.set_recent(list);
    }
}

/// What: Map the configured source onto a provider.
fn build_provider(
    source: SuggestionSource,
    history: &SharedHistory,
) -> Box<dyn SuggestionProvider> {
    match source {
        SuggestionSource::Templates => Box::new(TemplateSuggestions),
        SuggestionSource::History => Box::new(HistorySuggestions::new(history.clone())),
        SuggestionSource::Both => Box::new(CombinedSuggestions::new(vec![
            Box::new(HistorySuggestions::new(history.clone())),
            Box::new(TemplateSuggestions),
        ])),
    }
}
