//! Key handling for the search screen.
//!
//! `handle_event` applies global shortcuts, then delegates to the handler for
//! the focused pane. Handlers mutate [`AppState`] and use the [`AppContext`]
//! services for persistence and debounced suggestions.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppContext;
use crate::state::{AppState, Focus, SuggestionResults};

mod recent;
mod search;

pub use search::submit_search;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState, ctx: &AppContext) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    handle_key(ke, app, ctx)
}

/// What: Handle one key press.
///
/// Details:
/// - Ctrl+C quits and Ctrl+D toggles the palette from any pane.
fn handle_key(ke: KeyEvent, app: &mut AppState, ctx: &AppContext) -> bool {
    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        match ke.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('d') => {
                app.dark_mode = ctx.dark_mode.toggle();
                app.status = Some(
                    if app.dark_mode {
                        "Dark mode enabled"
                    } else {
                        "Dark mode disabled"
                    }
                    .to_string(),
                );
                return false;
            }
            _ => {}
        }
    }
    match app.focus {
        Focus::Search => search::handle_search_key(ke, app, ctx),
        Focus::Suggestions => search::handle_suggestions_key(ke, app, ctx),
        Focus::Recent => recent::handle_recent_key(ke, app, ctx),
    }
}

/// What: Apply suggestions computed by the debounced worker.
///
/// Inputs:
/// - `app`: Application state
/// - `results`: Suggestions for one query id
///
/// Details:
/// - Results for anything but the latest query are stale and dropped.
/// - Empty results clear the panel and return focus from the dropdown to the input.
pub fn handle_suggestion_results(app: &mut AppState, results: SuggestionResults) {
    if results.id != app.latest_query_id {
        tracing::trace!(
            id = results.id,
            latest = app.latest_query_id,
            "[Suggest] Dropping stale suggestions"
        );
        return;
    }
    if results.items.is_empty() {
        app.panel.clear();
        if matches!(app.focus, Focus::Suggestions) {
            app.focus = Focus::Search;
        }
    } else {
        app.panel.render(results.items);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use crate::app::AppContext;
    use crate::state::{AppState, SuggestionResults};
    use crate::store::MemoryStore;
    use crate::theme::Settings;

    /// What: Context over a fresh `MemoryStore`, plus handles to the store and result channel.
    pub fn context() -> (
        AppContext,
        Arc<MemoryStore>,
        mpsc::UnboundedReceiver<SuggestionResults>,
    ) {
        let store = Arc::new(MemoryStore::default());
        let (tx, rx) = mpsc::unbounded_channel();
        let ctx = AppContext::new(Settings::default(), store.clone(), tx);
        (ctx, store, rx)
    }

    /// What: Initial state for `ctx` with the Recent pane visible.
    pub fn app(ctx: &AppContext) -> AppState {
        let mut app = ctx.initial_state(None);
        app.show_recent_pane = true;
        app
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::test_support::{app, context};
    use super::*;
    use crate::store::DARK_MODE_KEY;
    use crate::store::KeyValueStore;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> CEvent {
        CEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[tokio::test]
    /// What: Ctrl+D flips the palette and persists it; Ctrl+C requests exit.
    async fn global_shortcuts() {
        let (ctx, store, _rx) = context();
        let mut app = app(&ctx);
        assert!(!app.dark_mode);
        assert!(!handle_event(press(KeyCode::Char('d'), KeyModifiers::CONTROL), &mut app, &ctx));
        assert!(app.dark_mode);
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("enabled"));
        assert!(handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app, &ctx));
    }

    #[tokio::test]
    /// What: Key releases are ignored.
    async fn releases_are_ignored() {
        let (ctx, _store, _rx) = context();
        let mut app = app(&ctx);
        let ev = CEvent::Key(KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(!handle_event(ev, &mut app, &ctx));
        assert!(app.input.is_empty());
    }

    #[tokio::test]
    /// What: Stale results are dropped; current ones render; empty current ones clear.
    ///
    /// Inputs:
    /// - Two queries allocated, then results for the older and the newer id.
    ///
    /// Output:
    /// - Older id ignored; newer id shown; empty newer result hides the panel and refocuses input.
    async fn suggestion_results_respect_ids() {
        let (ctx, _store, _rx) = context();
        let mut app = app(&ctx);
        let old = app.next_query();
        let new = app.next_query();

        handle_suggestion_results(
            &mut app,
            SuggestionResults {
                id: old.id,
                query: String::new(),
                items: vec!["stale".into()],
            },
        );
        assert!(!app.panel.is_visible());

        handle_suggestion_results(
            &mut app,
            SuggestionResults {
                id: new.id,
                query: String::new(),
                items: vec!["fresh".into()],
            },
        );
        assert_eq!(app.panel.items(), ["fresh".to_string()].as_slice());

        app.focus = Focus::Suggestions;
        handle_suggestion_results(
            &mut app,
            SuggestionResults {
                id: new.id,
                query: String::new(),
                items: Vec::new(),
            },
        );
        assert!(!app.panel.is_visible());
        assert_eq!(app.focus, Focus::Search);
    }
}
