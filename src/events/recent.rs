use crossterm::event::{KeyCode, KeyEvent};

use super::search::apply_text;
use crate::app::AppContext;
use crate::state::{AppState, Focus};

/// What: Handle a key while the Recent pane has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `ctx`: Services (history store)
///
/// Output:
/// - Always `false`; exiting happens from the input.
///
/// Details:
/// - Up/Down (or `k`/`j`) move the selection; Enter copies the entry into the input.
/// - Delete removes the selected history entry; canned prompts cannot be removed.
pub fn handle_recent_key(ke: KeyEvent, app: &mut AppState, ctx: &AppContext) -> bool {
    let len = app.recent_entries().len();
    match ke.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if len > 0 {
                let next = app.recent_state.selected().map_or(0, |i| (i + 1).min(len - 1));
                app.recent_state.select(Some(next));
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            let prev = app.recent_state.selected().map_or(0, |i| i.saturating_sub(1));
            app.recent_state.select((len > 0).then_some(prev));
        }
        KeyCode::Enter => {
            if let Some(text) = app.selected_recent().map(str::to_string) {
                apply_text(app, ctx, text);
                app.panel.clear();
                app.focus = Focus::Search;
            }
        }
        KeyCode::Delete => remove_selected(app, ctx),
        KeyCode::Tab | KeyCode::Esc => app.focus = Focus::Search,
        _ => {}
    }
    false
}

/// What: Delete the selected history entry and refresh the snapshots.
fn remove_selected(app: &mut AppState, ctx: &AppContext) {
    if app.showing_prompts() {
        return;
    }
    let Some(index) = app.recent_state.selected() else {
        return;
    };
    if let Some(removed) = ctx.history.remove_at(index) {
        tracing::debug!(entry = %removed, "[History] Removed recent search");
        app.status = Some(format!("Removed: {removed}"));
        let list = ctx.history.load();
        ctx.publish_history(app, list);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event as CEvent, KeyModifiers};

    use super::*;
    use crate::events::handle_event;
    use crate::events::test_support::{app, context};
    use crate::suggest::PROMPT_SUGGESTIONS;

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    /// What: Tab focuses Recent, navigation selects an entry, Enter copies it into the input.
    ///
    /// Inputs:
    /// - History `["c", "b", "a"]`; Tab, Down, Enter.
    ///
    /// Output:
    /// - Input `"b"`, focus back on the input.
    async fn enter_copies_selected_entry() {
        let (ctx, _store, _rx) = context();
        for q in ["a", "b", "c"] {
            ctx.history.add(q);
        }
        let mut app = app(&ctx);
        app.set_recent(ctx.history.load());

        handle_event(key(KeyCode::Tab), &mut app, &ctx);
        assert_eq!(app.focus, Focus::Recent);
        assert_eq!(app.recent_state.selected(), Some(0));
        handle_event(key(KeyCode::Down), &mut app, &ctx);
        handle_event(key(KeyCode::Enter), &mut app, &ctx);
        assert_eq!(app.input, "b");
        assert_eq!(app.focus, Focus::Search);
    }

    #[tokio::test]
    /// What: Delete removes the selected entry from the store and the pane.
    async fn delete_removes_entry() {
        let (ctx, _store, _rx) = context();
        ctx.history.add("ADP");
        ctx.history.add("TNET");
        let mut app = app(&ctx);
        app.set_recent(ctx.history.load());
        handle_event(key(KeyCode::Tab), &mut app, &ctx);
        handle_event(key(KeyCode::Delete), &mut app, &ctx);

        assert_eq!(app.recent, vec!["ADP"]);
        assert_eq!(ctx.history.load(), vec!["ADP"]);
        assert_eq!(ctx.shared_history.snapshot(), vec!["ADP"]);
        assert_eq!(app.status.as_deref(), Some("Removed: TNET"));
    }

    #[tokio::test]
    /// What: With no history the pane offers prompts, which can be used but not deleted.
    async fn prompts_are_usable_not_deletable() {
        let (ctx, store, _rx) = context();
        let mut app = app(&ctx);
        handle_event(key(KeyCode::Tab), &mut app, &ctx);
        handle_event(key(KeyCode::Delete), &mut app, &ctx);
        assert_eq!(store.writes(), 0);
        handle_event(key(KeyCode::Enter), &mut app, &ctx);
        assert_eq!(app.input, PROMPT_SUGGESTIONS[0]);
    }
}
