use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppContext;
use crate::state::{AppState, Focus};

/// What: Handle a key while the search input has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `ctx`: Services (history, debouncer)
///
/// Output:
/// - `true` when the application should exit.
///
/// Details:
/// - Editing keys update the input and trigger a debounced suggestion request.
/// - Esc clears a visible dropdown first and quits only when nothing is shown.
pub fn handle_search_key(ke: KeyEvent, app: &mut AppState, ctx: &AppContext) -> bool {
    match ke.code {
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.input.push(ch);
            on_input_changed(app, ctx);
        }
        KeyCode::Backspace => {
            if app.input.pop().is_some() {
                on_input_changed(app, ctx);
            }
        }
        KeyCode::Enter => submit_search(app, ctx),
        KeyCode::Down => {
            if app.panel.is_visible() {
                app.focus = Focus::Suggestions;
                app.panel.select_next();
            } else if app.show_recent_pane {
                focus_recent(app);
            }
        }
        KeyCode::Tab if app.show_recent_pane => focus_recent(app),
        KeyCode::Esc => {
            if app.panel.is_visible() {
                app.panel.clear();
            } else {
                return true;
            }
        }
        _ => {}
    }
    false
}

/// What: Handle a key while the suggestion dropdown has focus.
///
/// Details:
/// - Enter copies the highlighted suggestion into the input and hides the dropdown.
/// - Up from the first row returns focus to the input.
/// - Typing goes back to the input so editing never gets stuck in the dropdown.
pub fn handle_suggestions_key(ke: KeyEvent, app: &mut AppState, ctx: &AppContext) -> bool {
    match ke.code {
        KeyCode::Down => app.panel.select_next(),
        KeyCode::Up => {
            if !app.panel.select_prev() {
                app.focus = Focus::Search;
            }
        }
        KeyCode::Enter => {
            if let Some(text) = app.panel.activate_selected() {
                apply_text(app, ctx, text);
            }
            app.focus = Focus::Search;
        }
        KeyCode::Esc => {
            app.panel.clear();
            app.focus = Focus::Search;
        }
        KeyCode::Char(_) | KeyCode::Backspace => {
            app.focus = Focus::Search;
            return handle_search_key(ke, app, ctx);
        }
        _ => {}
    }
    false
}

/// What: Record the current input as a search.
///
/// Inputs:
/// - `app`: Application state whose `input` is submitted
/// - `ctx`: Services holding the history store
///
/// Output:
/// - None (updates history, panel, and status).
///
/// Details:
/// - Blank input is ignored without touching the store.
/// - Any pending or in-flight suggestion for the submitted text is discarded.
pub fn submit_search(app: &mut AppState, ctx: &AppContext) {
    let query = app.input.trim().to_string();
    if query.is_empty() {
        return;
    }
    let list = ctx.history.add(&query);
    ctx.publish_history(app, list);
    invalidate_suggestions(app, ctx);
    app.panel.clear();
    app.focus = Focus::Search;
    tracing::info!(query = %query, "[Search] Query submitted");
    app.status = Some(format!("Searched: {query}"));
    app.last_submitted = Some(query);
}

/// What: Replace the input with `text` without requesting suggestions for it.
pub(super) fn apply_text(app: &mut AppState, ctx: &AppContext, text: String) {
    app.input = text;
    invalidate_suggestions(app, ctx);
}

/// Request suggestions for the edited input.
fn on_input_changed(app: &mut AppState, ctx: &AppContext) {
    app.status = None;
    let q = app.next_query();
    ctx.suggester.trigger(q);
}

/// What: Cancel the pending request and make in-flight results stale.
fn invalidate_suggestions(app: &mut AppState, ctx: &AppContext) {
    ctx.suggester.cancel();
    app.latest_query_id += 1;
}

/// Move focus to the Recent pane, selecting the first entry when nothing is selected.
fn focus_recent(app: &mut AppState) {
    app.focus = Focus::Recent;
    if app.recent_state.selected().is_none() && !app.recent_entries().is_empty() {
        app.recent_state.select(Some(0));
    }
}
