//! TUI rendering for the search screen.
//!
//! Layout, top to bottom: search input, body (Recent pane with the
//! suggestion dropdown overlaid at its top), footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::{AppState, Focus};
use crate::theme::Theme;

mod footer;
pub mod panel;
mod recent;
mod search;

/// What: Draw the whole screen for `app`.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (input, panel, history, palette flag)
///
/// Details:
/// - The dropdown is drawn last so it overlays the Recent pane.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = Theme::for_mode(app.dark_mode);
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(area);

    search::render_search(f, app, rows[0], &th);
    recent::render_recent(f, app, rows[1], &th);
    footer::render_footer(f, app, rows[2], &th);
    let focused = matches!(app.focus, Focus::Suggestions);
    panel::draw_panel(f, &mut app.panel, rows[1], &th, focused);
}
