use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::state::{AppState, Focus};
use crate::theme::Theme;

/// What: Render the Recent searches list below the input.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (history snapshot, focus, selection)
/// - `area`: Target rectangle
/// - `th`: Active palette
///
/// Details:
/// - Titled "Try asking" and listing canned prompts while the history is empty.
pub fn render_recent(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    if !app.show_recent_pane || area.width < 3 || area.height < 3 {
        return;
    }
    let focused = matches!(app.focus, Focus::Recent);
    let entry_style = Style::default().fg(if focused { th.text } else { th.subtext0 });
    let items: Vec<ListItem> = app
        .recent_entries()
        .into_iter()
        .map(|s| ListItem::new(Span::styled(s.to_string(), entry_style)))
        .collect();
    let title = if app.showing_prompts() {
        "Try asking"
    } else {
        "Recent"
    };
    let block = Block::default()
        .title(Line::from(Span::styled(
            title,
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));
    let list = List::new(items)
        .style(entry_style.bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.text).bg(th.surface2))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.recent_state);
}
