use ratatui::{
    Frame,
    layout::Position,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::Theme;

/// What: Render the search input box and place the cursor after the text.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (input text, focus)
/// - `area`: Target rectangle
/// - `th`: Active palette
///
/// Details:
/// - Long input is scrolled horizontally so the caret end stays visible.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let focused = matches!(app.focus, Focus::Search);
    let inner_width = usize::from(area.width.saturating_sub(2));
    let width = app.input.width();
    let scroll = width.saturating_sub(inner_width.saturating_sub(1));
    let block = Block::default()
        .title(Span::styled(
            "Search",
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));
    let para = Paragraph::new(Line::from(Span::styled(
        app.input.as_str(),
        Style::default().fg(th.text),
    )))
    .style(Style::default().bg(th.base))
    .block(block)
    .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)));
    f.render_widget(para, area);

    if focused {
        let caret = u16::try_from(width - scroll).unwrap_or(0);
        f.set_cursor_position(Position::new(area.x + 1 + caret, area.y + 1));
    }
}
