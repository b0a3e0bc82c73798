use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, Focus};
use crate::theme::Theme;

/// What: Render key hints and the status line.
///
/// Details:
/// - Hints depend on the focused pane; the status message, when present, takes the second row.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let hints = match app.focus {
        Focus::Search => "Enter search  Down suggestions  Tab recent  Ctrl+D theme  Esc quit",
        Focus::Suggestions => "Enter use  Up/Down move  Esc close",
        Focus::Recent => "Enter use  Del remove  Tab search  Esc back",
    };
    let mut lines = vec![Line::from(Span::styled(
        hints,
        Style::default().fg(th.overlay1),
    ))];
    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(th.yellow),
        )));
    }
    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(th.base)),
        area,
    );
}
