use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
};

use crate::theme::Theme;

/// Suggestion dropdown shown under the search input.
#[derive(Debug, Default, Clone)]
pub struct SuggestionPanel {
    /// Rendered suggestions, best first.
    items: Vec<String>,
    /// Whether the dropdown is drawn.
    visible: bool,
    /// Highlighted row.
    state: ListState,
}

impl SuggestionPanel {
    /// What: Replace the contents with `items` and show the panel.
    ///
    /// Details:
    /// - An empty list behaves like [`SuggestionPanel::clear`].
    /// - The highlight is reset; repeated calls with the same items give the same state.
    pub fn render(&mut self, items: Vec<String>) {
        if items.is_empty() {
            self.clear();
            return;
        }
        self.items = items;
        self.visible = true;
        self.state.select(None);
    }

    /// What: Empty and hide the panel.
    pub fn clear(&mut self) {
        self.items.clear();
        self.visible = false;
        self.state.select(None);
    }

    /// Hide without discarding the items.
    pub const fn hide(&mut self) {
        self.visible = false;
    }

    /// What: Activate the item at `index`.
    ///
    /// Output:
    /// - The item text for the caller to copy into the input; `None` when hidden or out of range.
    ///
    /// Details:
    /// - Hides the panel on success.
    pub fn activate(&mut self, index: usize) -> Option<String> {
        if !self.visible {
            return None;
        }
        let text = self.items.get(index).cloned()?;
        self.hide();
        Some(text)
    }

    /// Activate the highlighted item.
    pub fn activate_selected(&mut self) -> Option<String> {
        let index = self.state.selected()?;
        self.activate(index)
    }

    /// What: Move the highlight down one row, starting at the top; stops at the last row.
    pub fn select_next(&mut self) {
        if !self.visible || self.items.is_empty() {
            return;
        }
        let next = self
            .state
            .selected()
            .map_or(0, |i| (i + 1).min(self.items.len() - 1));
        self.state.select(Some(next));
    }

    /// What: Move the highlight up one row.
    ///
    /// Output:
    /// - `false` when already at the top (or nothing highlighted), so the caller can hand focus
    ///   back to the input.
    pub fn select_prev(&mut self) -> bool {
        match self.state.selected() {
            Some(i) if i > 0 => {
                self.state.select(Some(i - 1));
                true
            }
            _ => {
                self.state.select(None);
                false
            }
        }
    }

    /// Current items.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whether the panel is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Highlighted row index.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }
}

/// What: Draw the suggestion dropdown over `area`.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `panel`: Panel state; its highlight state is used for the list
/// - `area`: Rectangle directly below the input box
/// - `th`: Active palette
/// - `focused`: Whether the dropdown has key focus; accents the border and title
///
/// Details:
/// - Draws nothing when hidden or when the area has no room.
/// - Clears the area first so the dropdown overlays the panes beneath.
pub fn draw_panel(
    f: &mut Frame,
    panel: &mut SuggestionPanel,
    area: Rect,
    th: &Theme,
    focused: bool,
) {
    if !panel.visible || area.width < 3 || area.height < 3 {
        return;
    }
    let rows = u16::try_from(panel.items.len()).unwrap_or(u16::MAX);
    let height = rows.saturating_add(2).min(area.height);
    let rect = Rect { height, ..area };
    let items: Vec<ListItem> = panel
        .items
        .iter()
        .map(|s| ListItem::new(Span::styled(s.clone(), Style::default().fg(th.text))))
        .collect();
    let block = Block::default()
        .title(Span::styled(
            "Suggestions",
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(
            Style::default()
                .fg(th.text)
                .bg(th.surface2)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_widget(Clear, rect);
    f.render_stateful_widget(list, rect, &mut panel.state);
}
