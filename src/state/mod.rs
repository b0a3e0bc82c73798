//! Mutable UI state owned by the event loop.

use ratatui::widgets::ListState;

pub mod types;

pub use types::{Focus, SuggestionQuery, SuggestionResults};

use crate::history::SearchHistoryList;
use crate::suggest::PROMPT_SUGGESTIONS;
use crate::ui::panel::SuggestionPanel;

/// State of the search screen.
///
/// Only the event loop mutates this; background work reports back through channels.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current search input text.
    pub input: String,
    /// Pane receiving key input.
    pub focus: Focus,
    /// Suggestion dropdown contents and visibility.
    pub panel: SuggestionPanel,
    /// Search history snapshot, most recent first.
    pub recent: SearchHistoryList,
    /// Selection inside the Recent pane.
    pub recent_state: ListState,
    /// Whether the dark palette is active.
    pub dark_mode: bool,
    /// Whether the Recent pane is drawn.
    pub show_recent_pane: bool,
    /// One-line status message for the footer.
    pub status: Option<String>,
    /// Id of the most recent suggestion request sent.
    pub latest_query_id: u64,
    /// Last successfully submitted query.
    pub last_submitted: Option<String>,
}

impl AppState {
    /// What: Allocate the next suggestion request for the current input.
    ///
    /// Output:
    /// - Query carrying a fresh id; `latest_query_id` is updated to match.
    pub fn next_query(&mut self) -> SuggestionQuery {
        self.latest_query_id += 1;
        SuggestionQuery {
            id: self.latest_query_id,
            text: self.input.clone(),
        }
    }

    /// What: Replace the history snapshot, keeping the Recent selection in range.
    pub fn set_recent(&mut self, recent: SearchHistoryList) {
        self.recent = recent;
        let len = self.recent_entries().len();
        if let Some(i) = self.recent_state.selected()
            && i >= len
        {
            self.recent_state.select(len.checked_sub(1));
        }
    }

    /// What: Entries listed in the Recent pane.
    ///
    /// Output:
    /// - The search history, or the canned prompts while the history is empty.
    #[must_use]
    pub fn recent_entries(&self) -> Vec<&str> {
        if self.recent.is_empty() {
            PROMPT_SUGGESTIONS.to_vec()
        } else {
            self.recent.iter().map(String::as_str).collect()
        }
    }

    /// Whether the Recent pane is showing canned prompts instead of history.
    #[must_use]
    pub fn showing_prompts(&self) -> bool {
        self.recent.is_empty()
    }

    /// Recent entry under the selection.
    #[must_use]
    pub fn selected_recent(&self) -> Option<&str> {
        let i = self.recent_state.selected()?;
        self.recent_entries().get(i).copied()
    }
}
