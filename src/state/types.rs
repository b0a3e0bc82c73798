//! Message and focus types shared by the runtime, events, and UI.

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search input line.
    #[default]
    Search,
    /// Suggestion dropdown under the input.
    Suggestions,
    /// Recent searches pane.
    Recent,
}

/// What: Debounced suggestion request.
///
/// Details:
/// - `id` increases with every edit so the event loop can drop results for stale input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionQuery {
    /// Monotonic request id.
    pub id: u64,
    /// Input text at the time of the edit.
    pub text: String,
}

/// Suggestions computed for one [`SuggestionQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionResults {
    /// Id of the originating query.
    pub id: u64,
    /// Trimmed query text the items were computed for.
    pub query: String,
    /// Suggestions, best first; empty means "clear the panel".
    pub items: Vec<String>,
}
