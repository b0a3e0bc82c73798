//! End-to-end search flow driven through `handle_event` with a `MemoryStore`.
//!
//! Time is paused so the debounce window advances deterministically.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use marketiq::app::AppContext;
use marketiq::events::{handle_event, handle_suggestion_results};
use marketiq::state::{AppState, Focus, SuggestionResults};
use marketiq::store::{HISTORY_KEY, KeyValueStore, MemoryStore};
use marketiq::theme::Settings;

struct Harness {
    ctx: AppContext,
    app: AppState,
    store: Arc<MemoryStore>,
    rx: mpsc::UnboundedReceiver<SuggestionResults>,
}

impl Harness {
    fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let (tx, rx) = mpsc::unbounded_channel();
        let ctx = AppContext::new(Settings::default(), store.clone(), tx);
        let app = ctx.initial_state(None);
        Self { ctx, app, store, rx }
    }

    fn key(&mut self, code: KeyCode) -> bool {
        handle_event(
            CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)),
            &mut self.app,
            &self.ctx,
        )
    }

    fn type_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.key(KeyCode::Char(ch));
        }
    }

    /// Wait out the debounce window and apply whatever suggestions arrived.
    async fn settle(&mut self) {
        tokio::time::sleep(Duration::from_millis(400)).await;
        while let Ok(results) = self.rx.try_recv() {
            handle_suggestion_results(&mut self.app, results);
        }
    }
}

#[tokio::test(start_paused = true)]
/// What: Typing a query shows template suggestions once after the debounce window.
///
/// Inputs:
/// - "TNET" typed one key at a time.
///
/// Output:
/// - Exactly one result batch, five suggestions, panel visible.
async fn typing_shows_suggestions_after_debounce() {
    let mut h = Harness::new();
    h.type_str("TNET");
    assert!(!h.app.panel.is_visible());

    tokio::time::sleep(Duration::from_millis(400)).await;
    let results = h.rx.try_recv().expect("one batch after the window");
    assert!(h.rx.try_recv().is_err(), "bursts collapse into one batch");
    assert_eq!(results.query, "TNET");
    handle_suggestion_results(&mut h.app, results);

    assert!(h.app.panel.is_visible());
    assert_eq!(h.app.panel.items().len(), 5);
    assert_eq!(h.app.panel.items()[0], "Show financial metrics for TNET");
}

#[tokio::test(start_paused = true)]
/// What: Short queries produce no suggestions and hide the panel.
async fn short_query_hides_panel() {
    let mut h = Harness::new();
    h.type_str("TNET");
    h.settle().await;
    assert!(h.app.panel.is_visible());

    for _ in 0..3 {
        h.key(KeyCode::Backspace);
    }
    h.settle().await;
    assert_eq!(h.app.input, "T");
    assert!(!h.app.panel.is_visible());
}

#[tokio::test(start_paused = true)]
/// What: Picking a suggestion fills the input; Enter then records it in history.
///
/// Output:
/// - Input holds the suggestion, history holds one entry, and the store was written.
async fn pick_suggestion_then_submit_records_history() {
    let mut h = Harness::new();
    h.type_str("ADP");
    h.settle().await;

    h.key(KeyCode::Down);
    assert_eq!(h.app.focus, Focus::Suggestions);
    h.key(KeyCode::Down);
    h.key(KeyCode::Enter);
    assert_eq!(h.app.focus, Focus::Search);
    assert_eq!(h.app.input, "Compare ADP with competitors");
    assert!(!h.app.panel.is_visible());

    h.key(KeyCode::Enter);
    assert_eq!(h.app.recent, vec!["Compare ADP with competitors"]);
    let raw = h.store.get(HISTORY_KEY).expect("history persisted");
    assert_eq!(raw, r#"["Compare ADP with competitors"]"#);

    // Nothing pending revives the dropdown after submit
    h.settle().await;
    assert!(!h.app.panel.is_visible());
}

#[tokio::test(start_paused = true)]
/// What: Repeated submits keep the history de-duplicated and most recent first.
async fn repeated_submits_dedupe_history() {
    let mut h = Harness::new();
    for q in ["TNET revenue", "ADP margins", "TNET revenue"] {
        h.app.input.clear();
        h.type_str(q);
        h.key(KeyCode::Enter);
    }
    assert_eq!(h.app.recent, vec!["TNET revenue", "ADP margins"]);
    assert_eq!(h.ctx.history.load(), vec!["TNET revenue", "ADP margins"]);
}

#[tokio::test(start_paused = true)]
/// What: Esc closes a visible dropdown first, then quits.
async fn esc_closes_panel_then_quits() {
    let mut h = Harness::new();
    h.type_str("TNET");
    h.settle().await;
    assert!(h.app.panel.is_visible());

    assert!(!h.key(KeyCode::Esc));
    assert!(!h.app.panel.is_visible());
    assert!(h.key(KeyCode::Esc));
}
