use std::sync::Arc;
use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::events::{handle_event, handle_suggestion_results};
use crate::store::FileStore;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};
use super::{AppContext, Result, RunOptions};

mod background;

use background::{Channels, spawn_event_thread};

/// Environment variable that skips raw-mode setup and the input thread.
pub const HEADLESS_ENV: &str = "MARKETIQ_TEST_HEADLESS";

/// What: Run the search screen end-to-end: open the store, build the context, drive the event
/// loop, and restore the terminal on exit.
///
/// Inputs:
/// - `options`: Store location, settings, and an optional prefilled query.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - History and the dark mode flag are written through on every change, so exit has
///   nothing to flush.
/// - With `MARKETIQ_TEST_HEADLESS=1` no terminal is touched and the loop waits for channel
///   traffic only.
pub async fn run(options: RunOptions) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut channels = Channels::new();
    let store = Arc::new(FileStore::open(&options.store_path));
    tracing::info!(store = %store.path().display(), headless, "[Runtime] Starting search screen");
    let ctx = AppContext::new(options.settings, store, channels.results_tx.clone());
    let mut app = ctx.initial_state(options.initial_query.as_deref());
    if !app.input.trim().is_empty() {
        let q = app.next_query();
        ctx.suggester.trigger(q);
    }

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }
        select! {
            Some(ev) = channels.event_rx.recv() => {
                if handle_event(ev, &mut app, &ctx) {
                    break;
                }
            }
            Some(results) = channels.results_rx.recv() => {
                handle_suggestion_results(&mut app, results);
            }
            else => break,
        }
    }

    tracing::debug!("[Runtime] Main loop exited");
    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
