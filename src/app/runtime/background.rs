use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::SuggestionResults;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Terminal events come from the input thread; suggestion results from the debounce worker.
pub struct Channels {
    /// Terminal event sender handed to the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events consumed by the main loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Suggestion results sender handed to the debouncer action.
    pub results_tx: mpsc::UnboundedSender<SuggestionResults>,
    /// Suggestion results consumed by the main loop.
    pub results_rx: mpsc::UnboundedReceiver<SuggestionResults>,
}

impl Channels {
    /// Create all runtime channels.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (results_tx, results_rx) = mpsc::unbounded_channel::<SuggestionResults>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            results_tx,
            results_rx,
        }
    }
}

/// What: Spawn event reading thread for terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `event_thread_cancelled`: Atomic flag to signal thread cancellation
///
/// Details:
/// - Spawns a blocking thread that polls for terminal events
/// - Checks cancellation flag periodically to allow immediate exit
/// - Uses 50ms poll timeout to balance responsiveness and CPU usage
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        // receiver dropped means the event loop exited
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::trace!(error = %e, "[Runtime] Transient terminal read error");
                    }
                },
                Ok(false) | Err(_) => {}
            }
        }
        tracing::debug!("[Runtime] Event thread stopped");
    });
}
