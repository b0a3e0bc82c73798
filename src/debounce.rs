//! Trailing-edge debouncer backed by a single tokio worker task.
//!
//! Each [`Debouncer`] owns one worker. Triggers are queued to the worker,
//! which restarts its quiet-period timer on every new value and runs the
//! action once the timer elapses without interruption. The worker is the
//! only owner of the pending invocation, so replacing or cancelling it can
//! only happen through the handle that created it.

use std::time::Duration;

use tokio::{select, sync::mpsc, task::JoinHandle, time::sleep};

/// Message sent from the handle to its worker.
#[derive(Debug)]
enum DebounceMsg<T> {
    /// Replace the pending value and restart the quiet period.
    Trigger(T),
    /// Discard the pending value without firing.
    Cancel,
}

/// Handle coalescing rapid triggers into one delayed call of its action.
///
/// Details:
/// - The action receives the value of the latest trigger.
/// - At most one invocation is pending at a time; invocations run sequentially on the worker.
/// - A zero delay still defers the call to the worker task.
/// - Dropping the handle discards any pending invocation and stops the worker.
#[derive(Debug)]
pub struct Debouncer<T> {
    /// Channel into the worker.
    tx: mpsc::UnboundedSender<DebounceMsg<T>>,
    /// Quiet period before firing.
    delay: Duration,
    /// Worker task; aborted on drop.
    worker: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// What: Spawn a debouncer that calls `action` after `delay` of quiescence.
    ///
    /// Inputs:
    /// - `delay`: Quiet period measured from the most recent trigger.
    /// - `action`: Side-effecting callback; runs on the worker task and must not block for long.
    ///
    /// Output:
    /// - The trigger handle.
    ///
    /// Details:
    /// - Must be called from within a tokio runtime.
    pub fn new<F>(delay: Duration, action: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_worker(rx, delay, action));
        tracing::debug!(delay_ms = delay.as_millis(), "[Debounce] Worker started");
        Self { tx, delay, worker }
    }

    /// What: Schedule the action with `value`, replacing any pending invocation.
    pub fn trigger(&self, value: T) {
        if self.tx.send(DebounceMsg::Trigger(value)).is_err() {
            tracing::warn!("[Debounce] Worker stopped; trigger dropped");
        }
    }

    /// What: Discard the pending invocation, if any, without firing it.
    ///
    /// Details:
    /// - An invocation that already started runs to completion.
    pub fn cancel(&self) {
        let _ = self.tx.send(DebounceMsg::Cancel);
    }

    /// Configured quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

/// What: Worker loop: wait for a trigger, absorb follow-ups until `delay` passes quietly, fire.
///
/// Details:
/// - A fresh `sleep` is created on every loop pass, so each new trigger restarts the period.
/// - A closed channel ends the worker and drops the pending value.
async fn run_worker<T, F>(
    mut rx: mpsc::UnboundedReceiver<DebounceMsg<T>>,
    delay: Duration,
    mut action: F,
) where
    F: FnMut(T),
{
    'idle: loop {
        let mut latest = match rx.recv().await {
            Some(DebounceMsg::Trigger(v)) => v,
            Some(DebounceMsg::Cancel) => continue,
            None => break,
        };
        loop {
            select! {
                msg = rx.recv() => match msg {
                    Some(DebounceMsg::Trigger(v)) => latest = v,
                    Some(DebounceMsg::Cancel) => {
                        tracing::trace!("[Debounce] Pending invocation cancelled");
                        continue 'idle;
                    }
                    None => break 'idle,
                },
                () = sleep(delay) => break,
            }
        }
        action(latest);
    }
    tracing::debug!("[Debounce] Worker stopped");
}
