//! # Cancellable Timers
//!
//! `schedule` runs a callback once after a delay on the current tokio runtime
//! and returns a handle. Cancelling the handle before the delay elapses
//! guarantees the callback never runs; cancelling afterwards is a no-op.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Handle to a pending one-shot callback.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Prevent the callback from running if it has not run yet.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the timer fired or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Run `callback` once after `delay`.
///
/// Returns `None` when called outside a tokio runtime; the callback is then
/// dropped without running.
pub fn schedule<F>(delay: Duration, callback: F) -> Option<TimerHandle>
where
    F: FnOnce() + Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => {
            let task = handle.spawn(async move {
                tokio::time::sleep(delay).await;
                callback();
            });
            Some(TimerHandle { task })
        }
        Err(e) => {
            tracing::warn!(?delay, "no tokio runtime, timer not scheduled: {e}");
            None
        }
    }
}
