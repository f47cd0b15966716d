//! # Status Message Presenter
//!
//! Shows exactly one transient message at a time. Showing a new message
//! removes the current one and cancels its pending auto-dismiss. Each message
//! is removed after the configured lifetime or on explicit dismissal,
//! whichever comes first; the second removal attempt is a no-op.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use holmen_core::{MessageId, StatusKind, StatusMessage};

use crate::ports::FormSurface;
use crate::timer::{self, TimerHandle};

#[derive(Debug)]
struct ActiveMessage {
    id: MessageId,
    timer: Option<TimerHandle>,
}

/// Presenter of transient status messages for one form.
pub struct StatusPresenter<D: ?Sized> {
    surface: Arc<D>,
    active: Arc<Mutex<Option<ActiveMessage>>>,
    lifetime: Duration,
}

impl<D: FormSurface + ?Sized + 'static> StatusPresenter<D> {
    pub fn new(surface: Arc<D>, lifetime: Duration) -> Self {
        Self {
            surface,
            active: Arc::new(Mutex::new(None)),
            lifetime,
        }
    }

    /// Replace any visible message with a new one and schedule its removal.
    pub fn show(&self, text: impl Into<String>, kind: StatusKind) -> MessageId {
        let message = StatusMessage::new(text, kind);
        let id = message.id;

        let mut active = self.active.lock();
        if let Some(previous) = active.take() {
            if let Some(timer) = &previous.timer {
                timer.cancel();
            }
            self.surface.remove_message(previous.id);
        }
        self.surface.insert_message(&message);

        let surface = Arc::clone(&self.surface);
        let slot = Arc::clone(&self.active);
        let timer = timer::schedule(self.lifetime, move || {
            if take_if_current(&slot, id).is_some() {
                surface.remove_message(id);
                tracing::debug!(%id, "status message expired");
            }
        });

        *active = Some(ActiveMessage { id, timer });
        tracing::debug!(%id, %kind, "status message shown");
        id
    }

    /// Remove the message on explicit user request.
    ///
    /// Returns `false` when the message is already gone, whether it expired,
    /// was replaced, or was dismissed before.
    pub fn dismiss(&self, id: MessageId) -> bool {
        match take_if_current(&self.active, id) {
            Some(message) => {
                if let Some(timer) = &message.timer {
                    timer.cancel();
                }
                self.surface.remove_message(id);
                tracing::debug!(%id, "status message dismissed");
                true
            }
            None => false,
        }
    }

    /// The message currently on screen, if any.
    pub fn current(&self) -> Option<MessageId> {
        self.active.lock().as_ref().map(|m| m.id)
    }
}

fn take_if_current(slot: &Mutex<Option<ActiveMessage>>, id: MessageId) -> Option<ActiveMessage> {
    let mut active = slot.lock();
    if active.as_ref().is_some_and(|m| m.id == id) {
        active.take()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySurface;

    fn presenter() -> (Arc<MemorySurface>, StatusPresenter<MemorySurface>) {
        let surface = Arc::new(MemorySurface::new("Send"));
        let presenter = StatusPresenter::new(surface.clone(), Duration::from_millis(5000));
        (surface, presenter)
    }

    #[tokio::test(start_paused = true)]
    async fn new_message_replaces_old() {
        let (surface, p) = presenter();
        let first = p.show("first", StatusKind::Error);
        let second = p.show("second", StatusKind::Success);

        let messages = surface.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, second);
        assert_eq!(p.current(), Some(second));
        assert!(!p.dismiss(first));
    }

    #[tokio::test(start_paused = true)]
    async fn message_expires_after_lifetime() {
        let (surface, p) = presenter();
        p.show("hei", StatusKind::Success);

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert_eq!(surface.messages().len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(surface.messages().is_empty());
        assert_eq!(p.current(), None);
        assert_eq!(surface.snapshot().removed, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_then_timeout_removes_once() {
        let (surface, p) = presenter();
        let id = p.show("hei", StatusKind::Error);

        assert!(p.dismiss(id));
        assert!(!p.dismiss(id));
        tokio::time::sleep(Duration::from_millis(6000)).await;

        assert!(surface.messages().is_empty());
        assert_eq!(surface.snapshot().removed, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn replaced_message_timer_does_not_remove_successor() {
        let (surface, p) = presenter();
        p.show("first", StatusKind::Error);
        tokio::time::sleep(Duration::from_millis(3000)).await;
        let second = p.show("second", StatusKind::Error);

        // The first message's deadline passes; the second must survive it.
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(p.current(), Some(second));
        assert_eq!(surface.messages().len(), 1);

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert_eq!(p.current(), None);
    }
}
