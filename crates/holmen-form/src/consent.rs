//! # Consent Banner
//!
//! Shows the cookie banner once per visitor. A persisted choice suppresses
//! the banner entirely; otherwise it appears after a short delay and stays
//! until the visitor accepts or declines. The choice is written to the
//! key-value store and the banner is hidden. A choice the store refused is
//! reported to the caller as [`ConsentError::NotPersisted`].

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use holmen_core::{ConsentChoice, StoreError, CONSENT_STORAGE_KEY};
use holmen_state::{BannerError, BannerState, ConsentBannerState};

use crate::ports::{BannerView, KeyValueStore};
use crate::timer::{self, TimerHandle};

/// Errors from recording a consent choice.
#[derive(Debug, thiserror::Error)]
pub enum ConsentError {
    /// The banner already holds a decision.
    #[error(transparent)]
    Transition(#[from] BannerError),

    /// The choice was taken for this session but the store refused it, so
    /// the banner will be offered again on the next start.
    #[error("consent choice {choice} not persisted: {source}")]
    NotPersisted {
        choice: ConsentChoice,
        source: StoreError,
    },
}

/// Cookie banner controller.
pub struct ConsentBanner<K: ?Sized, V: ?Sized> {
    store: Arc<K>,
    view: Arc<V>,
    state: Arc<Mutex<ConsentBannerState>>,
    pending_show: Mutex<Option<TimerHandle>>,
    delay: Duration,
}

impl<K, V> ConsentBanner<K, V>
where
    K: KeyValueStore + ?Sized,
    V: BannerView + ?Sized + 'static,
{
    pub fn new(store: Arc<K>, view: Arc<V>, delay: Duration) -> Self {
        Self {
            store,
            view,
            state: Arc::new(Mutex::new(ConsentBannerState::new())),
            pending_show: Mutex::new(None),
            delay,
        }
    }

    /// Read the persisted choice and schedule the banner when there is none.
    ///
    /// An empty stored value counts as absent. An unrecognized one keeps the
    /// banner hidden without adopting a choice.
    pub fn start(&self) {
        let stored = self
            .store
            .get(CONSENT_STORAGE_KEY)
            .filter(|value| !value.is_empty());

        if let Some(value) = stored {
            match value.parse::<ConsentChoice>() {
                Ok(choice) => {
                    if let Err(e) = self.state.lock().restore(choice) {
                        tracing::warn!("consent banner already started: {e}");
                    } else {
                        tracing::debug!(%choice, "stored consent restored");
                    }
                }
                Err(e) => tracing::warn!("banner stays hidden: {e}"),
            }
            return;
        }

        let state = Arc::clone(&self.state);
        let view = Arc::clone(&self.view);
        let handle = timer::schedule(self.delay, move || {
            let shown = state.lock().show();
            match shown {
                Ok(()) => view.set_visible(true),
                Err(e) => tracing::debug!("banner not shown: {e}"),
            }
        });
        *self.pending_show.lock() = handle;
    }

    pub fn accept(&self) -> Result<(), ConsentError> {
        self.decide(ConsentChoice::Accepted)
    }

    pub fn decline(&self) -> Result<(), ConsentError> {
        self.decide(ConsentChoice::Declined)
    }

    /// Record the visitor's choice, persist it, and hide the banner.
    ///
    /// A choice made before the delay elapses cancels the pending show. The
    /// banner is hidden even when persisting fails.
    pub fn decide(&self, choice: ConsentChoice) -> Result<(), ConsentError> {
        if let Some(pending) = self.pending_show.lock().take() {
            pending.cancel();
        }
        self.state.lock().decide(choice)?;

        let persisted = self.store.set(CONSENT_STORAGE_KEY, choice.as_str());
        self.view.set_visible(false);
        match persisted {
            Ok(()) => {
                tracing::info!(%choice, "cookie consent recorded");
                Ok(())
            }
            Err(source) => {
                tracing::warn!(%choice, "consent choice not persisted: {source}");
                Err(ConsentError::NotPersisted { choice, source })
            }
        }
    }

    pub fn state(&self) -> BannerState {
        self.state.lock().state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryBannerView, MemoryStore};

    fn banner(
        store: MemoryStore,
    ) -> (
        Arc<MemoryStore>,
        Arc<MemoryBannerView>,
        ConsentBanner<MemoryStore, MemoryBannerView>,
    ) {
        let store = Arc::new(store);
        let view = Arc::new(MemoryBannerView::new());
        let banner = ConsentBanner::new(store.clone(), view.clone(), Duration::from_millis(1000));
        (store, view, banner)
    }

    #[tokio::test(start_paused = true)]
    async fn first_visit_shows_after_delay() {
        let (_, view, b) = banner(MemoryStore::new());
        b.start();

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(!view.is_visible());
        assert_eq!(b.state(), BannerState::Unknown);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(view.is_visible());
        assert_eq!(b.state(), BannerState::Shown);
    }

    #[tokio::test(start_paused = true)]
    async fn accept_persists_and_hides() {
        let (store, view, b) = banner(MemoryStore::new());
        b.start();
        tokio::time::sleep(Duration::from_millis(1100)).await;

        b.accept().unwrap();
        assert_eq!(store.get(CONSENT_STORAGE_KEY).as_deref(), Some("accepted"));
        assert!(!view.is_visible());
        assert_eq!(b.state(), BannerState::Accepted);
    }

    #[tokio::test(start_paused = true)]
    async fn stored_choice_suppresses_banner() {
        let (_, view, b) = banner(MemoryStore::new().with_entry(CONSENT_STORAGE_KEY, "declined"));
        b.start();
        tokio::time::sleep(Duration::from_millis(5000)).await;

        assert!(view.history().is_empty());
        assert_eq!(b.state(), BannerState::Declined);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_stored_value_counts_as_absent() {
        let (_, view, b) = banner(MemoryStore::new().with_entry(CONSENT_STORAGE_KEY, ""));
        b.start();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(view.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn unrecognized_stored_value_keeps_banner_hidden() {
        let (_, view, b) = banner(MemoryStore::new().with_entry(CONSENT_STORAGE_KEY, "maybe"));
        b.start();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(view.history().is_empty());
        assert_eq!(b.state(), BannerState::Unknown);
    }

    #[tokio::test(start_paused = true)]
    async fn early_decision_cancels_pending_show() {
        let (store, view, b) = banner(MemoryStore::new());
        b.start();
        tokio::time::sleep(Duration::from_millis(500)).await;

        b.decline().unwrap();
        tokio::time::sleep(Duration::from_millis(1000)).await;

        assert_eq!(view.history(), vec![false]);
        assert_eq!(store.get(CONSENT_STORAGE_KEY).as_deref(), Some("declined"));
        assert_eq!(b.state(), BannerState::Declined);
    }

    #[tokio::test(start_paused = true)]
    async fn second_decision_is_rejected() {
        let (store, _, b) = banner(MemoryStore::new());
        b.accept().unwrap();
        assert!(matches!(b.decline(), Err(ConsentError::Transition(_))));
        assert_eq!(store.get(CONSENT_STORAGE_KEY).as_deref(), Some("accepted"));
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Corrupt("read-only".into()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn store_failure_is_reported_and_banner_hidden() {
        let view = Arc::new(MemoryBannerView::new());
        let b = ConsentBanner::new(Arc::new(FailingStore), view.clone(), Duration::from_millis(1000));
        b.start();
        tokio::time::sleep(Duration::from_millis(1100)).await;

        match b.accept() {
            Err(ConsentError::NotPersisted { choice, source }) => {
                assert_eq!(choice, ConsentChoice::Accepted);
                assert!(matches!(source, StoreError::Corrupt(_)));
            }
            other => panic!("expected NotPersisted, got: {other:?}"),
        }
        assert!(!view.is_visible());
        assert_eq!(b.state(), BannerState::Accepted);
    }
}
