use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use gallery_core::FetchState;

use crate::repository::PhotoRepository;

/// Bridges asynchronous fetch attempts to an observable [`FetchState`].
///
/// Constructing the feed schedules the first attempt; no external trigger is
/// needed. Each attempt runs on its own task, and every task stops writing
/// once the feed is dropped.
pub struct PhotoFeed {
    repository: Arc<dyn PhotoRepository>,
    state_tx: Arc<watch::Sender<FetchState>>,
    cancel: CancellationToken,
}

impl PhotoFeed {
    /// Creates the feed and starts the first fetch attempt.
    ///
    /// Must be called from within a tokio runtime; attempts are spawned on
    /// the ambient runtime.
    pub fn new(repository: Arc<dyn PhotoRepository>) -> Self {
        let (state_tx, _state_rx) = watch::channel(FetchState::Loading);
        let feed = Self {
            repository,
            state_tx: Arc::new(state_tx),
            cancel: CancellationToken::new(),
        };
        feed.refresh();
        feed
    }

    /// Starts a new fetch attempt: Loading, then exactly one terminal state.
    ///
    /// Overlapping attempts are neither serialized nor de-duplicated; the
    /// attempt finishing last wins.
    pub fn refresh(&self) {
        let repository = Arc::clone(&self.repository);
        let state_tx = Arc::clone(&self.state_tx);
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            if cancel.is_cancelled() {
                return;
            }
            state_tx.send_replace(FetchState::Loading);

            let outcome = tokio::select! {
                _ = cancel.cancelled() => return,
                outcome = repository.photos() => outcome,
            };
            match &outcome {
                Ok(photos) => log::info!("photo listing fetched, {} records", photos.len()),
                Err(err) => log::warn!("photo fetch failed: {err}"),
            }
            // A completion racing the owner's drop must not write.
            if cancel.is_cancelled() {
                return;
            }
            state_tx.send_replace(FetchState::conclude(outcome));
        });
    }

    /// The state of the most recent attempt.
    pub fn current(&self) -> FetchState {
        self.state_tx.borrow().clone()
    }

    /// A receiver observing every state the feed publishes.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state_tx.subscribe()
    }
}

impl Drop for PhotoFeed {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
