use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use common::SavedJobs;
use feed::FeedSource;
use tracing::error;

use crate::feed_controller::{Completion, FeedController};

/// Mutable state of one app session, shared by all three screens.
#[derive(Debug, Default)]
pub struct Session {
    pub feed: FeedController,
    pub saved: SavedJobs,
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn FeedSource>,
    session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self {
            source,
            session: Arc::new(Mutex::new(Session::default())),
        }
    }

    /// Locks the session. The lock is never held across an `.await`.
    pub fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetches the feed and hands the result to the job list.
    /// Returns `None` when a fetch is already outstanding.
    ///
    /// The fetch runs on its own task so the result is recorded even if the
    /// caller is dropped before it finishes.
    pub async fn refresh(&self) -> Option<Completion> {
        let ticket = self.session().feed.begin_refresh()?;

        let state = self.clone();
        let task = tokio::spawn(async move {
            let result = state.source.fetch_jobs().await;
            state.session().feed.complete(ticket, result)
        });

        match task.await {
            Ok(completion) => Some(completion),
            Err(e) => {
                error!("feed refresh task failed: {e}");
                self.session().feed.cancel();
                Some(Completion::Stale)
            }
        }
    }
}
