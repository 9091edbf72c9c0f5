//! Delayed post-trick transitions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::domain::state::GameId;

/// Runs one deferred job per game after a fixed delay. Jobs can be cancelled
/// until they fire; at most one job is pending per game.
pub struct TrickAdvanceScheduler {
    delay: Duration,
    pending: Arc<DashMap<GameId, (u64, AbortHandle)>>,
    tokens: AtomicU64,
}

impl TrickAdvanceScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Arc::new(DashMap::new()),
            tokens: AtomicU64::new(0),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `job` after the delay on the current Tokio runtime. Replaces any
    /// job already pending for the game.
    pub fn schedule<F>(&self, game_id: GameId, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let token = self.tokens.fetch_add(1, Ordering::Relaxed);
        let delay = self.delay;
        let pending = Arc::clone(&self.pending);
        let key = game_id.clone();

        // Hold the entry while spawning so a zero-delay job cannot deregister
        // before it is registered
        let entry = self.pending.entry(game_id.clone());
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            pending.remove_if(&key, |_, (t, _)| *t == token);
            job();
        });
        match entry {
            Entry::Occupied(mut occupied) => {
                let (_, previous) = occupied.insert((token, handle.abort_handle()));
                previous.abort();
            }
            Entry::Vacant(vacant) => {
                vacant.insert((token, handle.abort_handle()));
            }
        }
        debug!(game_id = %game_id, delay_ms = delay.as_millis() as u64, "Trick advance scheduled");
    }

    /// Abort the pending job for `game_id`. Returns whether one was pending.
    pub fn cancel(&self, game_id: &str) -> bool {
        match self.pending.remove(game_id) {
            Some((_, (_, handle))) => {
                handle.abort();
                debug!(game_id, "Pending trick advance cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, game_id: &str) -> bool {
        self.pending.contains_key(game_id)
    }
}
