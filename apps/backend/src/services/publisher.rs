//! Outbound seam for game snapshots.

use parking_lot::Mutex;

use crate::domain::snapshot::GameSnapshot;

/// Receives a snapshot after every state change. Called with the game lock
/// held, so implementations must not block.
pub trait SnapshotPublisher: Send + Sync {
    fn publish(&self, snapshot: &GameSnapshot);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPublisher;

impl SnapshotPublisher for NoopPublisher {
    fn publish(&self, _snapshot: &GameSnapshot) {}
}

/// Keeps every snapshot in memory, in publish order.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    seen: Mutex<Vec<GameSnapshot>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<GameSnapshot> {
        self.seen.lock().clone()
    }

    pub fn versions_for(&self, game_id: &str) -> Vec<u64> {
        self.seen
            .lock()
            .iter()
            .filter(|s| s.game_id() == game_id)
            .map(|s| s.version)
            .collect()
    }

    pub fn last_for(&self, game_id: &str) -> Option<GameSnapshot> {
        self.seen
            .lock()
            .iter()
            .rev()
            .find(|s| s.game_id() == game_id)
            .cloned()
    }
}

impl SnapshotPublisher for RecordingPublisher {
    fn publish(&self, snapshot: &GameSnapshot) {
        self.seen.lock().push(snapshot.clone());
    }
}
