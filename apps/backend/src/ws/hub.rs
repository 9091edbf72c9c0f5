use std::sync::Arc;

use actix::prelude::*;
use dashmap::DashMap;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::GameId;
use crate::services::publisher::SnapshotPublisher;

#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct SnapshotBroadcast {
    pub snapshot: Arc<GameSnapshot>,
}

/// Websocket sessions grouped by the game they watch.
#[derive(Default)]
pub struct SnapshotHub {
    sessions: DashMap<GameId, DashMap<Uuid, Recipient<SnapshotBroadcast>>>,
}

impl SnapshotHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, game_id: &str, recipient: Recipient<SnapshotBroadcast>) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions
            .entry(game_id.to_string())
            .or_default()
            .insert(token, recipient);
        debug!(game_id, %token, "Session registered");
        token
    }

    pub fn unregister(&self, game_id: &str, token: Uuid) {
        if let Some(entry) = self.sessions.get(game_id) {
            entry.remove(&token);
        }
        self.sessions.remove_if(game_id, |_, watchers| watchers.is_empty());
        debug!(game_id, %token, "Session unregistered");
    }

    pub fn subscriber_count(&self, game_id: &str) -> usize {
        self.sessions.get(game_id).map_or(0, |entry| entry.len())
    }

    pub fn broadcast(&self, game_id: &str, message: SnapshotBroadcast) {
        if let Some(entry) = self.sessions.get(game_id) {
            trace!(game_id, watchers = entry.len(), "Broadcasting snapshot");
            for recipient in entry.iter() {
                recipient.value().do_send(message.clone());
            }
        }
    }
}

impl SnapshotPublisher for SnapshotHub {
    fn publish(&self, snapshot: &GameSnapshot) {
        if self.subscriber_count(snapshot.game_id()) == 0 {
            return;
        }
        self.broadcast(
            snapshot.game_id(),
            SnapshotBroadcast {
                snapshot: Arc::new(snapshot.clone()),
            },
        );
    }
}
