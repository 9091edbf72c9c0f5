//! Game flow orchestration: bridges the pure engine with the registry,
//! the deferred trick scheduler and snapshot publishing.
//!
//! Every operation locks exactly one game for a synchronous
//! check-then-commit section and publishes a snapshot before unlocking.

mod lobby;
mod player_actions;
mod round_lifecycle;

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::Game;
use crate::error::AppError;
use crate::services::publisher::SnapshotPublisher;
use crate::services::registry::GameRegistry;
use crate::services::scheduler::TrickAdvanceScheduler;

pub use lobby::CreatedGame;

pub struct GameFlowService {
    registry: Arc<GameRegistry>,
    publisher: Arc<dyn SnapshotPublisher>,
    scheduler: TrickAdvanceScheduler,
}

impl GameFlowService {
    pub fn new(config: &EngineConfig, publisher: Arc<dyn SnapshotPublisher>) -> Self {
        Self {
            registry: Arc::new(GameRegistry::new(config.deal_seed)),
            publisher,
            scheduler: TrickAdvanceScheduler::new(config.trick_reveal_delay),
        }
    }

    pub fn registry(&self) -> &Arc<GameRegistry> {
        &self.registry
    }

    pub fn scheduler(&self) -> &TrickAdvanceScheduler {
        &self.scheduler
    }

    /// Current state of a game.
    pub fn get_game_state(&self, game_id: &str) -> Result<GameSnapshot, AppError> {
        let snap = self
            .registry
            .with_game(game_id, |slot| Ok(snapshot(&slot.game)))?;
        Ok(snap)
    }

    fn publish(&self, game: &Game) {
        self.publisher.publish(&snapshot(game));
    }
}
