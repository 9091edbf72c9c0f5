use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::{Game, GameId, Player, PlayerId};
use crate::error::AppError;

/// Identifiers handed back to the creator of a new game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGame {
    pub game_id: GameId,
    pub player_id: PlayerId,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl GameFlowService {
    /// Open a lobby seating only the creator.
    pub fn create_game(
        &self,
        display_name: &str,
        creator_max_cards: i32,
    ) -> Result<CreatedGame, AppError> {
        let creator = Player::new(new_id(), display_name);
        let created = CreatedGame {
            game_id: new_id(),
            player_id: creator.id.clone(),
        };
        let game = Game::new(created.game_id.clone(), creator, creator_max_cards);

        let slot = self.registry.insert(game);
        let guard = slot.lock();
        self.publish(&guard.game);
        info!(
            game_id = %created.game_id,
            player_id = %created.player_id,
            creator_max_cards,
            "Game created"
        );
        Ok(created)
    }

    /// Seat a new player in a lobby.
    pub fn join_game(&self, game_id: &str, display_name: &str) -> Result<Player, AppError> {
        let player = self.registry.with_game(game_id, |slot| {
            let seated = slot.game.join(Player::new(new_id(), display_name))?.clone();
            self.publish(&slot.game);
            Ok(seated)
        })?;
        Ok(player)
    }

    /// Close the lobby and deal the first round.
    pub fn start_game(&self, game_id: &str) -> Result<Game, AppError> {
        let game = self.registry.with_game(game_id, |slot| {
            slot.game.start(&mut slot.rng)?;
            self.publish(&slot.game);
            Ok(slot.game.clone())
        })?;
        Ok(game)
    }

    /// Put a game back in its lobby with the same seats, dropping any
    /// pending trick advance.
    pub fn reset_game(&self, game_id: &str) -> Result<GameSnapshot, AppError> {
        let snap = self.registry.with_game(game_id, |slot| {
            self.scheduler.cancel(game_id);
            slot.game.reset();
            let snap = snapshot(&slot.game);
            self.publisher.publish(&snap);
            Ok(snap)
        })?;
        Ok(snap)
    }
}
