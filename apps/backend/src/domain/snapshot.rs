//! Serializable view of a game, pushed to subscribers after each change.

use serde::Serialize;

use crate::domain::state::Game;

/// Full game state at a given version.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub version: u64,
    pub game: Game,
}

impl GameSnapshot {
    pub fn game_id(&self) -> &str {
        &self.game.id
    }
}

/// Capture the current state of `game`.
pub fn snapshot(game: &Game) -> GameSnapshot {
    GameSnapshot {
        version: game.version,
        game: game.clone(),
    }
}
