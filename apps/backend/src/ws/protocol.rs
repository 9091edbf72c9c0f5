use serde::Serialize;

use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::Game;

/// Messages pushed to websocket clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg<'a> {
    Ack { message: &'static str },
    GameState { version: u64, game: &'a Game },
}

impl<'a> ServerMsg<'a> {
    pub fn game_state(snapshot: &'a GameSnapshot) -> Self {
        ServerMsg::GameState {
            version: snapshot.version,
            game: &snapshot.game,
        }
    }
}
