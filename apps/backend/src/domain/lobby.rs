//! Lobby lifecycle: seating players, starting and resetting a game.

use rand::Rng;
use tracing::info;

use crate::domain::rules::{compute_round_sequence, effective_max_cards, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::{Game, GamePhase, Player, Round};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

impl Game {
    /// Seat a new player. Only allowed while the game is in the lobby.
    pub fn join(&mut self, player: Player) -> Result<&Player, DomainError> {
        if self.state != GamePhase::Lobby {
            return Err(DomainError::conflict(
                ConflictKind::GameAlreadyStarted,
                "Game already started",
            ));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(DomainError::conflict(
                ConflictKind::GameFull,
                format!("Game is full ({MAX_PLAYERS} players)"),
            ));
        }
        self.players.push(player);
        self.touch();
        let seated = &self.players[self.players.len() - 1];
        info!(
            game_id = %self.id,
            player_id = %seated.id,
            seats = self.players.len(),
            "Player joined"
        );
        Ok(seated)
    }

    /// Close the lobby, fix the round sequence, pick a random dealer and deal round one.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<&Round, DomainError> {
        if self.state != GamePhase::Lobby {
            return Err(DomainError::conflict(
                ConflictKind::GameAlreadyStarted,
                "Game already started",
            ));
        }
        let n = self.player_count();
        if n < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers,
                format!("Need at least {MIN_PLAYERS} players to start"),
            ));
        }

        let max_cards = effective_max_cards(self.creator_max_cards, n);
        let sequence = compute_round_sequence(max_cards);
        let dealer_index = rng.random_range(0..n);

        self.round_sequence = sequence;
        self.current_round_index = 0;
        self.start_round(dealer_index, rng)?;

        info!(
            game_id = %self.id,
            players = n,
            max_cards,
            dealer_index,
            "Game started; bidding phase begins"
        );
        self.require_round("start")
    }

    /// Return the game to the lobby with the same seats and no history.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            let fresh = Player::new(player.id.clone(), player.display_name.clone());
            *player = Player {
                is_bot: player.is_bot,
                ..fresh
            };
        }
        self.state = GamePhase::Lobby;
        self.current_round = None;
        self.round_sequence.clear();
        self.current_round_index = 0;
        self.round_results.clear();
        self.touch();
        info!(game_id = %self.id, "Game reset to lobby");
    }
}
