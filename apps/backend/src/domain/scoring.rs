use rand::Rng;
use tracing::{error, info};

use crate::domain::bidding::ensure_deal_fits;
use crate::domain::rules::round_score;
use crate::domain::state::{seat_offset, Game, GamePhase, PlayerRoundResult, RoundResult};
use crate::errors::domain::DomainError;

/// Count rounds in `history` where the player's tricks differed from their bid.
pub fn missed_bids_for(history: &[RoundResult], player_id: &str) -> u32 {
    history
        .iter()
        .flat_map(|r| r.results.iter())
        .filter(|r| r.player_id == player_id && r.tricks_won != r.bid)
        .count() as u32
}

impl Game {
    /// Score the finished round, then deal the next one or finish the game.
    pub(crate) fn complete_round<R: Rng>(&mut self, rng: &mut R) -> Result<(), DomainError> {
        let n = self.player_count();
        let next_index = self.current_round_index + 1;
        if let Some(&next_total) = self.round_sequence.get(next_index) {
            if let Err(e) = ensure_deal_fits(next_total, n) {
                error!(
                    game_id = %self.id,
                    next_total,
                    players = n,
                    error = %e,
                    "Next round cannot be dealt"
                );
                return Err(e);
            }
        }

        let round = self.require_round("complete_round")?;
        let round_number = round.round_number;
        let total_cards = round.total_cards;
        let dealer_index = round.dealer_index;

        let mut results = Vec::with_capacity(n);
        for player in &self.players {
            let bid = round.bids.get(&player.id).copied().unwrap_or(player.current_bid);
            results.push(PlayerRoundResult {
                player_id: player.id.clone(),
                bid,
                tricks_won: player.tricks_won,
                round_score: round_score(bid, player.tricks_won),
            });
        }
        for (player, result) in self.players.iter_mut().zip(&results) {
            player.score += result.round_score;
        }
        self.round_results.push(RoundResult {
            round_number,
            total_cards,
            results,
        });
        self.current_round_index = next_index;

        info!(game_id = %self.id, round_number, "Round scored");

        if next_index < self.round_sequence.len() {
            let next_dealer = seat_offset(dealer_index, 1, n);
            return self.start_round(next_dealer, rng).inspect_err(|e| {
                error!(game_id = %self.id, error = %e, "Failed to deal next round");
            });
        }

        self.state = GamePhase::Finished;
        for i in 0..n {
            let missed = missed_bids_for(&self.round_results, &self.players[i].id);
            self.players[i].missed_bids = missed;
        }
        self.touch();
        info!(game_id = %self.id, rounds = self.round_results.len(), "Game finished");
        Ok(())
    }
}
