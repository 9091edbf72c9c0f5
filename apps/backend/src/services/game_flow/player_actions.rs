use std::sync::Arc;

use tracing::debug;

use super::round_lifecycle::run_deferred_advance;
use super::GameFlowService;
use crate::domain::bidding::BidOutcome;
use crate::domain::tricks::PlayOutcome;
use crate::domain::Card;
use crate::error::AppError;

impl GameFlowService {
    /// Record a bid from the player on turn.
    pub fn submit_bid(
        &self,
        game_id: &str,
        player_id: &str,
        bid: i32,
    ) -> Result<BidOutcome, AppError> {
        let outcome = self.registry.with_game(game_id, |slot| {
            let outcome = slot.game.submit_bid(player_id, bid)?;
            self.publish(&slot.game);
            Ok(outcome)
        })?;
        Ok(outcome)
    }

    /// Play a card for the player on turn.
    ///
    /// When the card completes a trick, the follow-up transition is scheduled
    /// on the current Tokio runtime and applied after the reveal delay.
    pub fn play_card(
        &self,
        game_id: &str,
        player_id: &str,
        card: Card,
    ) -> Result<PlayOutcome, AppError> {
        let (outcome, version) = self.registry.with_game(game_id, |slot| {
            let outcome = slot.game.play_card(player_id, card)?;
            self.publish(&slot.game);
            Ok((outcome, slot.game.version))
        })?;

        if outcome.trick_complete.is_some() {
            let registry = Arc::clone(&self.registry);
            let publisher = Arc::clone(&self.publisher);
            let id = game_id.to_string();
            self.scheduler.schedule(game_id.to_string(), move || {
                run_deferred_advance(&registry, publisher.as_ref(), &id, version);
            });
            debug!(game_id, version, "Trick complete; advance deferred");
        }
        Ok(outcome)
    }
}
