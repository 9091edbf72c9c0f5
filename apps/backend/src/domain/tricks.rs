use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::state::{expected_actor, Game, GamePhase, Play, PlayerId, Trick};
use crate::domain::{compare_cards, hand_has_suit, lead_suit, Card};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

pub const TRICK_OVER_MESSAGE: &str = "Trick is over";

/// Winner details for a trick that just received its last card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickSummary {
    pub winner_id: PlayerId,
    pub winning_card: Card,
    pub message: String,
}

/// Result of an accepted play.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayOutcome {
    pub current_trick: Trick,
    pub tricks: Vec<Trick>,
    /// The acting player's hand after the play.
    pub player_hand: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trick_complete: Option<TrickSummary>,
}

/// What the deferred post-trick step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Nothing was waiting to advance.
    Idle,
    NextTrick { leader_id: PlayerId },
    NextRound { round_number: usize },
    GameFinished,
}

/// Cards `hand` may legally play onto `plays`.
pub fn legal_moves(hand: &[Card], plays: &[Play]) -> Vec<Card> {
    let Some(first) = plays.first() else {
        return hand.to_vec();
    };
    let lead = lead_suit(first.card);
    if hand_has_suit(hand, lead) {
        hand.iter()
            .copied()
            .filter(|c| c.natural_suit() == Some(lead))
            .collect()
    } else {
        hand.to_vec()
    }
}

/// Index of the winning play. The first of equally ranked plays keeps the trick.
pub fn resolve_trick(plays: &[Play]) -> Option<usize> {
    let lead = lead_suit(plays.first()?.card);
    let mut best = 0usize;
    for (i, play) in plays.iter().enumerate().skip(1) {
        if compare_cards(play.card, plays[best].card, lead).is_gt() {
            best = i;
        }
    }
    Some(best)
}

impl Game {
    /// Play a card into the current trick, enforcing turn order and follow-suit.
    pub fn play_card(&mut self, player_id: &str, card: Card) -> Result<PlayOutcome, DomainError> {
        if self.state != GamePhase::Playing {
            return Err(DomainError::validation(
                ValidationKind::NotInPlayingPhase,
                "Not in playing phase",
            ));
        }
        let n = self.player_count();
        let round = self.require_round("play_card")?;
        let trick = round.current_trick.as_ref().ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                "Invariant violated: playing phase without a current trick",
            )
        })?;
        if trick.is_resolved() {
            return Err(DomainError::validation(
                ValidationKind::NotYourTurn,
                "Trick is over; waiting for the next trick",
            ));
        }

        let seat = expected_actor(round.trick_leader, round.trick_turn_index, n);
        let actor = &self.players[seat];
        if actor.id != player_id {
            return Err(DomainError::validation(
                ValidationKind::NotYourTurn,
                format!("Not your turn to play; waiting on {}", actor.id),
            ));
        }

        let Some(pos) = actor.hand.iter().position(|&c| c == card) else {
            return Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("{card} is not in your hand"),
            ));
        };

        if let Some(first) = trick.plays.first() {
            let lead = lead_suit(first.card);
            let follows = card.natural_suit() == Some(lead);
            if !follows && hand_has_suit(&actor.hand, lead) {
                return Err(DomainError::validation(
                    ValidationKind::MustFollowSuit,
                    format!("Must follow suit: {}", lead.as_str()),
                ));
            }
        }

        // Commit
        let played = self.players[seat].hand.remove(pos);
        let round = self.require_round_mut("play_card")?;
        let trick = round.current_trick.as_mut().ok_or_else(|| {
            DomainError::infra(InfraErrorKind::DataCorruption, "Current trick vanished")
        })?;
        trick.plays.push(Play {
            player_id: player_id.to_string(),
            card: played,
        });
        round.trick_turn_index += 1;
        let all_played = trick.plays.len() == n;
        debug!(game_id = %self.id, player_id, card = %played, "Card played");

        let trick_complete = if all_played {
            Some(self.finish_trick()?)
        } else {
            None
        };
        self.touch();

        let round = self.require_round("play_card")?;
        Ok(PlayOutcome {
            current_trick: round.current_trick.clone().unwrap_or_else(|| Trick::led_by("")),
            tricks: round.tricks.clone(),
            player_hand: self.players[seat].hand.clone(),
            trick_complete,
        })
    }

    /// Resolve a full trick: credit the winner and archive it. The trick stays
    /// on the table until the deferred advance runs.
    fn finish_trick(&mut self) -> Result<TrickSummary, DomainError> {
        let round = self.require_round_mut("finish_trick")?;
        let trick = round.current_trick.as_mut().ok_or_else(|| {
            DomainError::infra(InfraErrorKind::DataCorruption, "No trick to resolve")
        })?;
        let best = resolve_trick(&trick.plays).ok_or_else(|| {
            DomainError::infra(InfraErrorKind::DataCorruption, "Cannot resolve an empty trick")
        })?;
        let winning = trick.plays[best].clone();
        trick.winner_id = winning.player_id.clone();
        let archived = trick.clone();
        round.tricks.push(archived);

        let winner = self
            .players
            .iter_mut()
            .find(|p| p.id == winning.player_id)
            .ok_or_else(|| {
                DomainError::infra(InfraErrorKind::DataCorruption, "Trick winner is not seated")
            })?;
        winner.tricks_won += 1;

        info!(
            game_id = %self.id,
            winner_id = %winning.player_id,
            card = %winning.card,
            "Trick complete"
        );
        Ok(TrickSummary {
            winner_id: winning.player_id,
            winning_card: winning.card,
            message: TRICK_OVER_MESSAGE.to_string(),
        })
    }

    /// Deferred step after a trick is revealed: lead the next trick, or close
    /// the round when every hand is empty.
    pub fn advance_after_trick<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<AdvanceOutcome, DomainError> {
        if !self.awaiting_trick_advance() {
            return Ok(AdvanceOutcome::Idle);
        }

        if self.players.iter().any(|p| !p.hand.is_empty()) {
            let winner_id = self
                .require_round("advance_after_trick")?
                .current_trick
                .as_ref()
                .map(|t| t.winner_id.clone())
                .unwrap_or_default();
            let seat = self.seat_of(&winner_id).ok_or_else(|| {
                DomainError::infra(InfraErrorKind::DataCorruption, "Trick winner is not seated")
            })?;
            let round = self.require_round_mut("advance_after_trick")?;
            round.current_trick = Some(Trick::led_by(winner_id.clone()));
            round.trick_turn_index = 0;
            round.trick_leader = seat;
            self.touch();
            debug!(game_id = %self.id, leader_id = %winner_id, "Next trick");
            return Ok(AdvanceOutcome::NextTrick {
                leader_id: winner_id,
            });
        }

        self.complete_round(rng)?;
        if self.is_finished() {
            Ok(AdvanceOutcome::GameFinished)
        } else {
            Ok(AdvanceOutcome::NextRound {
                round_number: self.current_round_index + 1,
            })
        }
    }
}
