//! Round setup and the bidding state machine.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::dealing::{create_deck, deal_cards, shuffle_deck};
use crate::domain::rules::{valid_bid_range, violates_dealer_hook, DECK_SIZE};
use crate::domain::state::{seat_offset, Game, GamePhase, PlayerId, Round, Seat, Trick};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

/// Result of an accepted bid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidOutcome {
    pub bids: BTreeMap<PlayerId, u8>,
    /// Set once the last bid is in and trick play has begun.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trick_leader_id: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_bidder_id: Option<PlayerId>,
}

/// Bidding order for a dealer seat: everyone after the dealer, dealer last.
pub fn bidding_order(players: &[PlayerId], dealer_index: Seat) -> Vec<PlayerId> {
    let n = players.len();
    (1..=n)
        .map(|step| players[seat_offset(dealer_index, step, n)].clone())
        .collect()
}

/// Strictly highest bid leads; ties go to whoever bid that value first in turn order.
pub fn determine_trick_leader(round: &Round) -> Option<&PlayerId> {
    let mut best: Option<(&PlayerId, u8)> = None;
    for pid in &round.bid_order {
        let Some(&bid) = round.bids.get(pid) else {
            continue;
        };
        match best {
            Some((_, best_bid)) if bid <= best_bid => {}
            _ => best = Some((pid, bid)),
        }
    }
    best.map(|(pid, _)| pid)
}

pub(crate) fn ensure_deal_fits(total_cards: u8, player_count: usize) -> Result<(), DomainError> {
    if total_cards as usize * player_count > DECK_SIZE {
        return Err(DomainError::infra(
            InfraErrorKind::InsufficientCards,
            format!("A {total_cards}-card round cannot be dealt to {player_count} players"),
        ));
    }
    Ok(())
}

impl Game {
    /// Build the round at `current_round_index` with the given dealer, deal
    /// fresh hands and open bidding.
    pub(crate) fn start_round<R: Rng>(
        &mut self,
        dealer_index: Seat,
        rng: &mut R,
    ) -> Result<(), DomainError> {
        let total_cards = *self
            .round_sequence
            .get(self.current_round_index)
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!(
                        "No hand size for round index {} of {}",
                        self.current_round_index,
                        self.round_sequence.len()
                    ),
                )
            })?;
        let n = self.player_count();
        ensure_deal_fits(total_cards, n)?;

        let ids: Vec<PlayerId> = self.players.iter().map(|p| p.id.clone()).collect();
        let order = bidding_order(&ids, dealer_index);

        for player in &mut self.players {
            player.reset_for_round();
        }
        let mut deck = create_deck();
        shuffle_deck(&mut deck, rng);
        deal_cards(&mut deck, &mut self.players, total_cards as usize)?;

        let round_number = self.current_round_index + 1;
        self.current_round = Some(Round::new(round_number, total_cards, dealer_index, order));
        self.state = GamePhase::Bidding;
        self.touch();

        info!(
            game_id = %self.id,
            round_number,
            total_cards,
            dealer_index,
            "Round dealt; bidding open"
        );
        Ok(())
    }

    /// Record a bid from the player whose turn it is.
    pub fn submit_bid(&mut self, player_id: &str, bid: i32) -> Result<BidOutcome, DomainError> {
        if self.state != GamePhase::Bidding {
            return Err(DomainError::validation(
                ValidationKind::NotInBiddingPhase,
                "Not in bidding phase",
            ));
        }
        let dealer_id = {
            let round = self.require_round("submit_bid")?;
            self.players
                .get(round.dealer_index)
                .map(|p| p.id.clone())
                .ok_or_else(|| {
                    DomainError::infra(InfraErrorKind::DataCorruption, "Dealer seat out of range")
                })?
        };
        let round = self.require_round_mut("submit_bid")?;

        let Some(expected) = round.bid_order.get(round.current_bid_turn) else {
            return Err(DomainError::validation(
                ValidationKind::NotInBiddingPhase,
                "Bidding is already complete",
            ));
        };
        if expected != player_id {
            return Err(DomainError::validation(
                ValidationKind::NotYourTurn,
                format!("Not your turn to bid; waiting on {expected}"),
            ));
        }

        let range = valid_bid_range(round.total_cards);
        let bid = match u8::try_from(bid) {
            Ok(b) if range.contains(&b) => b,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::InvalidBid,
                    format!("Bid must be in range {range:?}"),
                ))
            }
        };

        if player_id == dealer_id && violates_dealer_hook(round.total_cards, round.bid_sum(), bid) {
            return Err(DomainError::validation(
                ValidationKind::DealerHookViolation,
                format!(
                    "Dealer cannot bid {bid}: total bids would equal {} cards",
                    round.total_cards
                ),
            ));
        }

        // Commit
        let turn = round.current_bid_turn;
        round.bids.insert(player_id.to_string(), bid);
        round.current_bid_turn += 1;
        let complete = round.bidding_complete();
        let next_bidder_id = round.bid_order.get(round.current_bid_turn).cloned();

        if let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) {
            player.current_bid = bid;
            player.bid_order = turn;
        }
        debug!(game_id = %self.id, player_id, bid, turn, "Bid accepted");

        let trick_leader_id = if complete {
            Some(self.begin_trick_play()?)
        } else {
            None
        };
        self.touch();

        Ok(BidOutcome {
            bids: self.require_round("submit_bid")?.bids.clone(),
            trick_leader_id,
            next_bidder_id,
        })
    }

    /// Close bidding: the top bidder leads the first trick.
    fn begin_trick_play(&mut self) -> Result<PlayerId, DomainError> {
        let leader_id = {
            let round = self.require_round("begin_trick_play")?;
            determine_trick_leader(round).cloned().ok_or_else(|| {
                DomainError::infra(InfraErrorKind::DataCorruption, "Bidding closed with no bids")
            })?
        };
        let leader_seat = self.seat_of(&leader_id).ok_or_else(|| {
            DomainError::infra(InfraErrorKind::DataCorruption, "Trick leader is not seated")
        })?;

        let round = self.require_round_mut("begin_trick_play")?;
        round.current_trick = Some(Trick::led_by(leader_id.clone()));
        round.trick_turn_index = 0;
        round.trick_leader = leader_seat;
        self.state = GamePhase::Playing;

        info!(game_id = %self.id, leader_id = %leader_id, "Bidding complete; trick play begins");
        Ok(leader_id)
    }
}
