use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::Card;
use crate::errors::domain::{DomainError, InfraErrorKind};

pub type GameId = String;
pub type PlayerId = String;
/// Index into `Game::players` (seating order).
pub type Seat = usize;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Created, accepting players.
    Lobby,
    /// Players place bids in turn order, dealer last.
    Bidding,
    /// Playing tricks within the round.
    Playing,
    /// All rounds complete.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub hand: Vec<Card>,
    pub current_bid: u8,
    /// Turn index at which this player bid in the current round.
    pub bid_order: usize,
    pub tricks_won: u8,
    pub score: i32,
    pub is_bot: bool,
    pub missed_bids: u32,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            hand: Vec::new(),
            current_bid: 0,
            bid_order: 0,
            tricks_won: 0,
            score: 0,
            is_bot: false,
            missed_bids: 0,
        }
    }

    /// Clear per-round state ahead of a new deal.
    pub(crate) fn reset_for_round(&mut self) {
        self.hand.clear();
        self.current_bid = 0;
        self.tricks_won = 0;
    }
}

/// One card played into a trick.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub player_id: PlayerId,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trick {
    /// Insertion order is play order.
    pub plays: Vec<Play>,
    pub leader_id: PlayerId,
    /// Empty until every seat has played.
    pub winner_id: String,
}

impl Trick {
    pub fn led_by(leader_id: impl Into<PlayerId>) -> Self {
        Self {
            plays: Vec::new(),
            leader_id: leader_id.into(),
            winner_id: String::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.winner_id.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// 1-based.
    pub round_number: usize,
    /// Hand size dealt to each player this round.
    pub total_cards: u8,
    pub dealer_index: Seat,
    pub bids: BTreeMap<PlayerId, u8>,
    /// Bidding turn order: seats after the dealer, dealer last.
    pub bid_order: Vec<PlayerId>,
    pub current_bid_turn: usize,
    pub tricks: Vec<Trick>,
    pub current_trick: Option<Trick>,
    pub trick_turn_index: usize,
    pub trick_leader: Seat,
}

impl Round {
    pub fn new(
        round_number: usize,
        total_cards: u8,
        dealer_index: Seat,
        bid_order: Vec<PlayerId>,
    ) -> Self {
        Self {
            round_number,
            total_cards,
            dealer_index,
            bids: BTreeMap::new(),
            bid_order,
            current_bid_turn: 0,
            tricks: Vec::new(),
            current_trick: None,
            trick_turn_index: 0,
            trick_leader: 0,
        }
    }

    pub fn bidding_complete(&self) -> bool {
        self.current_bid_turn >= self.bid_order.len()
    }

    pub fn bid_sum(&self) -> u32 {
        self.bids.values().map(|&b| b as u32).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundResult {
    pub player_id: PlayerId,
    pub bid: u8,
    pub tricks_won: u8,
    pub round_score: i32,
}

/// Immutable snapshot appended once per completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round_number: usize,
    pub total_cards: u8,
    pub results: Vec<PlayerRoundResult>,
}

/// Entire game container; owns its players and the live round outright.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    /// Seating order, fixed once the lobby closes.
    pub players: Vec<Player>,
    pub state: GamePhase,
    pub current_round: Option<Round>,
    pub round_sequence: Vec<u8>,
    /// Zero-based index into `round_sequence`.
    pub current_round_index: usize,
    pub creator_max_cards: i32,
    pub round_results: Vec<RoundResult>,
    /// Bumped on every state change.
    pub version: u64,
}

impl Game {
    pub fn new(id: impl Into<GameId>, creator: Player, creator_max_cards: i32) -> Self {
        Self {
            id: id.into(),
            players: vec![creator],
            state: GamePhase::Lobby,
            current_round: None,
            round_sequence: Vec::new(),
            current_round_index: 0,
            creator_max_cards,
            round_results: Vec::new(),
            version: 0,
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn seat_of(&self, player_id: &str) -> Option<Seat> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub(crate) fn touch(&mut self) {
        self.version += 1;
    }

    pub(crate) fn require_round(&self, ctx: &'static str) -> Result<&Round, DomainError> {
        self.current_round.as_ref().ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Invariant violated: current round must be set ({ctx})"),
            )
        })
    }

    pub(crate) fn require_round_mut(
        &mut self,
        ctx: &'static str,
    ) -> Result<&mut Round, DomainError> {
        self.current_round.as_mut().ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Invariant violated: current round must be set ({ctx})"),
            )
        })
    }

    /// True while a resolved trick is on the table waiting for the deferred advance.
    pub fn awaiting_trick_advance(&self) -> bool {
        self.state == GamePhase::Playing
            && self
                .current_round
                .as_ref()
                .and_then(|r| r.current_trick.as_ref())
                .is_some_and(Trick::is_resolved)
    }

    /// Whether every round in the sequence has been played.
    pub fn is_finished(&self) -> bool {
        self.state == GamePhase::Finished
    }
}

/// Seat `n` steps clockwise from `start`.
#[inline]
pub fn seat_offset(start: Seat, n: usize, player_count: usize) -> Seat {
    (start + n) % player_count
}

/// Seat expected to play next in a trick.
#[inline]
pub fn expected_actor(trick_leader: Seat, play_count: usize, player_count: usize) -> Seat {
    seat_offset(trick_leader, play_count, player_count)
}
