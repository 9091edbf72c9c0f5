//! Error codes for the River backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the River backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Bid outside `0..=hand_size`
    InvalidBid,
    /// Dealer's bid would make the bid total equal the hand size
    DealerHookViolation,
    /// Must follow suit
    MustFollowSuit,
    /// Card not in hand
    CardNotInHand,
    /// Acting out of turn
    NotYourTurn,
    /// Bid submitted outside the bidding phase
    NotInBiddingPhase,
    /// Card played outside the playing phase
    NotInPlayingPhase,
    /// Fewer than two players seated at start
    NotEnoughPlayers,
    /// Parse card error
    ParseCard,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Lifecycle Conflicts
    /// Game already left the lobby
    GameAlreadyStarted,
    /// Lobby already seats the maximum number of players
    GameFull,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Deck could not cover the requested deal
    InsufficientCards,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBid => "INVALID_BID",
            Self::DealerHookViolation => "DEALER_HOOK_VIOLATION",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::NotInBiddingPhase => "NOT_IN_BIDDING_PHASE",
            Self::NotInPlayingPhase => "NOT_IN_PLAYING_PHASE",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::ParseCard => "PARSE_CARD",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::GameFull => "GAME_FULL",
            Self::Conflict => "CONFLICT",

            Self::InsufficientCards => "INSUFFICIENT_CARDS",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
