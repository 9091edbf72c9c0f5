//! Domain layer: pure game rules and state, free of transport and locking.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod lobby;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::BidOutcome;
pub use cards_logic::{compare_cards, compare_trump, hand_has_suit, is_trump, lead_suit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, JokerName, Rank, Suit, TRUMP_SUIT};
pub use dealing::{create_deck, deal_cards, shuffle_deck};
pub use rules::compute_round_sequence;
pub use seed_derivation::derive_game_seed;
pub use snapshot::{snapshot, GameSnapshot};
pub use state::{Game, GameId, GamePhase, Player, PlayerId, Round, Trick};
pub use tricks::{AdvanceOutcome, PlayOutcome, TrickSummary};
