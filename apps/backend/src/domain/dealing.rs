//! Deck construction, shuffling and round-robin dealing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::DECK_SIZE;
use crate::domain::state::Player;
use crate::domain::{Card, JokerName, Rank, Suit};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Generate the 54-card deck in a fixed order: each suit 2..Ace, then J1, J2.
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck.push(Card::Joker(JokerName::J1));
    deck.push(Card::Joker(JokerName::J2));
    deck
}

/// Uniform in-place shuffle.
pub fn shuffle_deck<R: Rng>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Deal `cards_per_player` cards to each player, one card per player per pass,
/// consuming the deck from the front.
pub fn deal_cards(
    deck: &mut Vec<Card>,
    players: &mut [Player],
    cards_per_player: usize,
) -> Result<(), DomainError> {
    let needed = cards_per_player * players.len();
    if needed > deck.len() {
        return Err(DomainError::infra(
            InfraErrorKind::InsufficientCards,
            format!(
                "Cannot deal {cards_per_player} cards to {} players from {} cards",
                players.len(),
                deck.len()
            ),
        ));
    }

    let mut dealt = deck.drain(..needed);
    for _ in 0..cards_per_player {
        for player in players.iter_mut() {
            if let Some(card) = dealt.next() {
                player.hand.push(card);
            }
        }
    }
    Ok(())
}
