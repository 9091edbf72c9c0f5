//! Card game logic: trump classification, comparing card strength, suit checks

use std::cmp::Ordering;

use super::cards_types::{Card, JokerName, Suit, TRUMP_SUIT};

/// True for jokers and every card of the trump suit.
pub fn is_trump(card: Card) -> bool {
    match card {
        Card::Joker(_) => true,
        Card::Standard { suit, .. } => suit == TRUMP_SUIT,
    }
}

/// Order two trump cards. `J1 > J2 > every other trump`, then rank.
pub fn compare_trump(a: Card, b: Card) -> Ordering {
    match (a, b) {
        (Card::Joker(ja), Card::Joker(jb)) => match (ja, jb) {
            (JokerName::J1, JokerName::J2) => Ordering::Greater,
            (JokerName::J2, JokerName::J1) => Ordering::Less,
            _ => Ordering::Equal,
        },
        (Card::Joker(_), Card::Standard { .. }) => Ordering::Greater,
        (Card::Standard { .. }, Card::Joker(_)) => Ordering::Less,
        (Card::Standard { rank: ra, .. }, Card::Standard { rank: rb, .. }) => ra.cmp(&rb),
    }
}

/// Compare `a` against `b` within a trick led in `lead`.
///
/// `Equal` is returned for two off-suit non-trump cards; callers resolving a
/// trick must only replace the current best on `Greater`.
pub fn compare_cards(a: Card, b: Card, lead: Suit) -> Ordering {
    match (is_trump(a), is_trump(b)) {
        (true, true) => compare_trump(a, b),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let (sa, sb) = (a.suit(), b.suit());
            if sa == sb {
                a.rank().cmp(&b.rank())
            } else if sa == lead {
                Ordering::Greater
            } else if sb == lead {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        }
    }
}

/// Whether the hand holds a non-joker card of `suit`.
pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.natural_suit() == Some(suit))
}

/// Lead suit of a trick given its first card. A led joker leads trump.
pub fn lead_suit(first: Card) -> Suit {
    first.suit()
}
