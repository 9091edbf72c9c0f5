//! Card and suit parsing from string representations (e.g., "AS", "10h", "J1")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, JokerName, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

/// Suits parse case-insensitively from their full name or initial.
impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hearts" | "h" => Ok(Suit::Hearts),
            "diamonds" | "d" => Ok(Suit::Diamonds),
            "clubs" | "c" => Ok(Suit::Clubs),
            "spades" | "s" => Ok(Suit::Spades),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Invalid suit: {s}"),
            )),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        match token.as_str() {
            "J1" => return Ok(Card::Joker(JokerName::J1)),
            "J2" => return Ok(Card::Joker(JokerName::J2)),
            _ => {}
        }
        if !(2..=3).contains(&token.len()) || !token.is_ascii() {
            return Err(parse_error(s));
        }
        let (rank_part, suit_part) = token.split_at(token.len() - 1);
        let rank = match rank_part {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(parse_error(s)),
        };
        let suit = suit_part.parse::<Suit>().map_err(|_| parse_error(s))?;
        Ok(Card::new(suit, rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Joker(name) => f.write_str(name.as_str()),
            Card::Standard { suit, rank } => {
                let r = match rank {
                    Rank::Ten => "10".to_string(),
                    Rank::Jack => "J".to_string(),
                    Rank::Queen => "Q".to_string(),
                    Rank::King => "K".to_string(),
                    Rank::Ace => "A".to_string(),
                    other => other.value().to_string(),
                };
                let s = match suit {
                    Suit::Hearts => 'H',
                    Suit::Diamonds => 'D',
                    Suit::Clubs => 'C',
                    Suit::Spades => 'S',
                };
                write!(f, "{r}{s}")
            }
        }
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "2C") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
