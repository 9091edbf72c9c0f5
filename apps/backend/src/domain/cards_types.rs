//! Core card-related types: Card, Rank, Suit, JokerName

/// The four standard suits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// Trump is fixed for the whole game.
pub const TRUMP_SUIT: Suit = Suit::Spades;

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub const fn as_str(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2..=14 (Ace high).
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        if (2..=14).contains(&value) {
            Some(Self::ALL[(value - 2) as usize])
        } else {
            None
        }
    }
}

/// The two jokers. `J1` outranks `J2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum JokerName {
    J1,
    J2,
}

impl JokerName {
    pub const fn as_str(self) -> &'static str {
        match self {
            JokerName::J1 => "J1",
            JokerName::J2 => "J2",
        }
    }
}

/// A playing card. Equality is suit+rank for standard cards and identity for jokers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Standard { suit: Suit, rank: Rank },
    Joker(JokerName),
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card::Standard { suit, rank }
    }

    pub const fn is_joker(&self) -> bool {
        matches!(self, Card::Joker(_))
    }

    /// Display suit. Jokers report the trump suit; comparisons must check
    /// `is_joker` first.
    pub const fn suit(&self) -> Suit {
        match self {
            Card::Standard { suit, .. } => *suit,
            Card::Joker(_) => TRUMP_SUIT,
        }
    }

    /// Suit of a non-joker card.
    pub const fn natural_suit(&self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(*suit),
            Card::Joker(_) => None,
        }
    }

    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Card::Standard { rank, .. } => Some(*rank),
            Card::Joker(_) => None,
        }
    }
}
