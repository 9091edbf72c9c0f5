//! Serialization and deserialization for card types
//!
//! Cards travel as `{"suit":"hearts","rank":14,"isJoker":false}`. Jokers carry
//! the trump suit plus `jokerName`, and keep the legacy ranks 16 (J1) / 15 (J2)
//! so older clients can still render them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, JokerName, Rank, Suit, TRUMP_SUIT};

const J1_WIRE_RANK: u8 = 16;
const J2_WIRE_RANK: u8 = 15;

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid suit: {s}")))
    }
}

impl Serialize for JokerName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JokerName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_uppercase().as_str() {
            "J1" => Ok(JokerName::J1),
            "J2" => Ok(JokerName::J2),
            _ => Err(serde::de::Error::custom(format!("Invalid joker: {s}"))),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardWire {
    suit: Suit,
    rank: u8,
    #[serde(default)]
    is_joker: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    joker_name: Option<JokerName>,
}

impl From<Card> for CardWire {
    fn from(card: Card) -> Self {
        match card {
            Card::Standard { suit, rank } => CardWire {
                suit,
                rank: rank.value(),
                is_joker: false,
                joker_name: None,
            },
            Card::Joker(name) => CardWire {
                suit: TRUMP_SUIT,
                rank: match name {
                    JokerName::J1 => J1_WIRE_RANK,
                    JokerName::J2 => J2_WIRE_RANK,
                },
                is_joker: true,
                joker_name: Some(name),
            },
        }
    }
}

impl TryFrom<CardWire> for Card {
    type Error = String;

    fn try_from(wire: CardWire) -> Result<Self, Self::Error> {
        if wire.is_joker {
            return match wire.joker_name {
                Some(name) => Ok(Card::Joker(name)),
                None => Err("joker card requires jokerName".to_string()),
            };
        }
        if wire.suit == TRUMP_SUIT {
            match wire.rank {
                J1_WIRE_RANK => return Ok(Card::Joker(JokerName::J1)),
                J2_WIRE_RANK => return Ok(Card::Joker(JokerName::J2)),
                _ => {}
            }
        }
        Rank::from_value(wire.rank)
            .map(|rank| Card::new(wire.suit, rank))
            .ok_or_else(|| format!("Invalid rank: {}", wire.rank))
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CardWire::from(*self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CardWire::deserialize(deserializer)?;
        Card::try_from(wire).map_err(serde::de::Error::custom)
    }
}
