use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseSuitError;

/// Represents one of the four suits of the Spanish 40-card deck.
/// Used as a component of [`Card`] and as the active suit of a game session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Bastos suit (clubs)
    Bastos,
    /// Copas suit (cups)
    Copas,
    /// Espadas suit (swords)
    Espadas,
    /// Oros suit (coins)
    Oros,
}

impl Suit {
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Bastos => "Bastos",
            Suit::Copas => "Copas",
            Suit::Espadas => "Espadas",
            Suit::Oros => "Oros",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bastos" => Ok(Suit::Bastos),
            "copas" => Ok(Suit::Copas),
            "espadas" => Ok(Suit::Espadas),
            "oros" => Ok(Suit::Oros),
            _ => Err(ParseSuitError {
                input: s.to_string(),
            }),
        }
    }
}

/// Represents the rank (face value) of a Spanish-deck card.
/// The deck runs 1 through 7 and then 10 (Sota), 11 (Caballo), 12 (Rey);
/// there is no 8 or 9.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 1 (As): skips the next player when played
    As = 1,
    /// Rank 2 (Dos): raises the penalty stack when played
    Dos = 2,
    /// Rank 3
    Tres = 3,
    /// Rank 4
    Cuatro = 4,
    /// Rank 5
    Cinco = 5,
    /// Rank 6
    Seis = 6,
    /// Rank 7 (Siete): the played suit may be reassigned afterwards
    Siete = 7,
    /// Rank 10 (Sota, the knave)
    Sota = 10,
    /// Rank 11 (Caballo, the horse)
    Caballo = 11,
    /// Rank 12 (Rey, the king)
    Rey = 12,
}

impl Rank {
    /// Numeric face value as printed on the card.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Checked conversion from a face value. Returns `None` for values the
    /// Spanish deck does not contain (0, 8, 9, 13+).
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::As),
            2 => Some(Rank::Dos),
            3 => Some(Rank::Tres),
            4 => Some(Rank::Cuatro),
            5 => Some(Rank::Cinco),
            6 => Some(Rank::Seis),
            7 => Some(Rank::Siete),
            10 => Some(Rank::Sota),
            11 => Some(Rank::Caballo),
            12 => Some(Rank::Rey),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A single playing card with a suit and rank.
/// Cards are interchangeable values; two cards with the same suit and rank
/// are the same card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card
    pub rank: Rank,
}

impl Card {
    /// Two cards match iff they share a suit or a rank.
    pub fn matches(&self, other: &Card) -> bool {
        self.suit == other.suit || self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Bastos, Suit::Copas, Suit::Espadas, Suit::Oros]
}

pub fn all_ranks() -> [Rank; 10] {
    [
        Rank::As,
        Rank::Dos,
        Rank::Tres,
        Rank::Cuatro,
        Rank::Cinco,
        Rank::Seis,
        Rank::Siete,
        Rank::Sota,
        Rank::Caballo,
        Rank::Rey,
    ]
}

/// The full 40-card deck, each suit/rank combination exactly once.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(40);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
