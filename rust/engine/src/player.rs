use crate::cards::Card;
use std::fmt;

/// A named player with an ordered hand of cards.
///
/// Players are created once when a session starts and are never removed
/// mid-game; their hand is mutated only through the rule engine.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes and returns the card at `index`, or `None` without mutating
    /// the hand when the index is out of range.
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    /// A player wins the instant their hand is empty.
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cards)", self.name, self.hand.len())
    }
}
