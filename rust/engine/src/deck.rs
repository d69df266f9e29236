use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A shuffled, drawable deck of Spanish playing cards.
///
/// The deck owns its RNG so that a session seeded with the same value
/// produces the same sequence of shuffles, including reshuffles from the
/// discard pile mid-game.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds the full 40-card deck and shuffles it immediately.
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let mut deck = Self {
            cards: full_deck(),
            rng,
        };
        deck.shuffle();
        deck
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card, or `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Replaces the deck contents (reshuffle-from-discard) and shuffles.
    pub fn refill(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.shuffle();
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
