use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::Player;

/// Cards dealt to each player at the start of a session.
pub const HAND_SIZE: usize = 4;

/// Hands plus the start card must fit in the 40-card deck.
pub const MAX_PLAYERS: usize = 9;

/// Side effect of a successful play, for the presentation layer to announce.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum CardEffect {
    /// A 2 was played; the penalty stack rose to `total`.
    PenaltyRaised { total: u32 },
    /// A 1 was played; `skipped` loses their turn.
    SkipNext { skipped: String },
    /// A 7 was played; [`GameSession::change_suit`] must be called before
    /// the turn can end.
    SuitChoiceRequired,
}

/// Result of a successful [`GameSession::play_card`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayOutcome {
    /// The card that landed on the discard pile.
    pub card: Card,
    /// Special effect triggered by the card's rank, if any.
    pub effect: Option<CardEffect>,
    /// True when the play emptied the player's hand and ended the game.
    pub won: bool,
}

/// Result of a successful [`GameSession::draw_card_action`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DrawOutcome {
    /// Cards the player had to draw (1, or the penalty amount).
    pub requested: u32,
    /// Cards actually delivered; less than `requested` only when the deck
    /// was exhausted and could not be refilled from the discard pile.
    pub drawn: u32,
    /// True when the draw resolved an active penalty stack.
    pub penalty_resolved: bool,
    /// True when the deck was refilled from the discard pile along the way.
    pub reshuffled: bool,
}

/// The Hezz (Carta Maroc) rule engine: one deck, one discard pile, a fixed
/// list of players, a turn pointer, the penalty stack and the active suit.
///
/// The session never advances turns on its own except for the rank-1 skip;
/// the caller ends each turn with [`GameSession::next_turn`] after checking
/// for a winner.
///
/// # Examples
///
/// ```
/// use cartamaroc_engine::game::GameSession;
///
/// let mut game = GameSession::new(["amina", "karim"], Some(7)).unwrap();
/// assert_eq!(game.current_player().name(), "amina");
/// assert_eq!(game.current_player().hand_size(), 4);
///
/// let drew = game.draw_card_action("amina").unwrap();
/// assert_eq!(drew.drawn, 1);
/// game.next_turn().unwrap();
/// assert_eq!(game.current_player().name(), "karim");
/// ```
#[derive(Debug)]
pub struct GameSession {
    deck: Deck,
    discard_pile: Vec<Card>,
    players: Vec<Player>,
    current_player_idx: usize,
    /// +1 clockwise, -1 counter-clockwise. No card reverses it today; kept
    /// so turn arithmetic already supports it.
    direction: i8,
    penalty_stack: u32,
    active_suit: Suit,
    needs_suit_choice: bool,
    winner: Option<usize>,
}

impl GameSession {
    /// Creates a session, deals [`HAND_SIZE`] cards to each player in
    /// player-major round-robin order and seeds the discard pile with one
    /// card from the deck. Player names must be unique; the adapter is
    /// responsible for uniquifying display names beforehand.
    pub fn new<I, S>(names: I, seed: Option<u64>) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut players: Vec<Player> = Vec::new();
        for name in names {
            let name = name.into();
            if players.iter().any(|p| p.name() == name) {
                return Err(GameError::DuplicateName(name));
            }
            players.push(Player::new(name));
        }
        if players.len() < 2 {
            return Err(GameError::TooFewPlayers(players.len()));
        }
        if players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                count: players.len(),
                max: MAX_PLAYERS,
            });
        }

        let seed = seed.unwrap_or(0xCA57_A0C1);
        let mut deck = Deck::new_with_seed(seed);

        // Player count is capped above, so these draws cannot fail.
        for _ in 0..HAND_SIZE {
            for player in &mut players {
                let card = deck
                    .draw()
                    .expect("deck holds HAND_SIZE cards per player plus the start card");
                player.add_card(card);
            }
        }
        let start_card = deck
            .draw()
            .expect("deck holds HAND_SIZE cards per player plus the start card");
        let active_suit = start_card.suit;

        Ok(Self {
            deck,
            discard_pile: vec![start_card],
            players,
            current_player_idx: 0,
            direction: 1,
            penalty_stack: 0,
            active_suit,
            needs_suit_choice: false,
            winner: None,
        })
    }

    /// Builds a session from explicit state, for scenario tests. The
    /// discard pile must be non-empty; the first player is to act. Deck
    /// cards are shuffled in, so rely on their identity, not their order.
    pub fn with_state_for_test(
        players: Vec<Player>,
        deck_cards: Vec<Card>,
        discard_pile: Vec<Card>,
        active_suit: Suit,
    ) -> Self {
        assert!(
            !discard_pile.is_empty(),
            "discard pile starts with at least the seed card"
        );
        assert!(players.len() >= 2, "a session has at least 2 players");
        let mut deck = Deck::new_with_seed(0);
        deck.refill(deck_cards);
        Self {
            deck,
            discard_pile,
            players,
            current_player_idx: 0,
            direction: 1,
            penalty_stack: 0,
            active_suit,
            needs_suit_choice: false,
            winner: None,
        }
    }

    /// Whether `card` may legally be played right now. While a penalty is
    /// active only a 2 answers it; otherwise the card must match the active
    /// suit or the top card's rank. A 7 gets no bypass: it is playable only
    /// when it matches like any other card.
    pub fn can_play(&self, card: &Card) -> bool {
        if self.penalty_stack > 0 {
            return card.rank == Rank::Dos;
        }
        card.suit == self.active_suit || card.rank == self.top_discard().rank
    }

    /// Hand indices of the current player's legal plays.
    pub fn playable_indices(&self) -> Vec<usize> {
        self.current_player()
            .hand()
            .iter()
            .enumerate()
            .filter(|(_, c)| self.can_play(c))
            .map(|(i, _)| i)
            .collect()
    }

    /// Plays the card at `index` from `player_name`'s hand. Fails without
    /// mutating any state when the game is over, a suit choice is pending,
    /// it is not that player's turn, the index is out of range or the card
    /// is not legal.
    pub fn play_card(&mut self, player_name: &str, index: usize) -> Result<PlayOutcome, GameError> {
        self.ensure_playing()?;
        self.ensure_turn_of(player_name)?;

        let hand_size = self.players[self.current_player_idx].hand_size();
        let card = *self.players[self.current_player_idx]
            .hand()
            .get(index)
            .ok_or(GameError::InvalidCardIndex { index, hand_size })?;
        if !self.can_play(&card) {
            return Err(if self.penalty_stack > 0 {
                GameError::PenaltyActive(self.penalty_stack)
            } else {
                GameError::IllegalMove
            });
        }

        self.players[self.current_player_idx].remove_card(index);
        self.discard_pile.push(card);
        self.active_suit = card.suit;

        let won = self.players[self.current_player_idx].has_won();
        if won {
            // Terminal the instant the hand empties; no effect fires, and a
            // winning 7 leaves no suit choice pending.
            self.winner = Some(self.current_player_idx);
            return Ok(PlayOutcome {
                card,
                effect: None,
                won,
            });
        }

        let effect = match card.rank {
            Rank::Dos => {
                self.penalty_stack += 2;
                Some(CardEffect::PenaltyRaised {
                    total: self.penalty_stack,
                })
            }
            Rank::As => {
                // Skip once here; the caller's next_turn moves past the
                // skipped player. With 2 players the modulo wraps the turn
                // straight back to whoever played.
                self.advance();
                Some(CardEffect::SkipNext {
                    skipped: self.players[self.current_player_idx].name().to_string(),
                })
            }
            Rank::Siete => {
                self.needs_suit_choice = true;
                Some(CardEffect::SuitChoiceRequired)
            }
            _ => None,
        };

        Ok(PlayOutcome { card, effect, won })
    }

    /// Draws for `player_name`: the full penalty amount when a penalty is
    /// active (which resolves it, even if the deck runs dry), otherwise a
    /// single card. Each draw refills the deck from the discard pile first
    /// when needed.
    pub fn draw_card_action(&mut self, player_name: &str) -> Result<DrawOutcome, GameError> {
        self.ensure_playing()?;
        self.ensure_turn_of(player_name)?;

        let requested = if self.penalty_stack > 0 {
            self.penalty_stack
        } else {
            1
        };
        let penalty_resolved = self.penalty_stack > 0;
        self.penalty_stack = 0;

        let mut drawn = 0;
        let mut reshuffled = false;
        for _ in 0..requested {
            if self.deck.is_empty() {
                reshuffled |= self.reshuffle_from_discard();
            }
            match self.deck.draw() {
                Some(card) => {
                    self.players[self.current_player_idx].add_card(card);
                    drawn += 1;
                }
                // Deck empty and unreplenishable: deliver what we have.
                None => break,
            }
        }

        Ok(DrawOutcome {
            requested,
            drawn,
            penalty_resolved,
            reshuffled,
        })
    }

    /// Sets the active suit after a 7; only legal while that follow-up is
    /// pending. Suit validity itself is enforced by the type; adapters
    /// parse user input through [`Suit::from_str`](std::str::FromStr).
    pub fn change_suit(&mut self, suit: Suit) -> Result<(), GameError> {
        self.ensure_not_over()?;
        if !self.needs_suit_choice {
            return Err(GameError::NoSuitChoicePending);
        }
        self.active_suit = suit;
        self.needs_suit_choice = false;
        Ok(())
    }

    /// Advances the turn pointer by the current direction. Caller-driven:
    /// the engine only ever advances on its own for the rank-1 skip.
    pub fn next_turn(&mut self) -> Result<(), GameError> {
        self.ensure_playing()?;
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        let len = self.players.len() as isize;
        let idx = self.current_player_idx as isize + self.direction as isize;
        self.current_player_idx = idx.rem_euclid(len) as usize;
    }

    /// Keeps the top discard card and shuffles the rest back into the deck.
    /// A no-op (returns false) when the discard pile has at most one card:
    /// the deck then stays empty and draws come up short.
    pub fn reshuffle_from_discard(&mut self) -> bool {
        if self.discard_pile.len() <= 1 {
            return false;
        }
        let top = self.discard_pile.split_off(self.discard_pile.len() - 1);
        let rest = std::mem::replace(&mut self.discard_pile, top);
        self.deck.refill(rest);
        true
    }

    fn ensure_not_over(&self) -> Result<(), GameError> {
        match self.winner {
            Some(idx) => Err(GameError::GameOver {
                winner: self.players[idx].name().to_string(),
            }),
            None => Ok(()),
        }
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        self.ensure_not_over()?;
        if self.needs_suit_choice {
            return Err(GameError::SuitChoicePending);
        }
        Ok(())
    }

    fn ensure_turn_of(&self, player_name: &str) -> Result<(), GameError> {
        let expected = self.players[self.current_player_idx].name();
        if expected != player_name {
            if !self.players.iter().any(|p| p.name() == player_name) {
                return Err(GameError::UnknownPlayer(player_name.to_string()));
            }
            return Err(GameError::NotPlayersTurn {
                expected: expected.to_string(),
                actual: player_name.to_string(),
            });
        }
        Ok(())
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_idx]
    }

    /// The top card of the discard pile. The pile is seeded at construction
    /// and only ever grows or keeps its top, so it is never empty.
    pub fn top_discard(&self) -> Card {
        *self
            .discard_pile
            .last()
            .expect("discard pile is seeded at construction")
    }

    pub fn active_suit(&self) -> Suit {
        self.active_suit
    }

    pub fn penalty_count(&self) -> u32 {
        self.penalty_stack
    }

    pub fn needs_suit_choice(&self) -> bool {
        self.needs_suit_choice
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn hand_of(&self, player_name: &str) -> Option<&[Card]> {
        self.players
            .iter()
            .find(|p| p.name() == player_name)
            .map(|p| p.hand())
    }

    pub fn has_won(&self, player_name: &str) -> bool {
        self.players
            .iter()
            .any(|p| p.name() == player_name && p.has_won())
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|idx| self.players[idx].name())
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn discard_size(&self) -> usize {
        self.discard_pile.len()
    }
}
