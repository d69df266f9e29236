//! # cartamaroc-engine: Carta Maroc game core
//!
//! Rule engines for two small turn-based party games: Hezz, a Spanish-deck
//! shedding card game, and a "Who Wants to Be a Millionaire" trivia round.
//! The crate is self-contained, with no rendering and no network I/O; a
//! presentation adapter (the `cartamaroc` CLI, a chat bot, ...) drives it
//! through plain method calls.
//!
//! ## Core Modules
//!
//! - [`cards`] - The Spanish 40-card deck (Suit, Rank, Card) and matching
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`player`] - A named hand of cards with the win predicate
//! - [`game`] - The Hezz rule engine: legality, rank effects, turn rotation
//! - [`trivia`] - Question bank loading and millionaire round resolution
//! - [`session`] - Per-channel session registry
//! - [`logger`] - Match transcript logging to JSONL
//! - [`errors`] - Error types for all of the above
//!
//! ## Quick Start
//!
//! ```rust
//! use cartamaroc_engine::game::GameSession;
//!
//! let mut game = GameSession::new(["leila", "omar", "yassine"], Some(42)).unwrap();
//!
//! let player = game.current_player().name().to_string();
//! match game.playable_indices().first() {
//!     Some(&idx) => {
//!         let outcome = game.play_card(&player, idx).unwrap();
//!         println!("{} played {}", player, outcome.card);
//!     }
//!     None => {
//!         game.draw_card_action(&player).unwrap();
//!     }
//! }
//! if !game.needs_suit_choice() && game.winner().is_none() {
//!     game.next_turn().unwrap();
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All shuffles and trivia sampling run off seeded RNG, so a session created
//! with the same seed replays identically:
//!
//! ```rust
//! use cartamaroc_engine::game::GameSession;
//!
//! let a = GameSession::new(["p1", "p2"], Some(7)).unwrap();
//! let b = GameSession::new(["p1", "p2"], Some(7)).unwrap();
//! assert_eq!(a.top_discard(), b.top_discard());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod session;
pub mod trivia;
