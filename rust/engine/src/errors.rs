use thiserror::Error;

/// Returned when a string does not name one of the four suits.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{input}' is not a suit (expected Bastos, Copas, Espadas or Oros)")]
pub struct ParseSuitError {
    pub input: String,
}

/// Errors from Hezz game session operations. Expected rule violations are
/// reported here without mutating session state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Need at least 2 players, got {0}")]
    TooFewPlayers(usize),
    #[error("Too many players: {count} (maximum {max} for a 40-card deck)")]
    TooManyPlayers { count: usize, max: usize },
    #[error("Duplicate player name: {0}")]
    DuplicateName(String),
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),
    #[error("It's not {actual}'s turn (expected {expected})")]
    NotPlayersTurn { expected: String, actual: String },
    #[error("No card at index {index} (hand has {hand_size} cards)")]
    InvalidCardIndex { index: usize, hand_size: usize },
    #[error("Card does not match the active suit or the top card's rank")]
    IllegalMove,
    #[error("A penalty of {0} is active: play a 2 or draw")]
    PenaltyActive(u32),
    #[error("A suit must be chosen for the played 7 first")]
    SuitChoicePending,
    #[error("No suit choice is pending")]
    NoSuitChoicePending,
    #[error("The game is over; {winner} has already won")]
    GameOver { winner: String },
}

/// Errors from trivia sessions, including question bank load failures.
#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("Failed to read question bank: {0}")]
    BankRead(#[from] std::io::Error),
    #[error("Failed to parse question bank: {0}")]
    BankParse(#[from] serde_json::Error),
    #[error("Question bank produced no questions")]
    NoQuestions,
    #[error("A trivia session needs at least one player")]
    NoPlayers,
    #[error("Player {0} is not in this round")]
    NotInRound(String),
    #[error("Player {0} has already answered this round")]
    AlreadyAnswered(String),
    #[error("No current question (index {index} of {total})")]
    NoQuestion { index: usize, total: usize },
    #[error("The trivia session has already finished")]
    Finished,
}

/// Errors from the per-channel session registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("A session is already running on channel {0}")]
    AlreadyActive(String),
    #[error("No session found for channel {0}")]
    NotFound(String),
}
