//! UI helper functions for terminal output formatting.

use cartamaroc_engine::cards::Card;
use std::io::Write;

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// A hand as one line of indexed cards: "[0] 5 of Oros  [1] 12 of Copas"
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i, c))
        .collect::<Vec<_>>()
        .join("  ")
}
