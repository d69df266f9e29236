//! Deal command handler for inspecting a fresh deal.
//!
//! Deals a 2-player session and prints both hands and the start card
//! without playing anything. Supports optional seeding for deterministic
//! output.

use crate::error::CliError;
use crate::ui::format_hand;
use cartamaroc_engine::game::GameSession;
use std::io::Write;

/// Handle the deal command.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let game = GameSession::new(["p1", "p2"], Some(seed))?;

    for player in game.players() {
        writeln!(out, "Hand {}: {}", player.name(), format_hand(player.hand()))?;
    }
    writeln!(
        out,
        "Center: {} (active suit {})",
        game.top_discard(),
        game.active_suit()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_with_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(42), &mut out);
        assert!(result.is_ok(), "Deal command should succeed");

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Hand p1:"));
        assert!(output.contains("Hand p2:"));
        assert!(output.contains("Center:"));
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some(12345), &mut out1).unwrap();
        handle_deal_command(Some(12345), &mut out2).unwrap();
        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(Some(999), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3, "two hands plus the center card");
        assert!(lines[0].starts_with("Hand p1:"));
        assert!(lines[1].starts_with("Hand p2:"));
        assert!(lines[2].starts_with("Center:"));
    }
}
