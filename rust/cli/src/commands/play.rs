//! # Play Command
//!
//! Interactive Hezz gameplay at the terminal.
//!
//! Each turn shows the top card, the active suit and the acting player's
//! hand, then reads one action from stdin: a card index to play, `d` to
//! draw, or `q` to quit. After a 7 the same player is prompted for the new
//! suit before the turn can end. With `--log`, a JSONL match record is
//! appended when the game finishes.

use crate::error::CliError;
use crate::io_utils::read_input_line;
use crate::ui::{self, format_hand};
use cartamaroc_engine::cards::Suit;
use cartamaroc_engine::errors::GameError;
use cartamaroc_engine::game::{CardEffect, GameSession};
use cartamaroc_engine::logger::{MatchLogger, MatchRecord, RecordedAction, TurnRecord};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Handle the play command: interactive Hezz gameplay.
///
/// # Arguments
///
/// * `players` - Player names in seating order (2 to 9, unique)
/// * `seed` - RNG seed for reproducibility (default: random)
/// * `log` - Optional JSONL file for the match record
/// * `out` - Output stream for the game display
/// * `err` - Error stream for warnings
/// * `stdin` - Input stream for player actions
pub fn handle_play_command(
    players: Vec<String>,
    seed: Option<u64>,
    log: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut game = GameSession::new(players.clone(), Some(seed))?;
    let mut logger = match &log {
        Some(path) => Some(MatchLogger::create(path)?),
        None => None,
    };
    let mut turns: Vec<TurnRecord> = Vec::new();

    writeln!(out, "play: players={} seed={}", players.join(","), seed)?;
    writeln!(out, "Center card: {}", game.top_discard())?;

    let mut abandoned = false;
    while game.winner().is_none() {
        let name = game.current_player().name().to_string();
        writeln!(out)?;
        writeln!(
            out,
            "Turn: {} | Top card: {} | Active suit: {}",
            name,
            game.top_discard(),
            game.active_suit()
        )?;
        if game.penalty_count() > 0 {
            writeln!(
                out,
                "Penalty stack: {} (play a 2 or draw)",
                game.penalty_count()
            )?;
        }
        writeln!(out, "Hand: {}", format_hand(game.current_player().hand()))?;
        writeln!(out, "Enter a card index to play, 'd' to draw, 'q' to quit:")?;

        let Some(line) = read_input_line(stdin) else {
            abandoned = true;
            break;
        };
        match line.as_str() {
            "q" | "quit" => {
                abandoned = true;
                break;
            }
            "d" => {
                let outcome = game.draw_card_action(&name)?;
                if outcome.penalty_resolved {
                    writeln!(out, "{} drew {} cards (penalty)!", name, outcome.drawn)?;
                } else {
                    writeln!(out, "{} drew a card.", name)?;
                }
                if outcome.reshuffled {
                    writeln!(out, "Deck reshuffled from the discard pile.")?;
                }
                if outcome.drawn < outcome.requested {
                    ui::display_warning(err, "deck exhausted; not all cards were delivered")?;
                }
                turns.push(TurnRecord {
                    player: name.clone(),
                    action: RecordedAction::Drew {
                        count: outcome.drawn,
                        penalty: outcome.penalty_resolved,
                    },
                });
                game.next_turn()?;
            }
            other => {
                let Ok(index) = other.parse::<usize>() else {
                    writeln!(out, "Invalid input.")?;
                    continue;
                };
                match game.play_card(&name, index) {
                    Ok(outcome) => {
                        writeln!(out, "{} played {}", name, outcome.card)?;
                        turns.push(TurnRecord {
                            player: name.clone(),
                            action: RecordedAction::Played {
                                card: outcome.card,
                                effect: outcome.effect.clone(),
                            },
                        });
                        if outcome.won {
                            writeln!(out, "\nWINNER! {} has emptied their hand!", name)?;
                            break;
                        }
                        match &outcome.effect {
                            Some(CardEffect::PenaltyRaised { total }) => {
                                writeln!(out, "Penalty stack raised to {}!", total)?;
                            }
                            Some(CardEffect::SkipNext { skipped }) => {
                                writeln!(out, "{} is skipped!", skipped)?;
                            }
                            Some(CardEffect::SuitChoiceRequired) => {
                                match prompt_suit(out, stdin)? {
                                    Some(suit) => {
                                        game.change_suit(suit)?;
                                        writeln!(out, "Suit changed to {}!", suit)?;
                                        turns.push(TurnRecord {
                                            player: name.clone(),
                                            action: RecordedAction::SuitChosen { suit },
                                        });
                                    }
                                    None => {
                                        abandoned = true;
                                        break;
                                    }
                                }
                            }
                            None => {}
                        }
                        game.next_turn()?;
                    }
                    // expected rule violations: report and let the player retry
                    Err(
                        e @ (GameError::IllegalMove
                        | GameError::PenaltyActive(_)
                        | GameError::InvalidCardIndex { .. }),
                    ) => {
                        writeln!(out, "Invalid move: {}", e)?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    if abandoned {
        writeln!(out, "Game abandoned.")?;
    }
    if let Some(logger) = &mut logger {
        let match_id = logger.next_id();
        logger.write(&MatchRecord {
            match_id,
            seed: Some(seed),
            players,
            turns,
            winner: game.winner().map(str::to_string),
            ts: None,
            meta: None,
        })?;
    }
    Ok(())
}

/// Reads suit names until one parses; `None` means the input ended.
fn prompt_suit(
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<Suit>, CliError> {
    loop {
        writeln!(out, "Choose a suit (Bastos/Copas/Espadas/Oros):")?;
        match read_input_line(stdin) {
            None => return Ok(None),
            Some(line) => match line.parse::<Suit>() {
                Ok(suit) => return Ok(Some(suit)),
                Err(e) => writeln!(out, "{}", e)?,
            },
        }
    }
}
