//! # Cartamaroc CLI Library
//!
//! Command-line interface for the Carta Maroc game engine: interactive
//! Hezz card games and millionaire trivia sessions at the terminal.
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play Hezz with 2 to 9 named players
//! - `trivia`: Run a millionaire trivia session from a question bank
//! - `deal`: Deal a single session for inspection
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["cartamaroc", "deal", "--seed", "42"];
//! let code = cartamaroc_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::io::Write;

pub mod cli;
pub mod commands;
mod error;
pub mod io_utils;
pub mod ui;

use clap::Parser;
use cli::{CartamarocCli, Commands};
use commands::{handle_deal_command, handle_play_command, handle_trivia_command};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "trivia", "deal"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = CartamarocCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Cartamaroc CLI").is_err()
                        || writeln!(err, "Usage: cartamaroc <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return 2;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return 2;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: cartamaroc --help").is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Play { players, seed, log } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_play_command(players, seed, log, out, err, &mut stdin_lock) {
                    Ok(()) => 0,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return 2;
                        }
                        2
                    }
                }
            }
            Commands::Trivia {
                questions,
                players,
                seed,
            } => {
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_trivia_command(questions, players, seed, out, &mut stdin_lock) {
                    Ok(()) => 0,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return 2;
                        }
                        2
                    }
                }
            }
            Commands::Deal { seed } => match handle_deal_command(seed, out) {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            },
        },
    }
}
