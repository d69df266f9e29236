//! Command-line argument definitions for the `cartamaroc` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cartamaroc",
    version,
    about = "Carta Maroc party games in the terminal"
)]
pub struct CartamarocCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a game of Hezz at the terminal
    Play {
        /// Comma-separated player names (2 to 9, unique)
        #[arg(long, value_delimiter = ',', required = true)]
        players: Vec<String>,
        /// RNG seed for a reproducible deal (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Write a JSONL match record to this file when the game ends
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Run a millionaire trivia session from a question bank
    Trivia {
        /// Path to the Questions.json bank
        #[arg(long)]
        questions: PathBuf,
        /// Comma-separated player names
        #[arg(long, value_delimiter = ',', required = true)]
        players: Vec<String>,
        /// RNG seed for reproducible question sampling (default: random)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal a fresh 2-player session and show the hands
    Deal {
        /// RNG seed for deterministic dealing (default: random)
        #[arg(long)]
        seed: Option<u64>,
    },
}
