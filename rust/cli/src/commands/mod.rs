//! Command handler modules for the cartamaroc CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and, for the
//!   interactive commands, an input stream (`&mut dyn BufRead`)
//! - Error propagation: all errors propagated via the `CliError` enum

pub mod deal;
pub mod play;
pub mod trivia;

pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use trivia::handle_trivia_command;
