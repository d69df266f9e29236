//! Input utilities for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Used by the interactive commands. The line is trimmed; `None` means EOF
/// or a read error, which callers treat as the player walking away.
pub fn read_input_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
