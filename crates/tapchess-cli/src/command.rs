//! Parsing of typed input lines.

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Tap the square at `(row, col)`. Off-board coordinates are passed through.
    Tap { row: usize, col: usize },
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Shown when a line does not parse.
pub const HINT: &str = "enter `ROW COL` (0-7 each), `reset`, or `quit`";

impl Command {
    /// Parses a line such as `6 4`, `6,4`, `reset`, or `quit`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "reset" | "r" => return Some(Command::Reset),
            "quit" | "exit" | "q" => return Some(Command::Quit),
            _ => {}
        }

        let mut parts = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty());
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Command::Tap { row, col })
    }
}
