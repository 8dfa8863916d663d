//! Informational game status shown under the board.

use serde::Serialize;
use std::fmt;
use tapchess_core::Color;

/// Check/checkmate status for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Status {
    /// Nothing to report.
    #[default]
    None,
    /// `player` is to move and in check.
    Check { player: Color },
    /// The side to move is mated; `winner` made the last move.
    Checkmate { winner: Color },
}

impl Status {
    /// Returns true for [`Status::Check`].
    pub const fn is_check(self) -> bool {
        matches!(self, Status::Check { .. })
    }

    /// Returns true for [`Status::Checkmate`].
    pub const fn is_checkmate(self) -> bool {
        matches!(self, Status::Checkmate { .. })
    }

    /// Returns the winner if the game ended in checkmate.
    pub const fn winner(self) -> Option<Color> {
        match self {
            Status::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::None => Ok(()),
            Status::Check { player } => write!(f, "{} is in check", player),
            Status::Checkmate { winner } => write!(f, "Checkmate, {} wins", winner),
        }
    }
}
