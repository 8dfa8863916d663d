//! Record of the most recently completed move.

use crate::{Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// The last move played.
///
/// `piece` is the mover as it stood on `from`, before the move marked it as
/// moved or promoted it. Only one of these is kept; it exists so the next
/// move can decide en passant eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

impl LastMove {
    /// Creates a move record.
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece) -> Self {
        LastMove { from, to, piece }
    }

    /// Signed row distance travelled.
    #[inline]
    pub const fn row_delta(self) -> i8 {
        self.to.row() as i8 - self.from.row() as i8
    }

    /// Signed column distance travelled.
    #[inline]
    pub const fn col_delta(self) -> i8 {
        self.to.col() as i8 - self.from.col() as i8
    }

    /// Returns true if this was a pawn advancing two squares.
    #[inline]
    pub fn is_pawn_double_step(self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.row_delta().abs() == 2 && self.col_delta() == 0
    }
}
