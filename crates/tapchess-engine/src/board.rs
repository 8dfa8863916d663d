//! Board occupancy.

use std::fmt;
use tapchess_core::{Color, Piece, PieceKind, Placement, PlacementError, Square};

/// An 8×8 grid of optional pieces, indexed `[row][col]`.
///
/// Every square holds at most one piece by construction. The board is
/// `Copy`, so a scratch copy for legality checks is a full copy of occupancy
/// and can never alias the live board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back_rank = color.back_rank() as usize;
            let pawn_row = color.pawn_start_row() as usize;
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                board.squares[back_rank][col] = Some(Piece::new(kind, color));
                board.squares[pawn_row][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Creates a board from a parsed placement.
    pub fn from_placement(placement: &Placement) -> Self {
        Board {
            squares: *placement.grid(),
        }
    }

    /// Parses placement text into a board.
    pub fn from_placement_str(text: &str) -> Result<Self, PlacementError> {
        Ok(Self::from_placement(&Placement::parse(text)?))
    }

    /// Converts the board to a placement.
    pub fn to_placement(&self) -> Placement {
        Placement::from_grid(self.squares)
    }

    /// Returns the piece on a square.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Replaces the contents of a square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Removes and returns the piece on a square.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize].take()
    }

    /// Returns true if the square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Returns the color of the piece on a square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|piece| piece.color)
    }

    /// Returns the square of `color`'s king, or `None` if it has none.
    ///
    /// With more than one king on the board the first in row-major order wins.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(sq, _)| sq)
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the squares and pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Returns the number of pieces on the board.
    pub fn count(&self) -> usize {
        self.pieces().count()
    }

    /// Returns the `[row][col]` grid.
    #[inline]
    pub const fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_placement())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self)
    }
}
