//! Piece placement text for describing board setups.
//!
//! The format is the piece-placement field of FEN: eight `/`-separated rows,
//! letters for pieces (`PNBRQK` for White, `pnbrqk` for Black) and digits for
//! runs of empty squares. Rows are listed from row 0 (Black's back rank) down
//! to row 7, which is the same order FEN uses.
//!
//! The format carries no move flags, so `has_moved` is inferred: pawns off
//! their start row, and kings or rooks off their home squares, are marked as
//! moved. Everything else starts unmoved.

use crate::{Color, Piece, PieceKind, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing placement text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: usize },

    #[error("row {row} has {squares} squares, expected 8")]
    InvalidRowLength { row: usize, squares: usize },
}

/// A parsed piece placement, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    squares: [[Option<Piece>; 8]; 8],
}

impl Placement {
    /// The standard starting position.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// A placement with no pieces.
    pub const fn empty() -> Self {
        Placement {
            squares: [[None; 8]; 8],
        }
    }

    /// Wraps an existing `[row][col]` grid as-is, without touching move flags.
    pub const fn from_grid(squares: [[Option<Piece>; 8]; 8]) -> Self {
        Placement { squares }
    }

    /// Returns the `[row][col]` grid.
    #[inline]
    pub const fn grid(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Parses placement text.
    pub fn parse(text: &str) -> Result<Self, PlacementError> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::InvalidRowCount(rows.len()));
        }

        let mut placement = Placement::empty();
        for (row, row_text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in row_text.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += run as usize;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if col < 8 {
                        placement.squares[row][col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter { ch, row });
                }
            }
            if col != 8 {
                return Err(PlacementError::InvalidRowLength { row, squares: col });
            }
        }

        placement.infer_moved_flags();
        Ok(placement)
    }

    /// Returns the piece on a square.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    fn infer_moved_flags(&mut self) {
        for sq in Square::all() {
            let (row, col) = (sq.row() as usize, sq.col() as usize);
            if let Some(piece) = self.squares[row][col] {
                if !is_home_square(piece, sq) {
                    self.squares[row][col] = Some(piece.moved());
                }
            }
        }
    }
}

/// Returns true if `piece` could still be standing where it started.
fn is_home_square(piece: Piece, sq: Square) -> bool {
    let back_rank = piece.color.back_rank();
    match piece.kind {
        PieceKind::Pawn => sq.row() == piece.color.pawn_start_row(),
        PieceKind::King => sq.row() == back_rank && sq.col() == 4,
        PieceKind::Rook => sq.row() == back_rank && (sq.col() == 0 || sq.col() == 7),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.iter().enumerate() {
            let mut empty_count = 0;
            for square in squares {
                match square {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{}", empty_count)?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.to_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{}", empty_count)?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
