//! Core types for tapchess.
//!
//! This crate provides the value types shared by the engine and its
//! front ends:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for `(row, col)` board coordinates
//! - [`LastMove`] for the single move the engine remembers
//! - [`Placement`] for describing board setups as text

mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use mov::LastMove;
pub use piece::{Piece, PieceKind};
pub use placement::{Placement, PlacementError};
pub use square::Square;
