//! Chess rules engine for tap-driven boards.
//!
//! This crate provides:
//! - [`Board`] - 8×8 occupancy grid
//! - [`movegen`] - pseudo-legal move generation per piece type
//! - [`rules`] - legal-move filtering, check, and checkmate detection,
//!   including castling and en passant destinations
//! - [`ChessEngine`] - the select-or-move state machine a UI drives
//!
//! # Example
//!
//! ```
//! use tapchess_engine::ChessEngine;
//! use tapchess_core::{Color, Square};
//!
//! let mut engine = ChessEngine::new();
//!
//! // Tap the white king's pawn, then the square two ahead
//! engine.select_or_move(6, 4);
//! assert!(engine.is_highlighted(Square::new(4, 4).unwrap()));
//! engine.select_or_move(4, 4);
//!
//! assert_eq!(engine.turn(), Color::Black);
//! assert_eq!(engine.status_text(), "");
//! ```

mod board;
mod config;
mod engine;
pub mod movegen;
pub mod rules;
mod square_set;
mod status;

pub use board::Board;
pub use config::{EngineConfig, EnPassantRule};
pub use engine::{ChessEngine, Snapshot};
pub use movegen::pseudo_legal_moves;
pub use rules::{has_any_legal_move, is_checkmate, is_in_check, legal_moves};
pub use square_set::{SquareSet, SquareSetIter};
pub use status::Status;
