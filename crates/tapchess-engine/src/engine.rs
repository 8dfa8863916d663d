//! Interactive game state driven by board taps.
//!
//! The [`ChessEngine`] owns the board, the side to move, the current
//! selection and its highlighted destinations, the last move, and the status
//! line. A front end renders the queries and forwards taps to
//! [`ChessEngine::select_or_move`], which is the only way play advances.
//!
//! Taps never fail. Anything that is not a selection or a highlighted
//! destination clears the selection and nothing else.

use crate::rules;
use crate::{Board, EngineConfig, SquareSet, Status};
use serde::Serialize;
use tapchess_core::{Color, LastMove, Piece, PieceKind, Square};
use tracing::{debug, info, trace};

/// A tap-driven two-player chess game.
#[derive(Debug, Clone)]
pub struct ChessEngine {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    highlighted: SquareSet,
    last_move: Option<LastMove>,
    status: Status,
    config: EngineConfig,
}

/// Everything a renderer needs, detached from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Occupancy indexed `[row][col]`.
    pub board: [[Option<Piece>; 8]; 8],
    pub turn: Color,
    pub selected: Option<Square>,
    pub highlighted: Vec<Square>,
    pub last_move: Option<LastMove>,
    pub status: Status,
    pub status_text: String,
}

impl Default for ChessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessEngine {
    /// Creates a game in the standard starting position.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a game in the standard starting position with custom rules.
    pub fn with_config(config: EngineConfig) -> Self {
        let mut engine = ChessEngine {
            board: Board::empty(),
            turn: Color::White,
            selected: None,
            highlighted: SquareSet::EMPTY,
            last_move: None,
            status: Status::None,
            config,
        };
        engine.reset();
        engine
    }

    /// Creates a game from a constructed position with `turn` to move.
    ///
    /// There is no last move, so en passant is only available under
    /// [`EnPassantRule::Geometric`](crate::EnPassantRule::Geometric) until a
    /// pawn double-steps. The status is computed immediately.
    pub fn from_board(board: Board, turn: Color, config: EngineConfig) -> Self {
        let mut engine = ChessEngine {
            board,
            turn,
            selected: None,
            highlighted: SquareSet::EMPTY,
            last_move: None,
            status: Status::None,
            config,
        };
        engine.status = engine.compute_status(turn.opposite());
        engine
    }

    /// Restores the starting position with White to move.
    ///
    /// Clears the selection, highlights, status, and last move.
    pub fn reset(&mut self) {
        self.board = Board::startpos();
        self.turn = Color::White;
        self.selected = None;
        self.highlighted.clear();
        self.last_move = None;
        self.status = Status::None;
        debug!("board reset");
    }

    /// Handles a tap on `(row, col)`.
    ///
    /// - A highlighted square moves the selected piece there and passes the turn.
    /// - A square holding a piece of the side to move selects it and highlights
    ///   its legal destinations, unless it is already selected, in which case
    ///   the tap deselects.
    /// - Anything else, including coordinates off the board, deselects.
    pub fn select_or_move(&mut self, row: usize, col: usize) {
        match Square::new(row, col) {
            Some(sq) => self.select_or_move_square(sq),
            None => {
                trace!(row, col, "tap off the board");
                self.deselect();
            }
        }
    }

    /// Handles a tap on an already validated square.
    pub fn select_or_move_square(&mut self, sq: Square) {
        if let Some(from) = self.selected.filter(|_| self.highlighted.contains(sq)) {
            self.execute(from, sq);
            self.deselect();
        } else if self.selected != Some(sq) && self.board.color_at(sq) == Some(self.turn) {
            self.selected = Some(sq);
            self.highlighted = self.legal_moves(sq);
            debug!(square = %sq, moves = self.highlighted.len(), "selected");
        } else {
            trace!(square = %sq, "deselect");
            self.deselect();
        }
    }

    fn deselect(&mut self) {
        self.selected = None;
        self.highlighted.clear();
    }

    /// Plays a highlighted move, applying any special-move side effects.
    fn execute(&mut self, from: Square, to: Square) {
        let Some(piece) = self.board.get(from) else {
            return;
        };
        let d_col = to.col() as i8 - from.col() as i8;

        // En passant: a diagonal pawn move onto an empty square takes the pawn beside it
        if piece.kind == PieceKind::Pawn && d_col != 0 && self.board.is_empty(to) {
            if let Some(passed) = Square::new(from.row() as usize, to.col() as usize) {
                let captured = self.board.take(passed);
                debug!(square = %passed, ?captured, "en passant capture");
            }
        }

        // Castling: the rook jumps to the square the king crossed
        if piece.kind == PieceKind::King && d_col.abs() == 2 {
            let row = from.row() as usize;
            let (rook_from, rook_to) = if d_col > 0 { (7, 5) } else { (0, 3) };
            if let (Some(rook_from), Some(rook_to)) =
                (Square::new(row, rook_from), Square::new(row, rook_to))
            {
                let rook = self.board.take(rook_from).map(Piece::moved);
                self.board.set(rook_to, rook);
                debug!(from = %rook_from, to = %rook_to, "castling rook");
            }
        }

        self.board.take(from);
        let mut moved = piece.moved();
        self.last_move = Some(LastMove::new(from, to, piece));

        if moved.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            moved = moved.promoted(PieceKind::Queen);
            debug!(square = %to, "promotion to queen");
        }
        self.board.set(to, Some(moved));
        debug!(%from, %to, piece = %piece, "move");

        let mover = self.turn;
        self.turn = mover.opposite();
        self.status = self.compute_status(mover);
        match self.status {
            Status::None => {}
            status => info!(%status, "status changed"),
        }
    }

    /// Status for the side to move, given that `mover` played last.
    fn compute_status(&self, mover: Color) -> Status {
        if !self.is_in_check(self.turn) {
            Status::None
        } else if rules::has_any_legal_move(&self.board, self.turn, self.last_move, &self.config) {
            Status::Check { player: self.turn }
        } else {
            Status::Checkmate { winner: mover }
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece on a square.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the legal destinations of the selected piece.
    pub fn highlighted(&self) -> SquareSet {
        self.highlighted
    }

    /// Returns true if `sq` is a highlighted destination.
    pub fn is_highlighted(&self, sq: Square) -> bool {
        self.highlighted.contains(sq)
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the status line: empty, a check notice, or the checkmate result.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Returns the rule configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the legal destinations of the piece on `sq`.
    pub fn legal_moves(&self, sq: Square) -> SquareSet {
        rules::legal_moves(&self.board, sq, self.last_move, &self.config)
    }

    /// Returns true if `color`'s king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        rules::is_in_check(&self.board, color)
    }

    /// Returns true if `color` is checkmated.
    pub fn is_checkmate(&self, color: Color) -> bool {
        rules::is_checkmate(&self.board, color, self.last_move, &self.config)
    }

    /// Captures the current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.board.rows(),
            turn: self.turn,
            selected: self.selected,
            highlighted: self.highlighted.iter().collect(),
            last_move: self.last_move,
            status: self.status,
            status_text: self.status_text(),
        }
    }
}
