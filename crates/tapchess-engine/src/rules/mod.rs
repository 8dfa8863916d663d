//! Legality, check, and checkmate.
//!
//! Everything here is a pure function of a [`Board`] (plus the last move and
//! the engine configuration where en passant matters). Hypothetical moves are
//! played on a scratch copy of the board, never on the caller's board.

mod special;

use crate::movegen::pseudo_legal_moves;
use crate::{Board, EngineConfig, SquareSet};
use tapchess_core::{Color, LastMove, PieceKind, Square};

pub use special::{castling_targets, en_passant_targets};

/// Returns true if `color`'s king is attacked.
///
/// A side without a king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_attacked_by(board, king, color.opposite()),
        None => false,
    }
}

/// Returns true if any `by` piece has `target` among its pseudo-legal moves.
///
/// Pawns only reach a square diagonally when it holds an enemy piece, so for
/// empty squares use a king placed on the square instead.
pub fn is_attacked_by(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, _)| pseudo_legal_moves(board, from).contains(target))
}

/// Returns the legal destinations of the piece on `from`.
///
/// Candidates are the pseudo-legal moves plus castling and en passant
/// destinations. Each is played on a scratch board and kept only if the
/// mover's king is not left in check.
pub fn legal_moves(
    board: &Board,
    from: Square,
    last_move: Option<LastMove>,
    config: &EngineConfig,
) -> SquareSet {
    let Some(piece) = board.get(from) else {
        return SquareSet::EMPTY;
    };

    let candidates = pseudo_legal_moves(board, from)
        | castling_targets(board, from)
        | en_passant_targets(board, from, last_move, config.en_passant);

    candidates
        .into_iter()
        .filter(|&to| !is_in_check(&after_move(board, from, to), piece.color))
        .collect()
}

/// Returns true if any piece of `color` has a legal move.
pub fn has_any_legal_move(
    board: &Board,
    color: Color,
    last_move: Option<LastMove>,
    config: &EngineConfig,
) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(board, from, last_move, config).is_empty())
}

/// Returns true if `color` is in check and has no legal move.
pub fn is_checkmate(
    board: &Board,
    color: Color,
    last_move: Option<LastMove>,
    config: &EngineConfig,
) -> bool {
    is_in_check(board, color) && !has_any_legal_move(board, color, last_move, config)
}

/// Plays `from → to` on a copy of `board`.
///
/// Only occupancy changes: the piece moves and its source empties. A pawn
/// moving diagonally onto an empty square also removes the pawn it passed,
/// since leaving that pawn in place could hide a check along the row.
/// Castling rooks, promotion, and move flags are not simulated.
fn after_move(board: &Board, from: Square, to: Square) -> Board {
    let mut scratch = *board;
    let piece = scratch.take(from);
    if let Some(pawn) = piece.filter(|p| p.kind == PieceKind::Pawn) {
        // Unlike every other move, en passant also clears the passed pawn here
        if from.col() != to.col() && scratch.is_empty(to) {
            if let Some(passed) = Square::new(from.row() as usize, to.col() as usize) {
                if scratch.color_at(passed) == Some(pawn.color.opposite()) {
                    scratch.set(passed, None);
                }
            }
        }
    }
    scratch.set(to, piece);
    scratch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::from_placement_str(placement).unwrap()
    }

    fn legal(board: &Board, from: Square) -> SquareSet {
        legal_moves(board, from, None, &EngineConfig::default())
    }

    #[test]
    fn startpos_not_in_check() {
        let board = Board::startpos();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = board("8/8/8/8/8/8/8/q7");
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_checkmate(&board, Color::White, None, &EngineConfig::default()));
    }

    #[test]
    fn rook_gives_check_along_open_file() {
        let board = board("4r2k/8/8/8/8/8/8/4K3");
        assert!(is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn pawn_checks_diagonally_only() {
        // Black pawn on (6,3) attacks the king on (7,4)
        let diagonal = board("7k/8/8/8/8/8/3p4/4K3");
        assert!(is_in_check(&diagonal, Color::White));

        // Black pawn directly in front does not
        let straight = board("7k/8/8/8/8/8/4p3/4K3");
        assert!(!is_in_check(&straight, Color::White));
    }

    #[test]
    fn startpos_legal_moves_equal_pseudo_legal() {
        let board = Board::startpos();
        let total: usize = board
            .pieces_of(Color::White)
            .map(|(from, _)| legal(&board, from).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn pinned_piece_stays_on_pin_line() {
        // White rook on (6,4) pinned by the black rook on (0,4)
        let board = board("4r2k/8/8/8/8/8/4R3/4K3");
        let moves = legal(&board, sq(6, 4));
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|to| to.col() == 4));
        assert!(moves.contains(sq(0, 4)));
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        let board = board("4r2k/8/8/8/8/8/4N3/4K3");
        assert!(legal(&board, sq(6, 4)).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        // Black rook controls row 6
        let board = board("7k/8/8/8/8/8/r7/4K3");
        let moves = legal(&board, sq(7, 4));
        assert!(moves.contains(sq(7, 3)));
        assert!(moves.contains(sq(7, 5)));
        assert!(!moves.contains(sq(6, 3)));
        assert!(!moves.contains(sq(6, 4)));
        assert!(!moves.contains(sq(6, 5)));
    }

    #[test]
    fn check_must_be_answered() {
        // White is checked by the rook on (0,4); only moves that resolve it are legal
        let board = board("4r2k/8/8/8/8/8/PPP5/1N2K3");
        assert!(is_in_check(&board, Color::White));
        assert!(legal(&board, sq(6, 0)).is_empty());
        assert!(legal(&board, sq(7, 1)).is_empty());
        assert!(!legal(&board, sq(7, 4)).is_empty());
    }

    #[test]
    fn legal_moves_do_not_touch_the_board() {
        let board = board("4r2k/8/8/8/8/8/4R3/4K3");
        let before = board;
        let _ = legal(&board, sq(6, 4));
        let _ = legal(&board, sq(7, 4));
        assert_eq!(board, before);
    }

    #[test]
    fn back_rank_mate() {
        let board = board("3R2k1/5ppp/8/8/8/8/8/6K1");
        let config = EngineConfig::default();
        assert!(is_in_check(&board, Color::Black));
        assert!(!has_any_legal_move(&board, Color::Black, None, &config));
        assert!(is_checkmate(&board, Color::Black, None, &config));
        assert!(!is_checkmate(&board, Color::White, None, &config));
    }

    #[test]
    fn check_with_escape_is_not_mate() {
        let board = board("3R2k1/5pp1/8/8/8/8/8/6K1");
        let config = EngineConfig::default();
        assert!(is_in_check(&board, Color::Black));
        assert!(has_any_legal_move(&board, Color::Black, None, &config));
        assert!(!is_checkmate(&board, Color::Black, None, &config));
    }

    #[test]
    fn stalemate_is_not_checkmate() {
        let board = board("7k/5Q2/6K1/8/8/8/8/8");
        let config = EngineConfig::default();
        assert!(!is_in_check(&board, Color::Black));
        assert!(!has_any_legal_move(&board, Color::Black, None, &config));
        assert!(!is_checkmate(&board, Color::Black, None, &config));
    }

    #[test]
    fn en_passant_cannot_expose_king_along_row() {
        // White king (3,0), white pawn (3,3), black pawn just double-stepped to (3,4),
        // black rook (3,7). Capturing en passant would clear the row.
        let board = board("7k/8/8/K2Pp2r/8/8/8/8");
        let last = LastMove::new(
            sq(1, 4),
            sq(3, 4),
            tapchess_core::Piece::new(PieceKind::Pawn, Color::Black),
        );
        let moves = legal_moves(&board, sq(3, 3), Some(last), &EngineConfig::default());
        assert!(!moves.contains(sq(2, 4)));
        assert!(moves.contains(sq(2, 3)));
    }
}
