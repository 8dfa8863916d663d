//! Pseudo-legal move generation.
//!
//! Destinations produced here follow each piece's movement pattern and
//! blocking rules but ignore whether the mover's own king ends up in check.
//! Castling and en passant destinations are not produced here; see
//! [`crate::rules`].

mod attacks;

use crate::{Board, SquareSet};
use tapchess_core::{Color, PieceKind, Square};

pub use attacks::{
    pawn_diagonals, ray_targets, step_targets, ALL_DIRECTIONS, DIAGONAL, KING_OFFSETS,
    KNIGHT_OFFSETS, ORTHOGONAL,
};

/// Returns the pseudo-legal destinations of the piece on `from`.
///
/// Returns an empty set if `from` is empty.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> SquareSet {
    let Some(piece) = board.get(from) else {
        return SquareSet::EMPTY;
    };
    let color = piece.color;

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, color),
        PieceKind::Knight => step_targets(board, from, color, &KNIGHT_OFFSETS),
        PieceKind::King => step_targets(board, from, color, &KING_OFFSETS),
        PieceKind::Bishop => ray_targets(board, from, color, &DIAGONAL),
        PieceKind::Rook => ray_targets(board, from, color, &ORTHOGONAL),
        PieceKind::Queen => ray_targets(board, from, color, &ALL_DIRECTIONS),
    }
}

/// Generates pawn pushes and diagonal captures.
fn pawn_moves(board: &Board, from: Square, color: Color) -> SquareSet {
    let dir = color.pawn_direction();
    let mut moves = SquareSet::EMPTY;

    // Single push, then double push from the start row through an empty square
    if let Some(one) = from.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
        moves.insert(one);
        if from.row() == color.pawn_start_row() {
            if let Some(two) = one.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
                moves.insert(two);
            }
        }
    }

    // Captures
    for to in pawn_diagonals(from, color) {
        if board.color_at(to) == Some(color.opposite()) {
            moves.insert(to);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapchess_core::Piece;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::from_placement_str(placement).unwrap()
    }

    #[test]
    fn empty_square_has_no_moves() {
        let board = Board::startpos();
        assert!(pseudo_legal_moves(&board, sq(4, 4)).is_empty());
    }

    #[test]
    fn startpos_pawn_single_and_double_push() {
        let board = Board::startpos();
        let moves = pseudo_legal_moves(&board, sq(6, 4));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(sq(5, 4)));
        assert!(moves.contains(sq(4, 4)));

        let moves = pseudo_legal_moves(&board, sq(1, 3));
        assert!(moves.contains(sq(2, 3)));
        assert!(moves.contains(sq(3, 3)));
    }

    #[test]
    fn startpos_knights_and_blocked_pieces() {
        let board = Board::startpos();
        let moves = pseudo_legal_moves(&board, sq(7, 6));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(sq(5, 5)));
        assert!(moves.contains(sq(5, 7)));

        for col in [0, 2, 3, 4, 5, 7] {
            assert!(pseudo_legal_moves(&board, sq(7, col)).is_empty());
        }
    }

    #[test]
    fn startpos_has_twenty_moves_per_side() {
        let board = Board::startpos();
        for color in Color::ALL {
            let total: usize = board
                .pieces_of(color)
                .map(|(from, _)| pseudo_legal_moves(&board, from).len())
                .sum();
            assert_eq!(total, 20);
        }
    }

    #[test]
    fn pawn_double_push_blocked_by_either_square() {
        // Piece directly in front
        let blocked = board("4k3/8/8/8/8/4n3/4P3/4K3");
        assert!(pseudo_legal_moves(&blocked, sq(6, 4)).is_empty());

        // Piece two squares ahead only
        let half = board("4k3/8/8/8/4n3/8/4P3/4K3");
        let moves = pseudo_legal_moves(&half, sq(6, 4));
        assert_eq!(moves, SquareSet::from_square(sq(5, 4)));
    }

    #[test]
    fn pawn_no_double_push_off_start_row() {
        let board = board("4k3/8/8/8/8/4P3/8/4K3");
        let moves = pseudo_legal_moves(&board, sq(5, 4));
        assert_eq!(moves, SquareSet::from_square(sq(4, 4)));
    }

    #[test]
    fn pawn_captures_only_opponents() {
        let board = board("4k3/8/8/8/8/3p1N2/4P3/4K3");
        let moves = pseudo_legal_moves(&board, sq(6, 4));
        assert!(moves.contains(sq(5, 3)));
        assert!(!moves.contains(sq(5, 5)));
    }

    #[test]
    fn pawn_does_not_move_diagonally_onto_empty_squares() {
        // Black pawn beside the white pawn; en passant is not pseudo-legal here
        let board = board("4k3/8/8/3pP3/8/8/8/4K3");
        let moves = pseudo_legal_moves(&board, sq(3, 4));
        assert_eq!(moves, SquareSet::from_square(sq(2, 4)));
    }

    #[test]
    fn king_has_no_castling_targets() {
        let board = board("r3k2r/8/8/8/8/8/8/R3K2R");
        let moves = pseudo_legal_moves(&board, sq(7, 4));
        assert!(!moves.contains(sq(7, 6)));
        assert!(!moves.contains(sq(7, 2)));
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let mut board = Board::empty();
        board.set(sq(3, 3), Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(pseudo_legal_moves(&board, sq(3, 3)).len(), 27);

        board.set(sq(3, 3), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(pseudo_legal_moves(&board, sq(3, 3)).len(), 14);

        board.set(sq(3, 3), Some(Piece::new(PieceKind::Bishop, Color::White)));
        assert_eq!(pseudo_legal_moves(&board, sq(3, 3)).len(), 13);
    }
}
