//! Castling and en passant destinations.
//!
//! Pseudo-legal generation never produces these, so the legal-move set adds
//! them here. Both are still subject to the ordinary self-check filter.

use super::is_in_check;
use crate::{Board, EnPassantRule, SquareSet};
use tapchess_core::{LastMove, PieceKind, Square};

/// Rook column, king destination column, and the columns that must be empty.
const KINGSIDE: (u8, u8, &[u8]) = (7, 6, &[5, 6]);
const QUEENSIDE: (u8, u8, &[u8]) = (0, 2, &[1, 2, 3]);

/// Returns the castling destinations of the king on `from`.
///
/// Castling is offered when the king stands unmoved on column 4 of its back
/// rank, an unmoved rook of the same color stands in the corner, every square
/// between them is empty, the king is not in check, and the square the king
/// crosses is not attacked. The landing square is left to the caller's
/// self-check filter.
pub fn castling_targets(board: &Board, from: Square) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let Some(king) = board.get(from) else {
        return targets;
    };
    if king.kind != PieceKind::King
        || king.has_moved
        || from.row() != king.color.back_rank()
        || from.col() != 4
        || is_in_check(board, king.color)
    {
        return targets;
    }

    let row = from.row() as usize;
    for (rook_col, king_to, between) in [KINGSIDE, QUEENSIDE] {
        let rook_ready = Square::new(row, rook_col as usize)
            .and_then(|sq| board.get(sq))
            .is_some_and(|rook| rook.is(PieceKind::Rook, king.color) && !rook.has_moved);
        let path_clear = between
            .iter()
            .filter_map(|&col| Square::new(row, col as usize))
            .all(|sq| board.is_empty(sq));
        if !rook_ready || !path_clear {
            continue;
        }

        let (Some(crossed), Some(to)) = (
            Square::new(row, (4 + king_to as usize) / 2),
            Square::new(row, king_to as usize),
        ) else {
            continue;
        };

        let mut scratch = *board;
        let moved = scratch.take(from);
        scratch.set(crossed, moved);
        if !is_in_check(&scratch, king.color) {
            targets.insert(to);
        }
    }
    targets
}

/// Returns the en passant destinations of the pawn on `from`.
pub fn en_passant_targets(
    board: &Board,
    from: Square,
    last_move: Option<LastMove>,
    rule: EnPassantRule,
) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let Some(pawn) = board.get(from).filter(|p| p.kind == PieceKind::Pawn) else {
        return targets;
    };
    let enemy = pawn.color.opposite();

    for d_col in [-1, 1] {
        let (Some(beside), Some(to)) = (
            from.offset(0, d_col),
            from.offset(pawn.color.pawn_direction(), d_col),
        ) else {
            continue;
        };
        let enemy_pawn_beside = board
            .get(beside)
            .is_some_and(|p| p.is(PieceKind::Pawn, enemy));
        if !enemy_pawn_beside || !board.is_empty(to) {
            continue;
        }

        let eligible = match rule {
            EnPassantRule::Standard => last_move.is_some_and(|m| {
                m.is_pawn_double_step() && m.piece.color == enemy && m.to == beside
            }),
            EnPassantRule::Geometric => true,
        };
        if eligible {
            targets.insert(to);
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapchess_core::{Color, Piece};

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::from_placement_str(placement).unwrap()
    }

    fn black_double_step(col: usize) -> LastMove {
        LastMove::new(
            sq(1, col),
            sq(3, col),
            Piece::new(PieceKind::Pawn, Color::Black),
        )
    }

    #[test]
    fn both_sides_available_with_clear_paths() {
        let board = board("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R");
        let white = castling_targets(&board, sq(7, 4));
        assert!(white.contains(sq(7, 6)));
        assert!(white.contains(sq(7, 2)));
        assert_eq!(white.len(), 2);

        let black = castling_targets(&board, sq(0, 4));
        assert!(black.contains(sq(0, 6)));
        assert!(black.contains(sq(0, 2)));
    }

    #[test]
    fn not_from_startpos() {
        let board = Board::startpos();
        assert!(castling_targets(&board, sq(7, 4)).is_empty());
    }

    #[test]
    fn blocked_path() {
        // Knight on (7,1) blocks queenside only
        let board = board("4k3/8/8/8/8/8/8/RN2K2R");
        let targets = castling_targets(&board, sq(7, 4));
        assert_eq!(targets, SquareSet::from_square(sq(7, 6)));
    }

    #[test]
    fn moved_king_or_rook() {
        let mut board = board("4k3/8/8/8/8/8/8/R3K2R");
        let rook = board.get(sq(7, 7)).unwrap();
        board.set(sq(7, 7), Some(rook.moved()));
        assert_eq!(
            castling_targets(&board, sq(7, 4)),
            SquareSet::from_square(sq(7, 2))
        );

        let king = board.get(sq(7, 4)).unwrap();
        board.set(sq(7, 4), Some(king.moved()));
        assert!(castling_targets(&board, sq(7, 4)).is_empty());
    }

    #[test]
    fn corner_piece_must_be_a_rook() {
        let board = board("4k3/8/8/8/8/8/8/B3K2N");
        assert!(castling_targets(&board, sq(7, 4)).is_empty());
    }

    #[test]
    fn not_out_of_check() {
        let board = board("4r2k/8/8/8/8/8/8/R3K2R");
        assert!(castling_targets(&board, sq(7, 4)).is_empty());
    }

    #[test]
    fn not_through_attacked_square() {
        // Black rook on (0,5) covers (7,5), the square the king crosses kingside
        let board = board("5r1k/8/8/8/8/8/8/R3K2R");
        let targets = castling_targets(&board, sq(7, 4));
        assert!(!targets.contains(sq(7, 6)));
        assert!(targets.contains(sq(7, 2)));
    }

    #[test]
    fn queenside_b_file_may_be_attacked() {
        // Only (7,3) is crossed queenside; an attack on (7,1) does not matter
        let board = board("1r5k/8/8/8/8/8/8/R3K3");
        assert_eq!(
            castling_targets(&board, sq(7, 4)),
            SquareSet::from_square(sq(7, 2))
        );
    }

    #[test]
    fn non_king_has_no_castling() {
        let board = board("4k3/8/8/8/8/8/8/R3K2R");
        assert!(castling_targets(&board, sq(7, 7)).is_empty());
        assert!(castling_targets(&board, sq(4, 4)).is_empty());
    }

    #[test]
    fn en_passant_after_double_step() {
        let board = board("4k3/8/8/3pP3/8/8/8/4K3");
        let targets = en_passant_targets(
            &board,
            sq(3, 4),
            Some(black_double_step(3)),
            EnPassantRule::Standard,
        );
        assert_eq!(targets, SquareSet::from_square(sq(2, 3)));
    }

    #[test]
    fn standard_requires_the_last_move() {
        let board = board("4k3/8/8/3pP3/8/8/8/4K3");
        assert!(en_passant_targets(&board, sq(3, 4), None, EnPassantRule::Standard).is_empty());

        // Double step happened on a different column
        let stale = en_passant_targets(
            &board,
            sq(3, 4),
            Some(black_double_step(0)),
            EnPassantRule::Standard,
        );
        assert!(stale.is_empty());
    }

    #[test]
    fn geometric_ignores_history() {
        let board = board("4k3/8/8/3pPp2/8/8/8/4K3");
        let targets = en_passant_targets(&board, sq(3, 4), None, EnPassantRule::Geometric);
        assert!(targets.contains(sq(2, 3)));
        assert!(targets.contains(sq(2, 5)));
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn en_passant_needs_an_empty_landing_square() {
        let board = board("4k3/8/3n4/3pP3/8/8/8/4K3");
        let targets = en_passant_targets(&board, sq(3, 4), None, EnPassantRule::Geometric);
        assert!(targets.is_empty());
    }

    #[test]
    fn black_captures_en_passant_downward() {
        let board = board("4k3/8/8/8/3Pp3/8/8/4K3");
        let last = LastMove::new(
            sq(6, 3),
            sq(4, 3),
            Piece::new(PieceKind::Pawn, Color::White),
        );
        let targets =
            en_passant_targets(&board, sq(4, 4), Some(last), EnPassantRule::Standard);
        assert_eq!(targets, SquareSet::from_square(sq(5, 3)));
    }
}
