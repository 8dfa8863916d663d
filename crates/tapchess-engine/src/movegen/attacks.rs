//! Step and ray target generation for all piece types.

use crate::{Board, SquareSet};
use tapchess_core::{Color, Square};

/// Knight move offsets as `(d_row, d_col)`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King move offsets as `(d_row, d_col)`.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rook ray directions.
pub const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop ray directions.
pub const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Queen ray directions.
pub const ALL_DIRECTIONS: [(i8, i8); 8] = KING_OFFSETS;

/// Returns the squares one fixed offset away that do not hold a `color` piece.
pub fn step_targets(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&to| board.color_at(to) != Some(color))
        .collect()
}

/// Scans each direction until the edge or the first piece.
///
/// An opposing blocker is included, a friendly one is not.
pub fn ray_targets(board: &Board, from: Square, color: Color, directions: &[(i8, i8)]) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match board.color_at(to) {
                None => targets.insert(to),
                Some(other) => {
                    if other != color {
                        targets.insert(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
    targets
}

/// Returns the two forward-diagonal squares of a `color` pawn, occupied or not.
pub fn pawn_diagonals(from: Square, color: Color) -> SquareSet {
    let dir = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(|d_col| from.offset(dir, d_col))
        .collect()
}
