use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_geometry::{is_diagonal_line, path_is_clear};

/// Bishop geometry: a diagonal with nothing in between.
#[inline]
pub fn bishop_reaches(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal_line(from, to) && path_is_clear(board, from, to)
}
