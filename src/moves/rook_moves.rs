use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_geometry::{is_straight_line, path_is_clear};

/// Rook geometry: same row or column with nothing in between.
#[inline]
pub fn rook_reaches(board: &Board, from: Square, to: Square) -> bool {
    is_straight_line(from, to) && path_is_clear(board, from, to)
}
