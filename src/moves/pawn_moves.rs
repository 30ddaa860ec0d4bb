//! Pawn pushes, diagonal captures and attack squares.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_geometry::delta;

/// Diagonal forward step: the squares a pawn attacks, whatever stands there.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    d_row == color.forward() && d_col.abs() == 1
}

/// Pawn move geometry including captures and en passant.
pub fn pawn_reaches(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> bool {
    let (d_row, d_col) = delta(from, to);
    let forward = color.forward();

    if d_col == 0 {
        if d_row == forward {
            return board.is_empty(to);
        }
        if d_row == 2 * forward && from.row == color.pawn_start_row() {
            let Some(skipped) = from.offset(forward, 0) else {
                return false;
            };
            return board.is_empty(skipped) && board.is_empty(to);
        }
        return false;
    }

    if !pawn_attacks(color, from, to) {
        return false;
    }
    match board.get(to) {
        Some(target) => target.color != color,
        None => en_passant_target == Some(to),
    }
}
