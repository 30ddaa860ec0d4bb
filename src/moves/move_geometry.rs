//! Shared grid geometry for the per-piece movement rules.
//!
//! Squares map to bit `row * 8 + col` in the precomputed reach tables.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

#[inline]
pub const fn square_bit(square: Square) -> u64 {
    1u64 << (square.row as u32 * 8 + square.col as u32)
}

#[inline]
pub fn delta(from: Square, to: Square) -> (i8, i8) {
    (to.row as i8 - from.row as i8, to.col as i8 - from.col as i8)
}

/// True when `from` and `to` share a row or a column.
#[inline]
pub fn is_straight_line(from: Square, to: Square) -> bool {
    from != to && (from.row == to.row || from.col == to.col)
}

#[inline]
pub fn is_diagonal_line(from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    d_row != 0 && d_row.abs() == d_col.abs()
}

/// Every square strictly between `from` and `to` is empty. Only meaningful
/// for squares on a common line; returns `false` otherwise.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    if !is_straight_line(from, to) && !is_diagonal_line(from, to) {
        return false;
    }

    let (d_row, d_col) = delta(from, to);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());

    let mut current = from;
    loop {
        let Some(next) = current.offset(step_row, step_col) else {
            return false;
        };
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
}

/// Builds a reach table from a fixed list of `(d_row, d_col)` offsets.
pub(crate) const fn generate_offset_table(offsets: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut reach = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            reach |= set_if_valid(row + offsets[i].0, col + offsets[i].1);
            i += 1;
        }

        table[sq] = reach;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    let square = (row as usize) * 8 + (col as usize);
    1u64 << square
}
