//! King step geometry and castling shapes.

use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_geometry::{generate_offset_table, square_bit};

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KING_TARGETS: [u64; 64] = generate_offset_table(&KING_OFFSETS);

#[inline]
pub const fn king_targets(square: Square) -> u64 {
    KING_TARGETS[(square.row as usize) * 8 + square.col as usize]
}

#[inline]
pub fn king_steps_to(from: Square, to: Square) -> bool {
    from.in_bounds() && to.in_bounds() && king_targets(from) & square_bit(to) != 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_COL,
            CastleSide::Queenside => QUEENSIDE_ROOK_COL,
        }
    }

    /// Column the rook lands on, the square the king jumps over.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => KING_START_COL + 1,
            CastleSide::Queenside => KING_START_COL - 1,
        }
    }
}

/// Castling is encoded as a two-column horizontal king move along the
/// mover's back rank from the king's home column.
pub fn castle_side(color: Color, from: Square, to: Square) -> Option<CastleSide> {
    let rank = color.back_rank();
    if from != Square::new(rank, KING_START_COL) || to.row != rank {
        return None;
    }
    match to.col {
        c if c == KING_START_COL + 2 => Some(CastleSide::Kingside),
        c if c + 2 == KING_START_COL => Some(CastleSide::Queenside),
        _ => None,
    }
}

/// Rook relocation for a castling king move, `(rook_from, rook_to)`.
pub fn castling_rook_squares(color: Color, side: CastleSide) -> (Square, Square) {
    let rank = color.back_rank();
    (
        Square::new(rank, side.rook_col()),
        Square::new(rank, side.rook_target_col()),
    )
}
