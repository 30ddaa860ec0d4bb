//! Per-kind dispatch and the hypothetical-move helper shared by validation,
//! check detection and bot classification.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_reaches;
use crate::moves::king_moves::{castle_side, castling_rook_squares, king_steps_to};
use crate::moves::knight_moves::knight_reaches;
use crate::moves::pawn_moves::{pawn_attacks, pawn_reaches};
use crate::moves::queen_moves::queen_reaches;
use crate::moves::rook_moves::rook_reaches;

/// Non-castling move geometry for `piece` standing on `from`.
pub fn piece_reaches(
    board: &Board,
    piece: Piece,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_reaches(board, piece.color, from, to, en_passant_target),
        PieceKind::Knight => knight_reaches(from, to),
        PieceKind::Bishop => bishop_reaches(board, from, to),
        PieceKind::Rook => rook_reaches(board, from, to),
        PieceKind::Queen => queen_reaches(board, from, to),
        PieceKind::King => king_steps_to(from, to),
    }
}

/// Attack geometry: like `piece_reaches` except that pawns attack their
/// forward diagonals regardless of occupancy and never attack by pushing.
pub fn piece_attacks(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from, to),
        PieceKind::Knight => knight_reaches(from, to),
        PieceKind::Bishop => bishop_reaches(board, from, to),
        PieceKind::Rook => rook_reaches(board, from, to),
        PieceKind::Queen => queen_reaches(board, from, to),
        PieceKind::King => king_steps_to(from, to),
    }
}

/// Square of the pawn removed by an en-passant capture onto `to`, if the
/// move `from -> to` is one.
pub fn en_passant_victim(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> Option<Square> {
    let mover = board.get(from)?;
    if mover.kind != PieceKind::Pawn || en_passant_target != Some(to) || !board.is_empty(to) {
        return None;
    }
    if from.col == to.col {
        return None;
    }
    Some(Square::new(from.row, to.col))
}

/// Board after `mv`, with castling rook relocation and en-passant removal
/// applied. Flags and derived state are not touched.
pub fn board_after_move(board: &Board, mv: Move, en_passant_target: Option<Square>) -> Board {
    let mut scratch = *board;
    let Some(mover) = board.get(mv.from) else {
        return scratch;
    };

    if mover.kind == PieceKind::King {
        if let Some(side) = castle_side(mover.color, mv.from, mv.to) {
            let (rook_from, rook_to) = castling_rook_squares(mover.color, side);
            scratch.relocate(rook_from, rook_to);
        }
    }
    if let Some(victim) = en_passant_victim(board, mv.from, mv.to, en_passant_target) {
        scratch.take(victim);
    }

    scratch.relocate(mv.from, mv.to);
    if let Some(kind) = mv.promotion {
        if mover.kind == PieceKind::Pawn {
            scratch.place(mv.to, Piece::moved(kind, mover.color));
        }
    }
    scratch
}

/// Runs `predicate` against the position that `mv` would produce. The live
/// board is never modified, so nothing needs restoring on any exit path.
pub fn simulate<R>(
    board: &Board,
    mv: Move,
    en_passant_target: Option<Square>,
    predicate: impl FnOnce(&Board) -> R,
) -> R {
    let scratch = board_after_move(board, mv, en_passant_target);
    predicate(&scratch)
}
