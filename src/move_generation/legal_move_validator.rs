//! Move legality: geometry, captures, castling eligibility and king safety.
//!
//! Every candidate, castling and en passant included, is played out on a
//! scratch board and rejected if it leaves the mover's king attacked. That
//! single rule is what keeps pinned pieces on their pin line.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_attacked_on, is_square_attacked_on};
use crate::move_generation::legal_move_shared::{piece_reaches, simulate};
use crate::moves::king_moves::{castle_side, CastleSide};

/// Legality of `from -> to` for the side to move. `false` for an empty or
/// enemy origin square and for off-board coordinates.
pub fn is_legal_move(game_state: &GameState, from: Square, to: Square) -> bool {
    match game_state.board.get(from) {
        Some(piece) if piece.color == game_state.side_to_move => {
            is_legal_move_for_piece(game_state, from, to)
        }
        _ => false,
    }
}

/// Legality of `from -> to` for whichever color stands on `from`. Used when
/// asking about the side not on move, e.g. terminal checks for both colors.
pub fn is_legal_move_for_piece(game_state: &GameState, from: Square, to: Square) -> bool {
    if !from.in_bounds() || !to.in_bounds() || from == to {
        return false;
    }
    let board = &game_state.board;
    let Some(piece) = board.get(from) else {
        return false;
    };
    // A king is never a capture target.
    if board
        .get(to)
        .is_some_and(|target| target.color == piece.color || target.kind == PieceKind::King)
    {
        return false;
    }

    let en_passant_target = en_passant_target_for(game_state, piece.color);

    let geometry_ok = if piece.kind == PieceKind::King && castle_side(piece.color, from, to).is_some()
    {
        can_castle(game_state, from, to)
    } else {
        piece_reaches(board, piece, from, to, en_passant_target)
    };
    if !geometry_ok {
        return false;
    }

    simulate(board, Move::new(from, to), en_passant_target, |after| {
        !is_king_attacked_on(after, piece.color)
    })
}

/// Castling eligibility for the king on `from` moving two columns to `to`.
pub fn can_castle(game_state: &GameState, from: Square, to: Square) -> bool {
    let board = &game_state.board;
    let Some(king) = board.get(from) else {
        return false;
    };
    if king.kind != PieceKind::King || king.has_moved {
        return false;
    }
    let Some(side) = castle_side(king.color, from, to) else {
        return false;
    };

    let rights = game_state.castling_rights.get(king.color);
    let right_held = match side {
        CastleSide::Kingside => rights.kingside,
        CastleSide::Queenside => rights.queenside,
    };
    if !right_held {
        return false;
    }

    let rook_sq = Square::new(from.row, side.rook_col());
    let rook_ready = board.get(rook_sq).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
    });
    if !rook_ready {
        return false;
    }

    let (low, high) = if rook_sq.col < from.col {
        (rook_sq.col, from.col)
    } else {
        (from.col, rook_sq.col)
    };
    if ((low + 1)..high).any(|col| !board.is_empty(Square::new(from.row, col))) {
        return false;
    }

    let enemy = king.color.opposite();
    if is_square_attacked_on(board, from, enemy) {
        return false;
    }

    // The king may not pass through or land on an attacked square.
    let step: i8 = if to.col > from.col { 1 } else { -1 };
    let mut transit = from;
    while transit != to {
        let Some(next) = transit.offset(0, step) else {
            return false;
        };
        transit = next;
        let attacked = simulate(board, Move::new(from, transit), None, |after| {
            is_square_attacked_on(after, transit, enemy)
        });
        if attacked {
            return false;
        }
    }

    true
}

/// Any legal move at all for `color`, scanning origins and destinations.
pub fn has_any_legal_move(game_state: &GameState, color: Color) -> bool {
    game_state.board.pieces_of(color).any(|(from, _)| {
        Square::all().any(|to| is_legal_move_for_piece(game_state, from, to))
    })
}

/// The en-passant target only ever belongs to the side on move.
#[inline]
pub(crate) fn en_passant_target_for(game_state: &GameState, color: Color) -> Option<Square> {
    if color == game_state.side_to_move {
        game_state.en_passant_target
    } else {
        None
    }
}
