//! Full legal move enumeration.
//!
//! Scans every origin square of the requested color against all 64
//! destinations through the validator. Results come back in row-major scan
//! order, which the bot relies on for deterministic tie-breaking.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_validator::is_legal_move_for_piece;

/// All legal moves for `color`. Pawn moves onto the last rank are reported
/// once, without a promotion choice.
pub fn legal_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in game_state.board.pieces_of(color) {
        for to in Square::all() {
            if is_legal_move_for_piece(game_state, from, to) {
                out.push(Move::new(from, to));
            }
        }
    }
    out
}

/// Legal destinations for the piece on `square`; empty when the square is
/// empty or off the board.
pub fn legal_destinations(game_state: &GameState, square: Square) -> Vec<Square> {
    if game_state.board.get(square).is_none() {
        return Vec::new();
    }
    Square::all()
        .filter(|to| is_legal_move_for_piece(game_state, square, *to))
        .collect()
}

/// True when `from -> to` moves a pawn onto its promotion row.
pub fn is_promotion_move(game_state: &GameState, from: Square, to: Square) -> bool {
    game_state
        .board
        .get(from)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row())
}
