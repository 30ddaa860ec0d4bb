//! Move execution and its exact inverse.
//!
//! `apply_move` trusts its caller: legality is checked beforehand by the
//! validator. Side effects are resolved before the mover is relocated because
//! en-passant detection reads the previous target.

use crate::chess_errors::{ChessErrors, ChessResult, IllegalMoveReason};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::en_passant_victim;
use crate::moves::king_moves::{castle_side, castling_rook_squares};

pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> ChessResult<MoveRecord> {
    let Some(mut mover) = game_state.board.get(from) else {
        return Err(ChessErrors::illegal(from, to, IllegalMoveReason::EmptySquare));
    };

    let prior_en_passant_target = game_state.en_passant_target;
    let prior_castling_rights = game_state.castling_rights;

    // Special side effects first.
    let mut castling_rook = None;
    if mover.kind == PieceKind::King {
        if let Some(side) = castle_side(mover.color, from, to) {
            let (rook_from, rook_to) = castling_rook_squares(mover.color, side);
            if let Some(mut rook) = game_state.board.take(rook_from) {
                rook.has_moved = true;
                game_state.board.place(rook_to, rook);
                castling_rook = Some((rook_from, rook_to));
            }
        }
    }

    let mut captured = None;
    let mut captured_square = None;
    if let Some(victim_sq) = en_passant_victim(&game_state.board, from, to, prior_en_passant_target)
    {
        captured = game_state.board.take(victim_sq);
        captured_square = captured.map(|_| victim_sq);
    }

    // Straightforward capture on the destination.
    if captured.is_none() {
        captured = game_state.board.take(to);
        captured_square = captured.map(|_| to);
    }
    if let Some(piece) = captured {
        game_state.tally_capture(piece);
        if piece.kind == PieceKind::Rook {
            revoke_rook_right(&mut game_state.castling_rights, piece.color, to);
        }
    }

    let first_move = !mover.has_moved;
    mover.has_moved = true;
    game_state.board.take(from);
    game_state.board.place(to, mover);

    match mover.kind {
        PieceKind::King => {
            *game_state.castling_rights.get_mut(mover.color) = SideCastlingRights::NONE;
        }
        PieceKind::Rook => revoke_rook_right(&mut game_state.castling_rights, mover.color, from),
        _ => {}
    }

    game_state.en_passant_target =
        if mover.kind == PieceKind::Pawn && from.row.abs_diff(to.row) == 2 {
            capturable_skip_square(&game_state.board, mover.color, from, to)
        } else {
            None
        };

    if mover.kind == PieceKind::Pawn && to.row == mover.color.promotion_row() {
        game_state.pending_promotion = Some(to);
    }

    let record = MoveRecord {
        from,
        to,
        piece_kind: mover.kind,
        captured,
        captured_square,
        prior_en_passant_target,
        prior_castling_rights,
        castling_rook,
        promotion: None,
        first_move,
    };
    game_state.move_history.push(record);

    log::debug!(
        "applied {:?} {} -> {}{}",
        mover.kind,
        from,
        to,
        captured.map(|p| format!(" capturing {}", p.kind)).unwrap_or_default()
    );

    Ok(record)
}

/// Turns the pending pawn into `kind` and stamps the choice on the last
/// history entry.
pub fn finalize_promotion(game_state: &mut GameState, kind: PieceKind) -> ChessResult<Square> {
    let square = game_state
        .pending_promotion
        .ok_or(ChessErrors::NoPendingPromotion)?;
    if !kind.is_promotion_choice() {
        return Err(ChessErrors::InvalidPromotionKind(kind));
    }
    let Some(mut pawn) = game_state.board.get(square) else {
        return Err(ChessErrors::CorruptState(format!(
            "pending promotion square {square} is empty"
        )));
    };

    pawn.kind = kind;
    game_state.board.place(square, pawn);
    if let Some(last) = game_state.move_history.last_mut() {
        last.promotion = Some(kind);
    }
    game_state.pending_promotion = None;
    Ok(square)
}

/// Restores the board and derived state to what they were before `record`
/// was applied. `record` must be the most recently applied move.
pub fn unapply_move(game_state: &mut GameState, record: &MoveRecord) {
    if let Some(mut mover) = game_state.board.take(record.to) {
        mover.kind = record.piece_kind;
        mover.has_moved = !record.first_move;
        game_state.board.place(record.from, mover);
    }
    if game_state.pending_promotion == Some(record.to) {
        game_state.pending_promotion = None;
    }

    if let Some((rook_from, rook_to)) = record.castling_rook {
        if let Some(mut rook) = game_state.board.take(rook_to) {
            rook.has_moved = false;
            game_state.board.place(rook_from, rook);
        }
    }

    if let (Some(piece), Some(square)) = (record.captured, record.captured_square) {
        game_state.board.place(square, piece);
        game_state.untally_capture(piece);
    }

    game_state.en_passant_target = record.prior_en_passant_target;
    game_state.castling_rights = record.prior_castling_rights;
}

/// Pops and reverses the most recent history entry.
pub fn undo_last_move(game_state: &mut GameState) -> Option<MoveRecord> {
    let record = game_state.move_history.pop()?;
    unapply_move(game_state, &record);
    Some(record)
}

/// Skipped square of a double push, recorded only when an enemy pawn stands
/// beside the landing square and could take it en passant.
fn capturable_skip_square(board: &Board, color: Color, from: Square, to: Square) -> Option<Square> {
    let flanked = [-1, 1].into_iter().any(|d_col| {
        to.offset(0, d_col)
            .and_then(|side| board.get(side))
            .is_some_and(|p| p.kind == PieceKind::Pawn && p.color != color)
    });
    flanked.then(|| Square::new((from.row + to.row) / 2, from.col))
}

fn revoke_rook_right(rights: &mut CastlingRights, owner: Color, square: Square) {
    if square.row != owner.back_rank() {
        return;
    }
    let side = rights.get_mut(owner);
    match square.col {
        0 => side.queenside = false,
        7 => side.kingside = false,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_validator::is_legal_move;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn fixture(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("fixture FEN should parse")
    }

    fn assert_round_trip(mut game: GameState, from: Square, to: Square) {
        assert!(is_legal_move(&game, from, to), "{from} -> {to} should be legal");
        let before = game.clone();
        apply_move(&mut game, from, to).expect("apply should succeed");
        assert_ne!(game.board, before.board);
        undo_last_move(&mut game).expect("history has a record");
        assert_eq!(game, before);
    }

    #[test]
    fn double_push_next_to_enemy_pawn_sets_target() {
        let mut game = fixture("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
        let record = apply_move(&mut game, sq(6, 4), sq(4, 4)).expect("apply");
        assert_eq!(game.en_passant_target, Some(sq(5, 4)));
        assert!(record.first_move);
        assert_eq!(game.board.get(sq(4, 4)).map(|p| p.has_moved), Some(true));
        assert_eq!(game.move_history.len(), 1);
    }

    #[test]
    fn unopposed_double_push_leaves_no_target() {
        let mut game = GameState::new_game();
        apply_move(&mut game, sq(6, 4), sq(4, 4)).expect("apply");
        assert_eq!(game.en_passant_target, None);
    }

    #[test]
    fn other_moves_clear_en_passant_target() {
        let mut game = fixture("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
        apply_move(&mut game, sq(6, 4), sq(4, 4)).expect("apply");
        assert!(game.en_passant_target.is_some());
        game.side_to_move = Color::Black;
        apply_move(&mut game, sq(0, 4), sq(0, 3)).expect("apply");
        assert_eq!(game.en_passant_target, None);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut game = fixture("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let record = apply_move(&mut game, sq(3, 4), sq(2, 3)).expect("apply");
        assert!(game.board.is_empty(sq(3, 3)));
        assert!(record.is_en_passant());
        assert_eq!(record.captured_square, Some(sq(3, 3)));
        assert_eq!(game.captured_pieces(Color::Black).len(), 1);
        assert_eq!(game.score_of(Color::Black), 1);
    }

    #[test]
    fn castling_relocates_rook_and_clears_rights() {
        let mut game = fixture("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let record = apply_move(&mut game, sq(7, 4), sq(7, 6)).expect("apply");
        assert_eq!(record.castling_rook, Some((sq(7, 7), sq(7, 5))));
        assert_eq!(
            game.board.get(sq(7, 5)),
            Some(Piece::moved(PieceKind::Rook, Color::White))
        );
        assert_eq!(game.castling_rights.get(Color::White), SideCastlingRights::NONE);
        assert_eq!(game.castling_rights.get(Color::Black), SideCastlingRights::ALL);
    }

    #[test]
    fn rook_moves_and_captures_revoke_single_rights() {
        let mut game = fixture("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        apply_move(&mut game, sq(7, 0), sq(0, 0)).expect("apply");
        assert!(!game.castling_rights.get(Color::White).queenside);
        assert!(game.castling_rights.get(Color::White).kingside);
        assert!(!game.castling_rights.get(Color::Black).queenside);
        assert!(game.castling_rights.get(Color::Black).kingside);
        assert_eq!(game.score_of(Color::Black), 5);
    }

    #[test]
    fn last_rank_pawn_waits_for_promotion() {
        let mut game = fixture("8/4P1k1/8/8/8/8/8/4K3 w - - 0 1");
        apply_move(&mut game, sq(1, 4), sq(0, 4)).expect("apply");
        assert_eq!(game.pending_promotion, Some(sq(0, 4)));
        assert_eq!(game.board.get(sq(0, 4)).map(|p| p.kind), Some(PieceKind::Pawn));

        assert_eq!(
            finalize_promotion(&mut game, PieceKind::King),
            Err(ChessErrors::InvalidPromotionKind(PieceKind::King))
        );
        finalize_promotion(&mut game, PieceKind::Knight).expect("promote");
        assert_eq!(game.board.get(sq(0, 4)).map(|p| p.kind), Some(PieceKind::Knight));
        assert_eq!(game.pending_promotion, None);
        assert_eq!(
            game.move_history.last().and_then(|r| r.promotion),
            Some(PieceKind::Knight)
        );
        assert_eq!(
            finalize_promotion(&mut game, PieceKind::Queen),
            Err(ChessErrors::NoPendingPromotion)
        );
    }

    #[test]
    fn applying_from_empty_square_is_rejected() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert!(apply_move(&mut game, sq(4, 4), sq(3, 4)).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn undo_restores_quiet_moves_and_pushes() {
        assert_round_trip(GameState::new_game(), sq(6, 4), sq(4, 4));
        assert_round_trip(GameState::new_game(), sq(7, 6), sq(5, 5));
    }

    #[test]
    fn undo_restores_captures() {
        let game = fixture("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
        assert_round_trip(game, sq(4, 4), sq(3, 3));
    }

    #[test]
    fn undo_restores_castling() {
        let game = fixture("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_round_trip(game.clone(), sq(7, 4), sq(7, 6));
        assert_round_trip(game, sq(7, 4), sq(7, 2));
    }

    #[test]
    fn undo_restores_en_passant() {
        let game = fixture("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        assert_round_trip(game, sq(3, 4), sq(2, 3));
    }

    #[test]
    fn undo_restores_rook_capture_rights() {
        let game = fixture("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_round_trip(game, sq(7, 7), sq(0, 7));
    }

    #[test]
    fn undo_restores_finalized_promotion_with_capture() {
        let mut game = fixture("3r2k1/4P3/8/8/8/8/8/4K3 w - - 0 1");
        let before = game.clone();
        apply_move(&mut game, sq(1, 4), sq(0, 3)).expect("apply");
        finalize_promotion(&mut game, PieceKind::Queen).expect("promote");
        undo_last_move(&mut game).expect("history has a record");
        assert_eq!(game, before);
    }
}
