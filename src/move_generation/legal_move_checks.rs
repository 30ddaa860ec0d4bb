//! Attack detection and check, checkmate and stalemate classification.

use crate::game_state::board::Board;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::piece_attacks;
use crate::move_generation::legal_move_validator::has_any_legal_move;

#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> bool {
    is_king_attacked_on(&game_state.board, color)
}

#[inline]
pub fn is_square_attacked(game_state: &GameState, square: Square, by_color: Color) -> bool {
    is_square_attacked_on(&game_state.board, square, by_color)
}

/// Board-level check test; `false` when `color` has no king.
pub fn is_king_attacked_on(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked_on(board, king_sq, color.opposite())
}

/// True iff some piece of `by_color` attacks `square`. Pins on the attacker
/// are ignored.
pub fn is_square_attacked_on(board: &Board, square: Square, by_color: Color) -> bool {
    if !square.in_bounds() {
        return false;
    }
    board
        .pieces_of(by_color)
        .any(|(from, piece)| piece_attacks(board, piece, from, square))
}

pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    is_in_check(game_state, color) && !has_any_legal_move(game_state, color)
}

pub fn is_stalemate(game_state: &GameState, color: Color) -> bool {
    !is_in_check(game_state, color) && !has_any_legal_move(game_state, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn starting_position_is_quiet() {
        let game = GameState::new_game();
        assert!(!is_in_check(&game, Color::White));
        assert!(!is_in_check(&game, Color::Black));
        assert!(!is_checkmate(&game, Color::White));
        assert!(!is_stalemate(&game, Color::White));
        // e3 is covered by the d2 and f2 pawns.
        assert!(is_square_attacked(&game, Square::new(5, 4), Color::White));
        assert!(!is_square_attacked(&game, Square::new(4, 4), Color::White));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let mut game = GameState::new_empty();
        game.board
            .place(Square::new(0, 0), Piece::new(PieceKind::Queen, Color::Black));
        assert!(!is_in_check(&game, Color::White));
    }

    #[test]
    fn pawn_push_square_is_not_attacked() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4p3/K7 w - - 0 1").expect("fixture");
        assert!(!is_square_attacked(&game, Square::new(7, 4), Color::Black));
        assert!(is_square_attacked(&game, Square::new(7, 3), Color::Black));
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("fixture");
        assert!(is_in_check(&game, Color::Black));
        assert!(is_checkmate(&game, Color::Black));
        assert!(!is_stalemate(&game, Color::Black));
        assert!(legal_moves(&game, Color::Black).is_empty());
    }

    #[test]
    fn cornered_king_is_stalemate() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("fixture");
        assert!(!is_in_check(&game, Color::Black));
        assert!(is_stalemate(&game, Color::Black));
        assert!(!is_checkmate(&game, Color::Black));
        assert!(legal_moves(&game, Color::Black).is_empty());
    }

    #[test]
    fn terminal_states_are_mutually_exclusive() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1",
            "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1",
            "4k3/4Q3/4K3/8/8/8/8/8 b - - 0 1",
        ] {
            let game = GameState::from_fen(fen).expect("fixture");
            for color in Color::BOTH {
                let mate = is_checkmate(&game, color);
                let stale = is_stalemate(&game, color);
                assert!(!(mate && stale), "{fen}: both terminal for {color}");
                if mate || stale {
                    assert!(legal_moves(&game, color).is_empty(), "{fen}: {color} can move");
                }
            }
        }
    }

    #[test]
    fn blocked_bishop_does_not_give_check() {
        // The knight on d2 shields e1 from the bishop; the rook on a1 still checks.
        let game =
            GameState::from_fen("4k3/8/8/8/1b6/8/3N4/r3K3 w - - 0 1").expect("fixture");
        assert!(is_in_check(&game, Color::White));
        assert!(is_square_attacked(&game, Square::new(6, 3), Color::Black));

        let mut no_rook = game.clone();
        no_rook.board.take(Square::new(7, 0));
        assert!(!is_in_check(&no_rook, Color::White));
    }
}
