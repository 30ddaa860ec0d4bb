//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type across the crate. Every public
//! operation that can fail returns `ChessResult<T>`, and callers match on the
//! variant to decide what to show or retry.
//!
//! - `IllegalMove`, `NoPendingPromotion` and `InvalidPromotionKind` are
//!   ordinary input rejections. The game is left untouched.
//! - `NoLegalMoves` means the bot was asked to move in a finished position;
//!   callers should check `status()` first.
//! - `CorruptState` means a position without exactly one king per side was
//!   handed to the engine. It is a bug upstream, not something to retry.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Move, PieceKind, Square};

pub type ChessResult<T> = Result<T, ChessErrors>;

/// Why a move request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The origin square is empty.
    EmptySquare,
    /// The piece on the origin square belongs to the side not on move.
    NotYourTurn,
    /// Geometry, path, capture or king-safety rules rejected the move.
    RejectedByRules,
    /// The game already reached checkmate, stalemate or was ended.
    GameOver,
    /// A promotion must be resolved before the next move.
    PromotionPending,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IllegalMoveReason::EmptySquare => "no piece on origin square",
            IllegalMoveReason::NotYourTurn => "not this side's turn",
            IllegalMoveReason::RejectedByRules => "rejected by move rules",
            IllegalMoveReason::GameOver => "game is over",
            IllegalMoveReason::PromotionPending => "a promotion is pending",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// `attempted` is `None` when the rejected request was a bot move.
    #[error("illegal move: {reason}")]
    IllegalMove {
        attempted: Option<Move>,
        reason: IllegalMoveReason,
    },

    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("cannot promote to {0}")]
    InvalidPromotionKind(PieceKind),

    #[error("{0} has no legal moves")]
    NoLegalMoves(Color),

    #[error("corrupt game state: {0}")]
    CorruptState(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),
}

impl ChessErrors {
    #[inline]
    pub(crate) fn illegal(from: Square, to: Square, reason: IllegalMoveReason) -> Self {
        ChessErrors::IllegalMove {
            attempted: Some(Move::new(from, to)),
            reason,
        }
    }

    #[inline]
    pub(crate) fn bot_rejected(reason: IllegalMoveReason) -> Self {
        ChessErrors::IllegalMove {
            attempted: None,
            reason,
        }
    }

    /// Rejection reason when this is an `IllegalMove`.
    pub fn illegal_move_reason(&self) -> Option<IllegalMoveReason> {
        match self {
            ChessErrors::IllegalMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChessErrors, IllegalMoveReason};
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    #[test]
    fn messages_name_the_offending_input() {
        let err = ChessErrors::illegal(
            Square::new(6, 4),
            Square::new(3, 4),
            IllegalMoveReason::RejectedByRules,
        );
        assert_eq!(err.to_string(), "illegal move: rejected by move rules");
        assert_eq!(
            err.illegal_move_reason(),
            Some(IllegalMoveReason::RejectedByRules)
        );
        assert_eq!(
            ChessErrors::InvalidPromotionKind(PieceKind::King).to_string(),
            "cannot promote to king"
        );
        assert_eq!(
            ChessErrors::NoLegalMoves(Color::Black).to_string(),
            "black has no legal moves"
        );
    }
}
