use crate::game_state::chess_types::*;

/// History entry written by `apply_move`. Holds everything needed to put the
/// board and the derived state back exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece_kind: PieceKind,
    pub captured: Option<Piece>,
    /// Where the captured piece stood. Differs from `to` only for en passant.
    pub captured_square: Option<Square>,

    pub prior_en_passant_target: Option<Square>,
    pub prior_castling_rights: CastlingRights,
    /// Rook relocation performed by castling, `(from, to)`.
    pub castling_rook: Option<(Square, Square)>,
    /// Final kind chosen for a promoted pawn. `None` while still pending.
    pub promotion: Option<PieceKind>,
    pub first_move: bool,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.captured_square.is_some_and(|sq| sq != self.to)
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.castling_rook.is_some()
    }

    #[inline]
    pub fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}
