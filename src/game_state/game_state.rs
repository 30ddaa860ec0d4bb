//! Complete game state.
//!
//! `GameState` is the caller-owned value every core operation reads or
//! mutates. It bundles the board with the derived bookkeeping (castling
//! rights, en-passant target, captured pieces, score, move history and
//! status).

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    // Pieces are filed under the color that lost them.
    pub captured: [Vec<Piece>; 2],
    pub score: [i32; 2],

    pub move_history: Vec<MoveRecord>,
    pub en_passant_target: Option<Square>,
    pub castling_rights: CastlingRights,
    pub status: GameStatus,

    /// Square of a pawn waiting for its promotion choice.
    pub pending_promotion: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            captured: [Vec::new(), Vec::new()],
            score: [0; 2],
            move_history: Vec::new(),
            en_passant_target: None,
            castling_rights: CastlingRights::NONE,
            status: GameStatus::InProgress,
            pending_promotion: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position, White to move, all castling rights.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            castling_rights: CastlingRights::ALL,
            ..Self::default()
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    #[inline]
    pub fn score_of(&self, color: Color) -> i32 {
        self.score[color.index()]
    }

    /// Checks the one-king-per-side invariant.
    pub fn verify_kings(&self) -> ChessResult<()> {
        for color in Color::BOTH {
            let kings = self.board.count_kings(color);
            if kings != 1 {
                let message = format!("{color} has {kings} kings on the board");
                log::error!("{message}");
                return Err(ChessErrors::CorruptState(message));
            }
        }
        Ok(())
    }

    /// Records a captured piece under its owner's color.
    pub(crate) fn tally_capture(&mut self, piece: Piece) {
        self.captured[piece.color.index()].push(piece);
        self.score[piece.color.index()] += piece.kind.value();
    }

    /// Reverses the most recent `tally_capture` for `piece`'s owner.
    pub(crate) fn untally_capture(&mut self, piece: Piece) {
        let owner = piece.color.index();
        if let Some(pos) = self.captured[owner].iter().rposition(|p| *p == piece) {
            self.captured[owner].remove(pos);
            self.score[owner] -= piece.kind.value();
        }
    }
}
