//! Game controller: turn order, status transitions and the public contract
//! used by front ends.
//!
//! The controller owns one `GameState` and a seeded RNG for the bot. Every
//! rejected request returns an error and leaves the game exactly as it was.

use rand::{rngs::StdRng, SeedableRng};

use crate::chess_errors::{ChessErrors, ChessResult, IllegalMoveReason};
use crate::engines::bot_move_selector;
use crate::game::game_config::GameConfig;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, finalize_promotion, undo_last_move};
use crate::move_generation::legal_move_checks::{is_checkmate, is_in_check, is_stalemate};
use crate::move_generation::legal_move_generator;
use crate::move_generation::legal_move_validator::is_legal_move;

pub struct Game {
    state: GameState,
    config: GameConfig,
    rng: StdRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new_game(),
            config,
            rng: seeded_rng(&config),
        }
    }

    /// Starting position with the default configuration.
    #[inline]
    pub fn new_game() -> Self {
        Self::default()
    }

    /// Wraps an arbitrary position. Fails with `CorruptState` unless each side
    /// has exactly one king and the side not on move is out of check.
    pub fn from_state(state: GameState, config: GameConfig) -> ChessResult<Self> {
        let mut game = Self {
            state,
            config,
            rng: seeded_rng(&config),
        };
        game.state.verify_kings()?;
        if game.state.pending_promotion.is_none() {
            let waiting = game.state.side_to_move.opposite();
            if is_in_check(&game.state, waiting) {
                let message = format!("{waiting} is in check but not on move");
                log::error!("{message}");
                return Err(ChessErrors::CorruptState(message));
            }
            if game.state.status != GameStatus::Ended {
                game.refresh_status()?;
            }
        }
        Ok(game)
    }

    pub fn from_fen(fen: &str, config: GameConfig) -> ChessResult<Self> {
        Self::from_state(GameState::from_fen(fen)?, config)
    }

    /// Back to the starting position. Configuration and RNG stream are kept.
    pub fn reset(&mut self) {
        self.state = GameState::new_game();
        log::info!("game reset");
    }

    pub fn request_move(&mut self, from: Square, to: Square) -> ChessResult<MoveRecord> {
        if let Err(err) = self.check_move_request(from, to) {
            log::debug!("rejected {from} -> {to}: {err}");
            return Err(err);
        }

        let record = apply_move(&mut self.state, from, to)?;
        if self.state.pending_promotion.is_some() {
            log::debug!("promotion pending on {to}");
            return Ok(record);
        }

        self.finish_turn()?;
        Ok(record)
    }

    pub fn resolve_promotion(&mut self, kind: PieceKind) -> ChessResult<()> {
        let square = finalize_promotion(&mut self.state, kind)?;
        log::debug!("promoted on {square} to {kind}");
        self.finish_turn()
    }

    /// Bot move for `color` at `difficulty`, without playing it.
    pub fn select_move(&mut self, color: Color, difficulty: Difficulty) -> ChessResult<Move> {
        if self.state.status.is_terminal() {
            return Err(ChessErrors::bot_rejected(IllegalMoveReason::GameOver));
        }
        if self.state.pending_promotion.is_some() {
            return Err(ChessErrors::bot_rejected(IllegalMoveReason::PromotionPending));
        }
        if color != self.state.side_to_move {
            return Err(ChessErrors::bot_rejected(IllegalMoveReason::NotYourTurn));
        }
        bot_move_selector::select_move(&self.state, color, difficulty, &mut self.rng)
    }

    /// Selects and plays a move for the side to move at the configured
    /// difficulty.
    pub fn play_bot_move(&mut self) -> ChessResult<MoveRecord> {
        self.play_bot_move_with(self.config.bot_difficulty)
    }

    /// Selects and plays a move for the side to move. Promotions are resolved
    /// immediately.
    pub fn play_bot_move_with(&mut self, difficulty: Difficulty) -> ChessResult<MoveRecord> {
        let mv = self.select_move(self.state.side_to_move, difficulty)?;
        let record = self.request_move(mv.from, mv.to)?;
        if self.state.pending_promotion.is_some() {
            self.resolve_promotion(mv.promotion.unwrap_or(PieceKind::Queen))?;
            return Ok(self.state.move_history.last().copied().unwrap_or(record));
        }
        Ok(record)
    }

    /// Takes back the most recent move, including one whose promotion is
    /// still pending. An ended game stays ended.
    pub fn undo_last_move(&mut self) -> ChessResult<Option<MoveRecord>> {
        let was_pending = self.state.pending_promotion.is_some();
        let Some(record) = undo_last_move(&mut self.state) else {
            return Ok(None);
        };
        if !was_pending {
            self.state.side_to_move = self.state.side_to_move.opposite();
        }
        if self.state.status != GameStatus::Ended {
            self.refresh_status()?;
        }
        log::debug!("undid {} -> {}", record.from, record.to);
        Ok(Some(record))
    }

    /// Aborts a running game. Finished games keep their result.
    pub fn end_game(&mut self) {
        if !self.state.status.is_terminal() {
            self.state.status = GameStatus::Ended;
            log::info!("game ended by request");
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board_snapshot(&self) -> Board {
        self.state.board
    }

    /// Where the piece on `square` may go right now. Empty unless it belongs
    /// to the side to move and the game accepts moves.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        let accepts_moves =
            !self.state.status.is_terminal() && self.state.pending_promotion.is_none();
        match self.state.board.get(square) {
            Some(piece) if accepts_moves && piece.color == self.state.side_to_move => {
                legal_move_generator::legal_destinations(&self.state, square)
            }
            _ => Vec::new(),
        }
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        self.state.captured_pieces(color)
    }

    #[inline]
    pub fn score(&self, color: Color) -> i32 {
        self.state.score_of(color)
    }

    /// `(white, black)` material lost so far.
    #[inline]
    pub fn scores(&self) -> (i32, i32) {
        (self.score(Color::White), self.score(Color::Black))
    }

    #[inline]
    pub fn is_promotion_pending(&self) -> bool {
        self.state.pending_promotion.is_some()
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.state.move_history
    }

    fn check_move_request(&self, from: Square, to: Square) -> ChessResult<()> {
        let reject = |reason| Err(ChessErrors::illegal(from, to, reason));
        if self.state.status.is_terminal() {
            return reject(IllegalMoveReason::GameOver);
        }
        if self.state.pending_promotion.is_some() {
            return reject(IllegalMoveReason::PromotionPending);
        }
        let Some(piece) = self.state.board.get(from) else {
            return reject(IllegalMoveReason::EmptySquare);
        };
        if piece.color != self.state.side_to_move {
            return reject(IllegalMoveReason::NotYourTurn);
        }
        if !is_legal_move(&self.state, from, to) {
            return reject(IllegalMoveReason::RejectedByRules);
        }
        Ok(())
    }

    fn finish_turn(&mut self) -> ChessResult<()> {
        self.state.side_to_move = self.state.side_to_move.opposite();
        self.refresh_status()?;
        Ok(())
    }

    /// Classifies the position for the side to move.
    fn refresh_status(&mut self) -> ChessResult<GameStatus> {
        self.state.verify_kings()?;
        let to_move = self.state.side_to_move;

        let status = if is_checkmate(&self.state, to_move) {
            GameStatus::Checkmate {
                winner: to_move.opposite(),
            }
        } else if is_stalemate(&self.state, to_move) {
            GameStatus::Stalemate
        } else if is_in_check(&self.state, to_move) {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        };

        if status.is_terminal() && status != self.state.status {
            log::info!("game over: {status}");
        }
        self.state.status = status;
        Ok(status)
    }
}

fn seeded_rng(config: &GameConfig) -> StdRng {
    match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
