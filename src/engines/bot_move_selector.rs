//! One-ply bot move selection.
//!
//! Enumerates every legal move for the bot's color, tags each with the
//! material it captures and whether it checks the opponent, then hands the
//! list to the policy for the requested difficulty.

use rand::RngCore;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_easy::EasyEngine;
use crate::engines::engine_hard::HardEngine;
use crate::engines::engine_medium::MediumEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_attacked_on;
use crate::move_generation::legal_move_generator::{is_promotion_move, legal_moves};
use crate::move_generation::legal_move_shared::simulate;
use crate::move_generation::legal_move_validator::en_passant_target_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub mv: Move,
    /// Kind standing on the destination square, if any.
    pub captured: Option<PieceKind>,
    /// Only computed for non-captures.
    pub gives_check: bool,
}

impl Candidate {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn capture_value(&self) -> i32 {
        self.captured.map(PieceKind::value).unwrap_or(0)
    }
}

/// Legal moves of one color in scan order, classified for the policies.
#[derive(Debug, Clone, Default)]
pub struct CandidateMoves {
    pub all: Vec<Candidate>,
}

impl CandidateMoves {
    pub fn collect(game_state: &GameState, color: Color) -> Self {
        let opponent = color.opposite();
        let en_passant_target = en_passant_target_for(game_state, color);

        let all = legal_moves(game_state, color)
            .into_iter()
            .map(|mv| {
                // The bot always promotes to a queen.
                let mv = if is_promotion_move(game_state, mv.from, mv.to) {
                    Move::with_promotion(mv.from, mv.to, PieceKind::Queen)
                } else {
                    mv
                };
                let captured = game_state.board.get(mv.to).map(|piece| piece.kind);
                let gives_check = captured.is_none()
                    && simulate(&game_state.board, mv, en_passant_target, |after| {
                        is_king_attacked_on(after, opponent)
                    });
                Candidate {
                    mv,
                    captured,
                    gives_check,
                }
            })
            .collect::<Vec<_>>();

        log::trace!(
            "{color} candidates: {} total, {} captures, {} checks",
            all.len(),
            all.iter().filter(|c| c.is_capture()).count(),
            all.iter().filter(|c| c.gives_check).count()
        );

        Self { all }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn captures(&self) -> Vec<&Candidate> {
        self.all.iter().filter(|c| c.is_capture()).collect()
    }

    pub fn checking_non_captures(&self) -> Vec<&Candidate> {
        self.all
            .iter()
            .filter(|c| !c.is_capture() && c.gives_check)
            .collect()
    }

    /// Highest-value capture; the first one found wins ties.
    pub fn best_capture(&self) -> Option<&Candidate> {
        let mut best: Option<&Candidate> = None;
        for candidate in self.all.iter().filter(|c| c.is_capture()) {
            if best.map_or(true, |b| candidate.capture_value() > b.capture_value()) {
                best = Some(candidate);
            }
        }
        best
    }

    pub fn first_check(&self) -> Option<&Candidate> {
        self.all.iter().find(|c| !c.is_capture() && c.gives_check)
    }
}

pub fn engine_for(difficulty: Difficulty) -> Box<dyn Engine> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyEngine::default()),
        Difficulty::Medium => Box::new(MediumEngine::default()),
        Difficulty::Hard => Box::new(HardEngine),
    }
}

/// Chooses a move for `color`. Fails with `NoLegalMoves` in a finished
/// position.
pub fn select_move(
    game_state: &GameState,
    color: Color,
    difficulty: Difficulty,
    rng: &mut dyn RngCore,
) -> ChessResult<Move> {
    let candidates = CandidateMoves::collect(game_state, color);
    let engine = engine_for(difficulty);
    let picked = engine
        .choose_move(&candidates, rng)
        .ok_or(ChessErrors::NoLegalMoves(color))?;

    log::debug!(
        "{} picked {} -> {} out of {} moves",
        engine.name(),
        picked.from,
        picked.to,
        candidates.len()
    );
    Ok(picked)
}
