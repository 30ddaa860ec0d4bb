use rand::prelude::IndexedRandom;
use rand::RngCore;

use crate::engines::bot_move_selector::CandidateMoves;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Move;

/// Hard tier: best capture, else the first check found, else random.
pub struct HardEngine;

impl Engine for HardEngine {
    fn name(&self) -> &str {
        "hard"
    }

    fn choose_move(&self, candidates: &CandidateMoves, rng: &mut dyn RngCore) -> Option<Move> {
        if let Some(best) = candidates.best_capture() {
            return Some(best.mv);
        }
        if let Some(check) = candidates.first_check() {
            return Some(check.mv);
        }
        candidates.all.choose(rng).map(|c| c.mv)
    }
}
