//! Medium tier: usually grabs the most valuable capture, often checks,
//! otherwise plays at random.

use rand::prelude::IndexedRandom;
use rand::{Rng, RngCore};

use crate::engines::bot_move_selector::CandidateMoves;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Move;

pub struct MediumEngine {
    pub capture_probability: f64,
    pub check_probability: f64,
}

impl Default for MediumEngine {
    fn default() -> Self {
        Self {
            capture_probability: 0.8,
            check_probability: 0.6,
        }
    }
}

impl Engine for MediumEngine {
    fn name(&self) -> &str {
        "medium"
    }

    fn choose_move(&self, candidates: &CandidateMoves, rng: &mut dyn RngCore) -> Option<Move> {
        if rng.random_bool(self.capture_probability) {
            if let Some(best) = candidates.best_capture() {
                return Some(best.mv);
            }
        }
        if rng.random_bool(self.check_probability) {
            let checks = candidates.checking_non_captures();
            if let Some(picked) = checks.choose(rng) {
                return Some(picked.mv);
            }
        }
        candidates.all.choose(rng).map(|c| c.mv)
    }
}
