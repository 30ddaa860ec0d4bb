//! Easy tier: mostly random, with a loose preference for any capture.

use rand::prelude::IndexedRandom;
use rand::{Rng, RngCore};

use crate::engines::bot_move_selector::CandidateMoves;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Move;

pub struct EasyEngine {
    /// Chance of restricting the pick to captures when any exist.
    pub capture_bias: f64,
}

impl Default for EasyEngine {
    fn default() -> Self {
        Self { capture_bias: 0.7 }
    }
}

impl Engine for EasyEngine {
    fn name(&self) -> &str {
        "easy"
    }

    fn choose_move(&self, candidates: &CandidateMoves, rng: &mut dyn RngCore) -> Option<Move> {
        if rng.random_bool(self.capture_bias) {
            let captures = candidates.captures();
            if let Some(picked) = captures.choose(rng) {
                return Some(picked.mv);
            }
        }
        candidates.all.choose(rng).map(|c| c.mv)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::EasyEngine;
    use crate::engines::bot_move_selector::CandidateMoves;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn always_capturing_bias_only_returns_captures() {
        let game = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("fixture");
        let candidates = CandidateMoves::collect(&game, Color::White);
        let engine = EasyEngine { capture_bias: 1.0 };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let mv = engine.choose_move(&candidates, &mut rng).expect("moves exist");
            assert_eq!(mv, Move::new(Square::new(4, 4), Square::new(3, 3)));
        }
    }

    #[test]
    fn zero_bias_still_returns_some_move() {
        let game = GameState::new_game();
        let candidates = CandidateMoves::collect(&game, Color::White);
        let engine = EasyEngine { capture_bias: 0.0 };
        let mut rng = StdRng::seed_from_u64(3);
        let mv = engine.choose_move(&candidates, &mut rng).expect("moves exist");
        assert!(candidates.all.iter().any(|c| c.mv == mv));
    }

    #[test]
    fn empty_candidates_yield_nothing() {
        let engine = EasyEngine::default();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(engine.choose_move(&CandidateMoves::default(), &mut rng), None);
    }
}
