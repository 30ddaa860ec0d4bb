//! Bot policy abstraction.
//!
//! Every difficulty tier sees the same classified candidate list and only
//! decides which entry to play, so the tiers can be swapped at runtime
//! behind a single trait object.

use rand::RngCore;

use crate::engines::bot_move_selector::CandidateMoves;
use crate::game_state::chess_types::Move;

pub trait Engine {
    fn name(&self) -> &str;

    /// Picks one of `candidates`. Returns `None` only for an empty list.
    fn choose_move(&self, candidates: &CandidateMoves, rng: &mut dyn RngCore) -> Option<Move>;
}
