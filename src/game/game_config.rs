//! Per-game configuration.

use crate::game_state::chess_types::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Difficulty used by `Game::play_bot_move`.
    pub bot_difficulty: Difficulty,
    /// Fixed seed for the bot's random choices; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot_difficulty: Difficulty::Medium,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.bot_difficulty = difficulty;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}
