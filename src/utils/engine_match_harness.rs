//! Head-to-head bot match harness for local testing.
//!
//! Runs two difficulty tiers against each other through the regular game
//! controller, so every move goes through the same validation a human move
//! does. Matches are reproducible from their seed.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chess_errors::ChessResult;
use crate::game::game_config::GameConfig;
use crate::game::game_controller::Game;
use crate::game_state::chess_types::{Color, Difficulty, GameStatus};
use crate::game_state::game_state::GameState;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Checkmate { winner: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub white: Difficulty,
    pub black: Difficulty,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            white: Difficulty::Medium,
            black: Difficulty::Medium,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub player1: Difficulty,
    pub player2: Difficulty,
    pub max_plies: u16,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            player1: Difficulty::Hard,
            player2: Difficulty::Easy,
            max_plies: 300,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub total_plies: u32,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let avg_plies = if self.games == 0 {
            0.0
        } else {
            f64::from(self.total_plies) / f64::from(self.games)
        };
        format!(
            "games={} player1_wins={} player2_wins={} draws={} avg_plies={:.1}",
            self.games, self.player1_wins, self.player2_wins, self.draws, avg_plies
        )
    }
}

/// Play a single seeded bot-vs-bot match from the starting position.
pub fn play_match(config: MatchConfig) -> ChessResult<MatchResult> {
    play_match_from_state(GameState::new_game(), config)
}

/// Play a single seeded match from a caller-provided state.
pub fn play_match_from_state(start_state: GameState, config: MatchConfig) -> ChessResult<MatchResult> {
    let mut game = Game::from_state(
        start_state,
        GameConfig::default().with_seed(config.seed),
    )?;

    let mut played_moves_lan = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;

    for _ in 0..config.max_plies {
        if game.status().is_terminal() {
            break;
        }

        let mover = game.side_to_move();
        let difficulty = match mover {
            Color::White => config.white,
            Color::Black => config.black,
        };
        let record = game.play_bot_move_with(difficulty)?;

        match mover {
            Color::White => white_move_count = white_move_count.saturating_add(1),
            Color::Black => black_move_count = black_move_count.saturating_add(1),
        }
        played_moves_lan.push(move_to_long_algebraic(record.as_move())?);
    }

    let outcome = match game.status() {
        GameStatus::Checkmate { winner } => MatchOutcome::Checkmate { winner },
        GameStatus::Stalemate => MatchOutcome::DrawStalemate,
        _ => MatchOutcome::DrawMaxPlies,
    };
    log::info!(
        "match {} vs {} seed={} finished: {:?} after {} plies",
        config.white,
        config.black,
        config.seed,
        outcome,
        played_moves_lan.len()
    );

    Ok(MatchResult {
        outcome,
        final_state: game.state().clone(),
        played_moves_lan,
        white_move_count,
        black_move_count,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_match_series(config: &MatchSeriesConfig) -> ChessResult<MatchSeriesStats> {
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let (white, black) = if player1_is_white {
            (config.player1, config.player2)
        } else {
            (config.player2, config.player1)
        };
        if config.verbose {
            println!(
                "[series] game {}/{} seed={} white={} black={}",
                i + 1,
                config.games,
                seed,
                white,
                black
            );
        }

        let result = play_match(MatchConfig {
            max_plies: config.max_plies,
            white,
            black,
            seed,
        })?;
        stats.total_plies = stats
            .total_plies
            .saturating_add(result.white_move_count + result.black_move_count);

        let mapped = match result.outcome {
            MatchOutcome::Checkmate { winner } => {
                let player = if (winner == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate {
                    player,
                    color: winner,
                }
            }
            MatchOutcome::DrawStalemate => {
                stats.draws += 1;
                SeriesOutcome::DrawStalemate
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                mapped,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    Ok(stats)
}
