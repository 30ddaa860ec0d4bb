//! Bot-vs-bot match runner.
//!
//! Run with:
//! `cargo run --release --bin bot_match -- --white hard --black easy --show-board`
//! `cargo run --release --bin bot_match -- --games 20 --seed 1234`

use clap::Parser;

use grid_chess::game_state::chess_types::Difficulty;
use grid_chess::utils::engine_match_harness::{
    play_match, play_match_series, MatchConfig, MatchSeriesConfig,
};
use grid_chess::utils::render_game_state::render_game_state;

#[derive(Parser)]
#[command(name = "bot_match")]
#[command(about = "Play the tiered chess bots against each other")]
struct Args {
    /// Difficulty for White, or player 1 in a series (easy, medium, hard)
    #[arg(short, long, default_value_t = Difficulty::Hard)]
    white: Difficulty,

    /// Difficulty for Black, or player 2 in a series
    #[arg(short, long, default_value_t = Difficulty::Easy)]
    black: Difficulty,

    /// Number of games; more than one plays a series with randomized colors
    #[arg(short, long, default_value_t = 1)]
    games: u16,

    /// Base RNG seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Ply limit before a game is scored as a draw
    #[arg(long, default_value_t = 300)]
    max_plies: u16,

    /// Print the final board of a single game
    #[arg(long)]
    show_board: bool,

    /// Print per-game series progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    if args.games == 0 {
        return Err("--games must be >= 1".into());
    }

    if args.games == 1 {
        let result = play_match(MatchConfig {
            max_plies: args.max_plies,
            white: args.white,
            black: args.black,
            seed: args.seed,
        })?;

        println!("moves: {}", result.played_moves_lan.join(" "));
        println!("outcome: {:?}", result.outcome);
        if args.show_board {
            println!("{}", render_game_state(&result.final_state));
        }
        return Ok(());
    }

    let stats = play_match_series(&MatchSeriesConfig {
        games: args.games,
        base_seed: args.seed,
        player1: args.white,
        player2: args.black,
        max_plies: args.max_plies,
        verbose: args.verbose,
    })?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
