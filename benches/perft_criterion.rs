//! Move-generation and bot timing.
//!
//! `cargo bench --bench perft_criterion` runs the shallow depths only; set
//! `GRID_BENCH_DEEP=1` to add one more ply per position.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};

use grid_chess::engines::bot_move_selector::select_move;
use grid_chess::game_state::chess_types::Difficulty;
use grid_chess::game_state::game_state::GameState;
use grid_chess::move_generation::perft::perft;

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

/// `(label, fen, node counts by depth)`; the last entry is only timed when
/// deep runs are requested.
const POSITIONS: &[(&str, &str, &[usize])] = &[
    (
        "start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[20, 400, 8902],
    ),
    ("kiwipete", KIWIPETE_FEN, &[48, 2039]),
    ("rook_endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", &[14, 191, 2812]),
    (
        "promotions",
        "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        &[6, 264],
    ),
];

fn bench_perft(c: &mut Criterion) {
    let deep = std::env::var_os("GRID_BENCH_DEEP").is_some();
    let mut group = c.benchmark_group("perft");
    group.sample_size(20);

    for (label, fen, counts) in POSITIONS {
        let game = GameState::from_fen(fen).expect("benchmark FEN should parse");
        let depths = if deep { counts.len() } else { counts.len() - 1 };

        for (depth, &nodes) in (1u8..).zip(counts.iter().take(depths)) {
            // A wrong count makes the timing meaningless.
            let counted = perft(&game, depth).expect("perft should run").nodes;
            assert_eq!(counted, nodes, "{label} depth {depth}");

            group.throughput(Throughput::Elements(nodes as u64));
            group.bench_function(BenchmarkId::new(*label, depth), |b| {
                b.iter(|| perft(black_box(&game), depth).map(|counts| counts.nodes))
            });
        }
    }

    group.finish();
}

fn bench_bot_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("bot_select_move");
    let game = GameState::from_fen(KIWIPETE_FEN).expect("benchmark FEN should parse");

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut rng = StdRng::seed_from_u64(11);
        group.bench_function(BenchmarkId::from_parameter(difficulty), |b| {
            b.iter(|| select_move(black_box(&game), game.side_to_move, difficulty, &mut rng))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_bot_selection);
criterion_main!(benches);
