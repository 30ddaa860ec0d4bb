//! Crate root module declarations for the grid chess engine.
//!
//! Exposes the board model, rule checks, move execution, the tiered bot and
//! the game controller, plus FEN/notation helpers, so binaries, benches and
//! front ends can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_geometry;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_move_validator;
    pub mod perft;
}

pub mod engines {
    pub mod bot_move_selector;
    pub mod engine_easy;
    pub mod engine_hard;
    pub mod engine_medium;
    pub mod engine_trait;
}

pub mod game {
    pub mod game_config;
    pub mod game_controller;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
