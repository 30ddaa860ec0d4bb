//! Perft node counting.
//!
//! Walks the legal move tree with apply/undo and tallies leaf statistics.
//! Promotions are expanded into all four choices, so the totals line up with
//! the published perft tables.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, finalize_promotion, undo_last_move};
use crate::move_generation::legal_move_checks::{is_checkmate, is_in_check};
use crate::move_generation::legal_move_generator::{is_promotion_move, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }
    let mut scratch = game_state.clone();
    perft_recurse(&mut scratch, depth)
}

/// Per-root-move node counts, handy for narrowing down a mismatch.
pub fn perft_divide(game_state: &GameState, depth: u8) -> ChessResult<Vec<(Move, usize)>> {
    let mut scratch = game_state.clone();
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    let side = scratch.side_to_move;
    for mv in legal_moves(&scratch, side) {
        for promotion in promotion_choices(&scratch, mv) {
            play(&mut scratch, mv, promotion)?;
            let nodes = if depth == 1 {
                1
            } else {
                perft_recurse(&mut scratch, depth - 1)?.nodes
            };
            take_back(&mut scratch, side);
            out.push((
                Move {
                    promotion,
                    ..mv
                },
                nodes,
            ));
        }
    }
    Ok(out)
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> ChessResult<PerftCounts> {
    let side = game_state.side_to_move;
    let mut total = PerftCounts::default();

    for mv in legal_moves(game_state, side) {
        for promotion in promotion_choices(game_state, mv) {
            let record = play(game_state, mv, promotion)?;

            if depth == 1 {
                total.merge(leaf_counts(game_state, &record));
            } else {
                total.merge(perft_recurse(game_state, depth - 1)?);
            }

            take_back(game_state, side);
        }
    }

    Ok(total)
}

fn promotion_choices(game_state: &GameState, mv: Move) -> Vec<Option<PieceKind>> {
    if is_promotion_move(game_state, mv.from, mv.to) {
        PieceKind::PROMOTION_CHOICES.iter().copied().map(Some).collect()
    } else {
        vec![None]
    }
}

fn play(
    game_state: &mut GameState,
    mv: Move,
    promotion: Option<PieceKind>,
) -> ChessResult<MoveRecord> {
    let mut record = apply_move(game_state, mv.from, mv.to)?;
    if let Some(kind) = promotion {
        finalize_promotion(game_state, kind)?;
        record.promotion = Some(kind);
    }
    game_state.side_to_move = game_state.side_to_move.opposite();
    Ok(record)
}

fn take_back(game_state: &mut GameState, side: Color) {
    undo_last_move(game_state);
    game_state.side_to_move = side;
}

fn leaf_counts(game_state: &GameState, record: &MoveRecord) -> PerftCounts {
    let defender = game_state.side_to_move;
    PerftCounts {
        nodes: 1,
        captures: usize::from(record.is_capture()),
        en_passant: usize::from(record.is_en_passant()),
        castles: usize::from(record.is_castling()),
        promotions: usize::from(record.promotion.is_some()),
        checks: usize::from(is_in_check(game_state, defender)),
        checkmates: usize::from(is_checkmate(game_state, defender)),
    }
}
