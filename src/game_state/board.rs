//! 8x8 mailbox board.
//!
//! The board only stores pieces. It knows nothing about turn order or rules;
//! those live in `move_generation` and the game controller.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting layout with every piece unmoved.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in Color::BOTH {
            let back = color.back_rank();
            let pawns = color.pawn_start_row();
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.place(Square::new(back, col as u8), Piece::new(*kind, color));
                board.place(Square::new(pawns, col as u8), Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Piece on `square`; off-board squares read as empty.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells
            .get(square.row as usize)
            .and_then(|row| row.get(square.col as usize))
            .copied()
            .flatten()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Overwrites `square`. Off-board squares are ignored.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(cell) = self
            .cells
            .get_mut(square.row as usize)
            .and_then(|row| row.get_mut(square.col as usize))
        {
            *cell = piece;
        }
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
    }

    /// Removes and returns the piece on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let piece = self.get(square);
        self.set(square, None);
        piece
    }

    /// Moves whatever sits on `from` to `to`, returning the previous occupant
    /// of `to`. The moved piece is not marked as moved.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from);
        let displaced = self.get(to);
        self.set(to, moving);
        displaced
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` in scan order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn count_kings(&self, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count()
    }

    /// Row-major copy of the cells, row 0 first.
    #[inline]
    pub fn cells(&self) -> [[Option<Piece>; 8]; 8] {
        self.cells
    }
}
