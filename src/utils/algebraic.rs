//! Square conversions for algebraic coordinates.
//!
//! Row 0 is rank 8 and column 0 is file `a`, so `"a8"` is `(0, 0)` and
//! `"h1"` is `(7, 7)`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "expected two characters, got {square:?}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid file '{}'",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid rank '{}'",
            rank as char
        )));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if !square.in_bounds() {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "square {square} is off the board"
        )));
    }

    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'8' - square.row);
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corners_map_to_grid_coordinates() {
        assert_eq!(algebraic_to_square("a8"), Ok(Square::new(0, 0)));
        assert_eq!(algebraic_to_square("h1"), Ok(Square::new(7, 7)));
        assert_eq!(algebraic_to_square("e4"), Ok(Square::new(4, 4)));
        assert_eq!(square_to_algebraic(Square::new(0, 0)).as_deref(), Ok("a8"));
        assert_eq!(square_to_algebraic(Square::new(6, 4)).as_deref(), Ok("e2"));
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for bad in ["", "e", "e44", "i1", "a0", "A1"] {
            assert!(
                matches!(algebraic_to_square(bad), Err(ChessErrors::InvalidAlgebraic(_))),
                "{bad:?} should not parse"
            );
        }
        assert!(square_to_algebraic(Square::new(8, 0)).is_err());
    }
}
