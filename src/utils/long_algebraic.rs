//! Long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Parsing is purely syntactic. Whether the move is legal in some position
//! is the validator's business.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> ChessResult<String> {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.from)?);
    out.push_str(&square_to_algebraic(mv.to)?);

    if let Some(kind) = mv.promotion {
        if !kind.is_promotion_choice() {
            return Err(ChessErrors::InvalidPromotionKind(kind));
        }
        out.push(kind.letter());
    }

    Ok(out)
}

pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<Move> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid long algebraic move: {long_algebraic:?}"
        )));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;

    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(ch) => {
            let kind = PieceKind::from_letter(ch)
                .filter(|kind| kind.is_promotion_choice())
                .ok_or_else(|| {
                    ChessErrors::InvalidAlgebraic(format!("invalid promotion piece '{ch}'"))
                })?;
            Some(kind)
        }
    };

    Ok(Move {
        from,
        to,
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::*;

    #[test]
    fn plain_and_promotion_moves_parse() {
        assert_eq!(
            long_algebraic_to_move("e2e4"),
            Ok(Move::new(Square::new(6, 4), Square::new(4, 4)))
        );
        assert_eq!(
            long_algebraic_to_move("a7a8n"),
            Ok(Move::with_promotion(
                Square::new(1, 0),
                Square::new(0, 0),
                PieceKind::Knight
            ))
        );
    }

    #[test]
    fn moves_format_with_lowercase_suffix() {
        let castle = Move::new(Square::new(7, 4), Square::new(7, 6));
        assert_eq!(move_to_long_algebraic(castle).as_deref(), Ok("e1g1"));

        let promo = Move::with_promotion(Square::new(6, 3), Square::new(7, 3), PieceKind::Queen);
        assert_eq!(move_to_long_algebraic(promo).as_deref(), Ok("d2d1q"));
    }

    #[test]
    fn bad_promotion_letters_are_rejected() {
        assert!(matches!(
            long_algebraic_to_move("a7a8k"),
            Err(ChessErrors::InvalidAlgebraic(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("e2e4e"),
            Err(ChessErrors::InvalidAlgebraic(_))
        ));
        assert!(long_algebraic_to_move("e2").is_err());
        assert!(long_algebraic_to_move("é2e4").is_err());
    }
}
