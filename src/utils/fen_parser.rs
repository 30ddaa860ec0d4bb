//! FEN-to-GameState parser.
//!
//! FEN lists rank 8 first, which is row 0 of the board. The move counters
//! are validated but not stored. FEN has no per-piece move flags, so they
//! are inferred: a king or rook on its home square counts as unmoved only if
//! a castling right still needs it, a pawn on its starting row is unmoved,
//! and minor pieces and queens are unmoved while on their back rank.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state.board)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;
    halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("bad halfmove clock {halfmove_part:?}")))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("bad fullmove number {fullmove_part:?}")))?;

    infer_move_flags(&mut game_state.board, game_state.castling_rights);

    Ok(game_state)
}

fn parse_board(board_part: &str, board: &mut Board) -> ChessResult<()> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("bad empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("bad piece character '{ch}'")))?;
            if col >= 8 {
                return Err(invalid("rank has too many files"));
            }

            board.place(Square::new(row as u8, col as u8), piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("bad side to move {side_part:?}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.get_mut(Color::White).kingside = true,
            'Q' => rights.get_mut(Color::White).queenside = true,
            'k' => rights.get_mut(Color::Black).kingside = true,
            'q' => rights.get_mut(Color::Black).queenside = true,
            _ => return Err(invalid(&format!("bad castling character '{ch}'"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("bad en-passant square {en_passant_part:?}")))?;
    // Only ranks 3 and 6 can hold a skipped-over square.
    if square.row != 2 && square.row != 5 {
        return Err(invalid(&format!(
            "en-passant square {en_passant_part} is not on rank 3 or 6"
        )));
    }
    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_letter(ch).map(|kind| Piece::moved(kind, color))
}

fn infer_move_flags(board: &mut Board, rights: CastlingRights) {
    for (square, mut piece) in board.pieces().collect::<Vec<_>>() {
        let side_rights = rights.get(piece.color);
        let home = square.row == piece.color.back_rank();

        let unmoved = match piece.kind {
            PieceKind::Pawn => square.row == piece.color.pawn_start_row(),
            PieceKind::King => {
                home && square.col == KING_START_COL && (side_rights.kingside || side_rights.queenside)
            }
            PieceKind::Rook => {
                home && ((square.col == QUEENSIDE_ROOK_COL && side_rights.queenside)
                    || (square.col == KINGSIDE_ROOK_COL && side_rights.kingside))
            }
            _ => home,
        };

        piece.has_moved = !unmoved;
        board.place(square, piece);
    }
}

#[inline]
fn invalid(message: &str) -> ChessErrors {
    ChessErrors::InvalidFen(message.to_owned())
}
