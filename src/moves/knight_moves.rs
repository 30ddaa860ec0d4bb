use crate::game_state::chess_types::Square;
use crate::moves::move_geometry::{generate_offset_table, square_bit};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KNIGHT_TARGETS: [u64; 64] = generate_offset_table(&KNIGHT_OFFSETS);

#[inline]
pub const fn knight_targets(square: Square) -> u64 {
    KNIGHT_TARGETS[(square.row as usize) * 8 + square.col as usize]
}

/// Knight geometry: exactly a (2, 1) or (1, 2) jump.
#[inline]
pub fn knight_reaches(from: Square, to: Square) -> bool {
    from.in_bounds() && to.in_bounds() && knight_targets(from) & square_bit(to) != 0
}

#[cfg(test)]
mod tests {
    use super::{knight_reaches, knight_targets};
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_in_centre_has_eight_targets() {
        assert_eq!(knight_targets(Square::new(4, 3)).count_ones(), 8);
        assert_eq!(knight_targets(Square::new(0, 0)).count_ones(), 2);
    }

    #[test]
    fn knight_jumps_only_in_l_shapes() {
        let from = Square::new(7, 6);
        assert!(knight_reaches(from, Square::new(5, 5)));
        assert!(knight_reaches(from, Square::new(6, 4)));
        assert!(!knight_reaches(from, Square::new(5, 6)));
        assert!(!knight_reaches(from, Square::new(6, 7)));
    }
}
