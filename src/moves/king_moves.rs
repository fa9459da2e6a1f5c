//! King step tables, generated at compile time.

use crate::game_state::chess_types::Square;
use crate::moves::square_sets::bit_if_on_board;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index()]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        attacks |= bit_if_on_board(row - 1, col - 1);
        attacks |= bit_if_on_board(row - 1, col);
        attacks |= bit_if_on_board(row - 1, col + 1);
        attacks |= bit_if_on_board(row, col - 1);
        attacks |= bit_if_on_board(row, col + 1);
        attacks |= bit_if_on_board(row + 1, col - 1);
        attacks |= bit_if_on_board(row + 1, col);
        attacks |= bit_if_on_board(row + 1, col + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::king_attacks;

    #[test]
    fn king_attacks_count_by_region() {
        assert_eq!(king_attacks("e4".parse().unwrap()).count_ones(), 8);
        assert_eq!(king_attacks("e1".parse().unwrap()).count_ones(), 5);
        assert_eq!(king_attacks("h8".parse().unwrap()).count_ones(), 3);
    }
}
