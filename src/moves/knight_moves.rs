//! Knight jump tables, generated at compile time.

use crate::game_state::chess_types::Square;
use crate::moves::square_sets::bit_if_on_board;

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        let mut i = 0;
        while i < KNIGHT_OFFSETS.len() {
            let (d_row, d_col) = KNIGHT_OFFSETS[i];
            attacks |= bit_if_on_board(row + d_row, col + d_col);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
