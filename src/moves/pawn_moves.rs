//! Pawn capture tables. White pawns advance towards row 0.

use crate::game_state::chess_types::{Color, Square};
use crate::moves::square_sets::bit_if_on_board;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);

/// Squares a `color` pawn standing on `square` attacks.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

const fn generate_pawn_attacks(direction: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;

        table[sq] = bit_if_on_board(row + direction, col - 1) | bit_if_on_board(row + direction, col + 1);
        sq += 1;
    }

    table
}
