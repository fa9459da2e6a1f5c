use crate::game_state::chess_types::Square;

/// Iterates the squares of a 64-bit occupancy mask, lowest index first.
#[inline]
pub fn squares_in(mask: u64) -> impl Iterator<Item = Square> {
    let mut remaining = mask;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let index = remaining.trailing_zeros() as u8;
        remaining &= remaining - 1;
        Square::from_index(index)
    })
}

/// Bit for `(row, col)`, or 0 when off the board.
pub(crate) const fn bit_if_on_board(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }
    1u64 << ((row as usize) * 8 + (col as usize))
}
