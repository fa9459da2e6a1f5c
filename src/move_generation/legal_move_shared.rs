use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::trace_ray;
use crate::moves::square_sets::squares_in;

/// Pushes a move to `to` unless a friendly piece stands there.
#[inline]
pub fn push_if_not_friendly(board: &Board, from: Square, to: Square, color: Color, out: &mut Vec<Move>) {
    if board.color_at(to) != Some(color) {
        out.push(Move::normal(from, to));
    }
}

/// Pushes every target in a precomputed step mask (knight, king).
pub fn push_step_targets(board: &Board, from: Square, targets: u64, color: Color, out: &mut Vec<Move>) {
    for to in squares_in(targets) {
        push_if_not_friendly(board, from, to, color, out);
    }
}

/// Ray-casts each direction; an enemy blocker is included and ends the ray,
/// a friendly blocker is excluded.
pub fn push_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        for to in trace_ray(board, from, direction) {
            push_if_not_friendly(board, from, to, color, out);
        }
    }
}

/// A move captures when it lands on an enemy piece or takes en passant.
#[inline]
pub fn is_capture(board: &Board, mv: Move, mover: Color) -> bool {
    mv.is_en_passant() || board.color_at(mv.to) == Some(mover.opposite())
}
