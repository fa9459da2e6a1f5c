use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::sliding_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    push_sliding_moves(board, from, color, &BISHOP_DIRECTIONS, out);
}
