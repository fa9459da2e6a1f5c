use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::sliding_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    push_sliding_moves(board, from, color, &ROOK_DIRECTIONS, out);
}
