use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step_targets;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    push_step_targets(board, from, knight_attacks(from), color, out);
}
