use crate::game_state::chess_rules::{
    castle_empty_cols, castle_king_path_cols, king_home_square, rook_home_square,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_targets;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    push_step_targets(&game_state.board, from, king_attacks(from), color, out);
    generate_castling_moves(game_state, from, color, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, color: Color, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let enemy = color.opposite();

    if king_from != king_home_square(color) {
        return;
    }
    // Cannot castle out of check.
    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    let row = color.home_row();
    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if !game_state.castling_rights.has(color, side) {
            continue;
        }
        if board.get(rook_home_square(color, side)) != Some(Piece::new(color, PieceKind::Rook)) {
            continue;
        }

        let between_empty = castle_empty_cols(side)
            .iter()
            .all(|&col| board.is_empty_at(Square::from_row_col(row, col)));
        if !between_empty {
            continue;
        }

        let path_safe = castle_king_path_cols(side)
            .iter()
            .all(|&col| !is_square_attacked(board, Square::from_row_col(row, col), enemy));
        if !path_safe {
            continue;
        }

        let to = Square::from_row_col(row, side.king_destination_col());
        out.push(Move::new(king_from, to, MoveFlag::Castle(side)));
    }
}
