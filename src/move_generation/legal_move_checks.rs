//! Attack detection and game-end evaluation.
//!
//! Attack queries take a `Board` rather than a `GameState` so they run equally
//! on the live board and on simulated copies.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::sliding_moves::{first_blocker, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::moves::square_sets::squares_in;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// Whether any `attacker` piece attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let holds = |sq: Square, kinds: &[PieceKind]| {
        board
            .get(sq)
            .is_some_and(|piece| piece.color == attacker && kinds.contains(&piece.kind))
    };

    // A pawn of `attacker` hits `square` from where an opposite pawn on
    // `square` would capture.
    if squares_in(pawn_attacks(attacker.opposite(), square)).any(|sq| holds(sq, &[PieceKind::Pawn])) {
        return true;
    }
    if squares_in(knight_attacks(square)).any(|sq| holds(sq, &[PieceKind::Knight])) {
        return true;
    }
    if squares_in(king_attacks(square)).any(|sq| holds(sq, &[PieceKind::King])) {
        return true;
    }

    let diagonal = [PieceKind::Bishop, PieceKind::Queen];
    if BISHOP_DIRECTIONS
        .iter()
        .filter_map(|&dir| first_blocker(board, square, dir))
        .any(|sq| holds(sq, &diagonal))
    {
        return true;
    }

    let straight = [PieceKind::Rook, PieceKind::Queen];
    ROOK_DIRECTIONS
        .iter()
        .filter_map(|&dir| first_blocker(board, square, dir))
        .any(|sq| holds(sq, &straight))
}

/// Whether `color`'s king is attacked on `board`. A board without that king
/// is never in check.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Short-circuits on the first friendly piece with a legal move.
pub fn has_any_legal_moves(game_state: &GameState, color: Color) -> bool {
    game_state
        .board
        .pieces(color)
        .any(|(square, _)| !legal_moves(game_state, square).is_empty())
}

pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    is_in_check(&game_state.board, color) && !has_any_legal_moves(game_state, color)
}

pub fn is_stalemate(game_state: &GameState, color: Color) -> bool {
    !is_in_check(&game_state.board, color) && !has_any_legal_moves(game_state, color)
}

/// Status for the side about to move.
pub fn evaluate_status(game_state: &GameState) -> GameStatus {
    let color = game_state.side_to_move;
    let in_check = is_in_check(&game_state.board, color);
    let can_move = has_any_legal_moves(game_state, color);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate {
            winner: color.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check(color),
        (false, true) => GameStatus::Ongoing,
    }
}
