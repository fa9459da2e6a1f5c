//! Board-level move application.
//!
//! Relocates pieces for every move category. Used both on the live board by
//! the executor and on board copies by the legality filter.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::rook_home_square;
use crate::game_state::chess_types::*;

/// What the board mutation moved and removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub moved: Piece,
    pub captured: Option<Piece>,
}

pub fn apply_move_to_board(board: &mut Board, mv: Move) -> ChessResult<AppliedMove> {
    let moved = board.get(mv.from).ok_or(ChessError::NoPieceAtSquare(mv.from))?;

    // Captured occupant is read before anything is overwritten.
    let captured = match mv.flag {
        MoveFlag::EnPassant => board.take(en_passant_capture_square(mv)),
        _ => board.get(mv.to),
    };

    board.set(mv.from, None);
    board.set(mv.to, Some(moved));

    if let MoveFlag::Castle(side) = mv.flag {
        let (rook_from, rook_to) = castle_rook_squares(moved.color, side);
        let rook = board.take(rook_from);
        board.set(rook_to, rook);
    }

    Ok(AppliedMove { moved, captured })
}

/// Copy of `board` with `mv` applied.
#[inline]
pub fn simulate_move(board: &Board, mv: Move) -> ChessResult<Board> {
    let mut next = *board;
    apply_move_to_board(&mut next, mv)?;
    Ok(next)
}

/// Square of the pawn removed by an en-passant capture: same row as the
/// capturing pawn's origin, column of its destination.
#[inline]
pub const fn en_passant_capture_square(mv: Move) -> Square {
    Square::from_row_col(mv.from.row(), mv.to.col())
}

/// Rook origin and destination for a castle.
#[inline]
pub const fn castle_rook_squares(color: Color, side: CastleSide) -> (Square, Square) {
    (
        rook_home_square(color, side),
        Square::from_row_col(color.home_row(), side.rook_destination_col()),
    )
}
