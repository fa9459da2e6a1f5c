//! Append-only move log and exact undo.

use tracing::debug;

use crate::errors::{ChessError, ChessResult, UndoBlock};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{castle_rook_squares, en_passant_capture_square};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    #[inline]
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    #[inline]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Numbered move-list lines, oldest first.
    pub fn move_list(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| format!("{}. {}", i + 1, record))
            .collect()
    }
}

/// Pops the last record and reverses it exactly.
pub fn undo_last(game_state: &mut GameState) -> ChessResult<MoveRecord> {
    if game_state.promotion_pending() {
        return Err(ChessError::UndoUnavailable(UndoBlock::PromotionPending));
    }
    let record = game_state
        .history
        .pop()
        .ok_or(ChessError::UndoUnavailable(UndoBlock::EmptyHistory))?;

    let board = &mut game_state.board;
    let mv = record.mv;

    // Stored piece is the pre-promotion pawn when a promotion happened.
    board.set(mv.from, Some(record.piece));
    match mv.flag {
        MoveFlag::EnPassant => {
            board.set(mv.to, None);
            board.set(en_passant_capture_square(mv), record.captured);
        }
        MoveFlag::Castle(side) => {
            board.set(mv.to, None);
            let (rook_from, rook_to) = castle_rook_squares(record.piece.color, side);
            let rook = board.take(rook_to);
            board.set(rook_from, rook);
        }
        MoveFlag::Normal | MoveFlag::DoublePawnPush => {
            board.set(mv.to, record.captured);
        }
    }

    game_state.castling_rights = record.prev_castling_rights;
    game_state.last_move = record.prev_last_move;
    game_state.status = record.prev_status;
    game_state.side_to_move = record.piece.color;

    debug!(record = %record, remaining = game_state.history.len(), "move undone");
    Ok(record)
}

/// Undoes up to two plies. Fails only when nothing at all could be undone.
pub fn undo_full_turn(game_state: &mut GameState) -> ChessResult<usize> {
    undo_last(game_state)?;
    match undo_last(game_state) {
        Ok(_) => Ok(2),
        Err(ChessError::UndoUnavailable(UndoBlock::EmptyHistory)) => Ok(1),
        Err(err) => Err(err),
    }
}
