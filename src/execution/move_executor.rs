//! Move execution as a two-phase operation.
//!
//! `begin_move` relocates pieces and either finalizes the move or parks it as
//! a pending promotion; `complete_move` resumes a parked move once the
//! promotion choice arrives. Finalizing updates castling rights, the last
//! move, history, side to move and status.
//!
//! Moves are not re-validated here. Callers submit moves produced by the
//! generator for the current position.

use tracing::{debug, info};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::rook_home_wing;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::evaluate_status;

/// How a pawn reaching its last row is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionPolicy {
    /// Park the move until [`complete_move`] supplies a choice.
    Suspend,
    /// Promote immediately.
    Auto(PromotionChoice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveProgress {
    Completed(GameStatus),
    AwaitingPromotionChoice { square: Square },
}

pub fn begin_move(game_state: &mut GameState, mv: Move, policy: PromotionPolicy) -> ChessResult<MoveProgress> {
    if game_state.promotion_pending() {
        return Err(ChessError::PromotionPending);
    }

    let prev_castling_rights = game_state.castling_rights;
    let prev_last_move = game_state.last_move;
    let prev_status = game_state.status;

    let applied = apply_move_to_board(&mut game_state.board, mv)?;
    let record = MoveRecord {
        piece: applied.moved,
        mv,
        captured: applied.captured,
        promotion: None,
        prev_castling_rights,
        prev_last_move,
        prev_status,
    };

    let reaches_last_row =
        applied.moved.kind == PieceKind::Pawn && mv.to.row() == applied.moved.color.promotion_row();
    if !reaches_last_row {
        return Ok(MoveProgress::Completed(finalize_move(game_state, record, None)));
    }

    match policy {
        PromotionPolicy::Auto(choice) => Ok(MoveProgress::Completed(finalize_move(
            game_state,
            record,
            Some(choice),
        ))),
        PromotionPolicy::Suspend => {
            debug!(mv = %mv, "promotion pending");
            game_state.pending_promotion = Some(record);
            Ok(MoveProgress::AwaitingPromotionChoice { square: mv.to })
        }
    }
}

/// Resumes the parked move with the chosen promotion piece.
pub fn complete_move(game_state: &mut GameState, choice: PromotionChoice) -> ChessResult<GameStatus> {
    let record = game_state
        .pending_promotion
        .take()
        .ok_or(ChessError::PromotionNotPending)?;
    Ok(finalize_move(game_state, record, Some(choice)))
}

fn finalize_move(game_state: &mut GameState, mut record: MoveRecord, promotion: Option<PromotionChoice>) -> GameStatus {
    let mover = record.piece.color;
    let mv = record.mv;

    if let Some(choice) = promotion {
        // Only the kind at the destination changes.
        game_state
            .board
            .set(mv.to, Some(Piece::new(mover, choice.kind())));
        record.promotion = Some(choice.kind());
    }

    update_castling_rights(&mut game_state.castling_rights, &record);

    game_state.last_move = Some(mv);
    debug!(
        record = %record,
        captured = ?record.captured.map(|p| p.kind),
        "move executed"
    );
    game_state.history.push(record);
    game_state.side_to_move = mover.opposite();

    let status = evaluate_status(game_state);
    game_state.status = status;
    if status.is_over() {
        info!(status = ?status, plies = game_state.history.len(), "game over");
    }
    status
}

fn update_castling_rights(rights: &mut CastlingRights, record: &MoveRecord) {
    let mover = record.piece.color;

    if record.piece.kind == PieceKind::King {
        rights.revoke_all(mover);
    }

    // A piece leaving a rook home square means that rook has moved.
    if let Some((color, side)) = rook_home_wing(record.from()) {
        if color == mover {
            rights.revoke(color, side);
        }
    }

    // Capturing on a rook home square removes the defender's right there.
    if record.captured.is_some() {
        if let Some((color, side)) = rook_home_wing(record.to()) {
            rights.revoke(color, side);
        }
    }
}
