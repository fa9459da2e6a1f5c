//! Move-selection abstraction used by the battle boundary.
//!
//! Engines pick synchronously from the legal moves of a given color. Scheduling
//! and delays belong to the caller.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, GameState, Move};

pub trait Engine {
    fn name(&self) -> &str;

    /// Returns a legal move for `color`, or
    /// [`ChessError::NoLegalMoveForSelector`](crate::errors::ChessError::NoLegalMoveForSelector)
    /// when `color` has none.
    fn choose_move(&mut self, game_state: &GameState, color: Color) -> ChessResult<Move>;
}
