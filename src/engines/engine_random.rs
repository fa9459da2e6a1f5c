//! Capture-preferring random engine.
//!
//! Picks uniformly among capturing moves when any exist, otherwise uniformly
//! among all legal moves. No search and no evaluation.

use rand::prelude::IndexedRandom;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, GameState, Move};
use crate::move_generation::legal_move_generator::legal_moves_for_color;
use crate::move_generation::legal_move_shared::is_capture;

pub struct RandomEngine<R = ThreadRng> {
    rng: R,
}

impl RandomEngine<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine<StdRng> {
    /// Reproducible engine for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

/// Splits `moves` into the capturing subset.
pub fn capturing_moves(game_state: &GameState, moves: &[Move], color: Color) -> Vec<Move> {
    moves
        .iter()
        .copied()
        .filter(|mv| is_capture(&game_state.board, *mv, color))
        .collect()
}

impl<R: Rng> Engine for RandomEngine<R> {
    fn name(&self) -> &str {
        "Battle Chess Random"
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> ChessResult<Move> {
        let legal = legal_moves_for_color(game_state, color);
        if legal.is_empty() {
            return Err(ChessError::NoLegalMoveForSelector(color));
        }

        let captures = capturing_moves(game_state, &legal, color);
        trace!(legal = legal.len(), captures = captures.len(), ?color, "selecting move");

        let pool = if captures.is_empty() { &legal } else { &captures };
        pool.as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(ChessError::NoLegalMoveForSelector(color))
    }
}
