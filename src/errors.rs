//! Error taxonomy for the chess battle engine.
//!
//! Every rejecting operation returns one of these and leaves the game state
//! exactly as it was before the call.

use thiserror::Error;

use crate::game_state::chess_types::{Color, GameStatus, Square};

/// Why an undo request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoBlock {
    EmptyHistory,
    PromotionPending,
    EngineThinking,
}

impl std::fmt::Display for UndoBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UndoBlock::EmptyHistory => write!(f, "move history is empty"),
            UndoBlock::PromotionPending => write!(f, "a promotion choice is pending"),
            UndoBlock::EngineThinking => write!(f, "the engine is choosing a move"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Destination is not in the legal set for the given origin.
    #[error("illegal move requested: {from} to {to}")]
    IllegalMoveRequested { from: Square, to: Square },

    #[error("no piece at square {0}")]
    NoPieceAtSquare(Square),

    #[error("piece at {square} does not belong to the side to move ({side_to_move:?})")]
    NotSideToMove { square: Square, side_to_move: Color },

    #[error("undo unavailable: {0}")]
    UndoUnavailable(UndoBlock),

    #[error("a promotion choice must be resolved first")]
    PromotionPending,

    #[error("no promotion is pending")]
    PromotionNotPending,

    /// The selector was asked to move for a side with no legal moves.
    #[error("no legal move available for {0:?}")]
    NoLegalMoveForSelector(Color),

    #[error("game is over: {0:?}")]
    GameOver(GameStatus),

    /// A move was submitted while an engine ticket is outstanding.
    #[error("the engine is choosing a move")]
    EngineThinking,

    #[error("{0:?} is controlled by the engine")]
    EngineControlled(Color),

    #[error("it is not the engine's turn")]
    NotEngineTurn,

    #[error("engine ticket is stale")]
    StaleEngineTicket,

    #[error("invalid square name: {0:?}")]
    InvalidSquare(String),

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for option {name}")]
    InvalidOptionValue { name: String, value: String },
}

pub type ChessResult<T> = Result<T, ChessError>;
