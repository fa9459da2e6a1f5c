//! Crate root module declarations for the Battle Chess rules engine.
//!
//! This file exposes the subsystems behind the browser battle scene (game
//! state, attack tables, legal move generation, execution, history, the
//! random engine and the battle boundary) so the binary, benches and any
//! front end can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod sliding_moves;
    pub mod square_sets;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod execution {
    pub mod move_executor;
}

pub mod history {
    pub mod move_history;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod battle {
    pub mod battle_config;
    pub mod chess_battle;
}

pub mod utils {
    pub mod board_diagram;
    pub mod render_game_state;
}
