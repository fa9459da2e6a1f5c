//! Canonical chess-rule constants.
//!
//! Stores the standard starting layout (as a row-0-first diagram) and the
//! fixed squares castling depends on.

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Standard starting position, Black's back rank first.
pub const STARTING_DIAGRAM: [&str; 8] = [
    "rnbqkbnr",
    "pppppppp",
    "........",
    "........",
    "........",
    "........",
    "PPPPPPPP",
    "RNBQKBNR",
];

/// Column of both kings at the start.
pub const KING_HOME_COL: u8 = 4;

#[inline]
pub const fn king_home_square(color: Color) -> Square {
    Square::from_row_col(color.home_row(), KING_HOME_COL)
}

#[inline]
pub const fn rook_home_square(color: Color, side: CastleSide) -> Square {
    Square::from_row_col(color.home_row(), side.rook_home_col())
}

/// Wing whose rook starts on `square`, if any, for either color.
pub fn rook_home_wing(square: Square) -> Option<(Color, CastleSide)> {
    for color in [Color::White, Color::Black] {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if rook_home_square(color, side) == square {
                return Some((color, side));
            }
        }
    }
    None
}

/// Columns that must be empty between king and rook.
pub const fn castle_empty_cols(side: CastleSide) -> &'static [u8] {
    match side {
        CastleSide::KingSide => &[5, 6],
        CastleSide::QueenSide => &[1, 2, 3],
    }
}

/// Columns the king crosses or lands on; none may be attacked.
pub const fn castle_king_path_cols(side: CastleSide) -> &'static [u8] {
    match side {
        CastleSide::KingSide => &[5, 6],
        CastleSide::QueenSide => &[3, 2],
    }
}
