//! Letter-diagram setup for positions other than the standard start.
//!
//! A diagram is eight rows of eight characters, Black's back rank first.
//! Upper-case letters are White, lower-case Black, `.` is empty.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Board, Piece, Square};

pub fn parse_diagram(rows: &[&str]) -> ChessResult<Board> {
    if rows.len() != 8 {
        return Err(ChessError::InvalidDiagram(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().collect();
        if cells.len() != 8 {
            return Err(ChessError::InvalidDiagram(format!(
                "row {row} has {} cells",
                cells.len()
            )));
        }

        for (col, ch) in cells.into_iter().enumerate() {
            if ch == '.' {
                continue;
            }
            let piece = Piece::from_letter(ch)
                .ok_or_else(|| ChessError::InvalidDiagram(format!("unknown piece letter '{ch}'")))?;
            board.set(Square::from_row_col(row as u8, col as u8), Some(piece));
        }
    }

    Ok(board)
}

/// Inverse of [`parse_diagram`].
pub fn to_diagram(board: &Board) -> Vec<String> {
    (0..8u8)
        .map(|row| {
            (0..8u8)
                .map(|col| {
                    board
                        .get(Square::from_row_col(row, col))
                        .map_or('.', Piece::letter)
                })
                .collect()
        })
        .collect()
}
