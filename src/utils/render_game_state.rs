//! Terminal-oriented Unicode board renderer.
//!
//! Produces the same picture the browser scene draws, with rank and file
//! labels, for the CLI and for debugging.

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            match board.get(Square::from_row_col(row, col)) {
                Some(piece) => out.push(piece.unicode()),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a status line.
pub fn render_game_state(game_state: &GameState) -> String {
    let status = match game_state.status {
        GameStatus::Ongoing => format!("{:?} to move", game_state.side_to_move),
        GameStatus::Check(color) => format!("{color:?} is in check"),
        GameStatus::Checkmate { winner } => format!("Checkmate, {winner:?} wins"),
        GameStatus::Stalemate => "Stalemate".to_owned(),
    };
    format!("{}\n{}", render_board(&game_state.board), status)
}
