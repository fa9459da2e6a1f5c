//! Ray directions and ray casting over the mailbox board.

use crate::game_state::chess_types::{Board, Square};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Squares reached from `from` along one direction, up to and including the
/// first occupied square. Callers decide whether that blocker is capturable.
pub fn trace_ray(board: &Board, from: Square, direction: (i8, i8)) -> impl Iterator<Item = Square> + '_ {
    let (d_row, d_col) = direction;
    let mut cursor = Some(from);
    let mut blocked = false;
    std::iter::from_fn(move || {
        if blocked {
            return None;
        }
        let next = cursor?.offset(d_row, d_col)?;
        cursor = Some(next);
        blocked = !board.is_empty_at(next);
        Some(next)
    })
}

/// First occupied square along `direction`, if any.
#[inline]
pub fn first_blocker(board: &Board, from: Square, direction: (i8, i8)) -> Option<Square> {
    trace_ray(board, from, direction).last().filter(|sq| !board.is_empty_at(*sq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn ray_stops_on_first_blocker() {
        let mut board = Board::empty();
        let a1: Square = "a1".parse().unwrap();
        board.set("a4".parse().unwrap(), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        let up: Vec<String> = trace_ray(&board, a1, (-1, 0)).map(|s| s.to_string()).collect();
        assert_eq!(up, vec!["a2", "a3", "a4"]);
        assert_eq!(first_blocker(&board, a1, (-1, 0)), Some("a4".parse().unwrap()));
        assert_eq!(first_blocker(&board, a1, (0, 1)), None);
    }

    #[test]
    fn ray_from_edge_is_empty() {
        let board = Board::empty();
        assert_eq!(trace_ray(&board, "h8".parse().unwrap(), (-1, 1)).count(), 0);
    }
}
