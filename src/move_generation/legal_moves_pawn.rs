use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::square_sets::squares_in;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let direction = color.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty_at(one_step) {
            out.push(Move::normal(from, one_step));

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(direction, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(Move::new(from, two_step, MoveFlag::DoublePawnPush));
                    }
                }
            }
        }
    }

    // Diagonal captures only onto enemy-occupied squares.
    for to in squares_in(pawn_attacks(color, from)) {
        if board.color_at(to) == Some(color.opposite()) {
            out.push(Move::normal(from, to));
        }
    }

    if let Some(to) = en_passant_target(game_state, from, color) {
        out.push(Move::new(from, to, MoveFlag::EnPassant));
    }
}

/// Destination of an en-passant capture for the pawn on `from`, if the last
/// move was an enemy double push landing beside it.
pub fn en_passant_target(game_state: &GameState, from: Square, color: Color) -> Option<Square> {
    let last = game_state.last_move?;
    if !last.is_double_pawn_push() {
        return None;
    }

    let landed = last.to;
    if game_state.board.get(landed) != Some(Piece::new(color.opposite(), PieceKind::Pawn)) {
        return None;
    }
    if landed.row() != from.row() || landed.col().abs_diff(from.col()) != 1 {
        return None;
    }

    let d_col = landed.col() as i8 - from.col() as i8;
    from.offset(color.pawn_direction(), d_col)
        .filter(|target| game_state.board.is_empty_at(*target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_diagram::parse_diagram;

    fn sq(name: &str) -> Square {
        name.parse().expect("valid square")
    }

    fn pawn_moves(game: &GameState, from: &str) -> Vec<Move> {
        let from = sq(from);
        let color = game.board.color_at(from).expect("pawn present");
        let mut out = Vec::new();
        generate_pawn_moves(game, from, color, &mut out);
        out
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        let moves = pawn_moves(&game, "e2");
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::normal(sq("e2"), sq("e3"))));
        assert!(moves.contains(&Move::new(sq("e2"), sq("e4"), MoveFlag::DoublePawnPush)));
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = parse_diagram(&[
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "....n...",
            "....P...",
            "....K...",
        ])
        .unwrap();
        let game = GameState::from_board(board, Color::White, CastlingRights::NONE);
        assert!(pawn_moves(&game, "e2").is_empty());
    }

    #[test]
    fn pawn_captures_only_enemies_diagonally() {
        let board = parse_diagram(&[
            "....k...",
            "........",
            "........",
            "...p.N..",
            "....P...",
            "........",
            "........",
            "....K...",
        ])
        .unwrap();
        let game = GameState::from_board(board, Color::White, CastlingRights::NONE);
        let moves = pawn_moves(&game, "e4");
        assert!(moves.contains(&Move::normal(sq("e4"), sq("d5"))));
        assert!(!moves.iter().any(|m| m.to == sq("f5")));
        assert!(moves.contains(&Move::normal(sq("e4"), sq("e5"))));
    }

    #[test]
    fn en_passant_requires_adjacent_double_push() {
        let board = parse_diagram(&[
            "....k...",
            "........",
            "........",
            "...pP...",
            "........",
            "........",
            "........",
            "....K...",
        ])
        .unwrap();
        let mut game = GameState::from_board(board, Color::White, CastlingRights::NONE);

        game.last_move = Some(Move::new(sq("d7"), sq("d5"), MoveFlag::DoublePawnPush));
        assert_eq!(en_passant_target(&game, sq("e5"), Color::White), Some(sq("d6")));

        game.last_move = Some(Move::normal(sq("d6"), sq("d5")));
        assert_eq!(en_passant_target(&game, sq("e5"), Color::White), None);
    }
}
