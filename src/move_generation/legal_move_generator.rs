//! Pseudo-legal generation per piece and the simulate-then-check filter.
//!
//! Every pseudo-legal move is applied to a board copy and dropped if the
//! mover's king is attacked afterwards. No pin shortcut exists.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Moves of the piece on `from` that obey its movement rules, ignoring
/// whether they expose its own king. Empty for an empty square.
pub fn pseudo_moves(game_state: &GameState, from: Square) -> Vec<Move> {
    let Some(piece) = game_state.board.get(from) else {
        return Vec::new();
    };

    let board = &game_state.board;
    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece.color, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => generate_king_moves(game_state, from, piece.color, &mut out),
    }
    out
}

/// Legal moves of the piece on `from`, whichever color it is.
pub fn legal_moves(game_state: &GameState, from: Square) -> Vec<Move> {
    let Some(piece) = game_state.board.get(from) else {
        return Vec::new();
    };

    pseudo_moves(game_state, from)
        .into_iter()
        .filter(|mv| leaves_king_safe(&game_state.board, *mv, piece.color))
        .collect()
}

/// Every legal move for `color`, grouped by origin square.
pub fn legal_moves_for_color(game_state: &GameState, color: Color) -> Vec<Move> {
    game_state
        .board
        .pieces(color)
        .flat_map(|(square, _)| legal_moves(game_state, square))
        .collect()
}

fn leaves_king_safe(board: &Board, mv: Move, mover: Color) -> bool {
    match simulate_move(board, mv) {
        Ok(next) => !is_in_check(&next, mover),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_diagram::parse_diagram;

    fn sq(name: &str) -> Square {
        name.parse().expect("valid square")
    }

    #[test]
    fn start_position_has_twenty_white_moves() {
        let game = GameState::new_game();
        let moves = legal_moves_for_color(&game, Color::White);
        assert_eq!(moves.len(), 20);
        let knight_moves = moves
            .iter()
            .filter(|m| game.board.get(m.from).map(|p| p.kind) == Some(PieceKind::Knight))
            .count();
        assert_eq!(knight_moves, 4);
        assert_eq!(legal_moves_for_color(&game, Color::Black).len(), 20);
    }

    #[test]
    fn black_has_twenty_replies_to_any_opening_move() {
        use crate::execution::move_executor::{begin_move, PromotionPolicy};

        let start = GameState::new_game();
        for (from, to) in [("e2", "e4"), ("a2", "a3"), ("g1", "f3"), ("b1", "a3"), ("h2", "h4")] {
            let mut game = start.clone();
            let mv = legal_moves(&game, sq(from))
                .into_iter()
                .find(|m| m.to == sq(to))
                .expect("opening move should be legal");
            begin_move(&mut game, mv, PromotionPolicy::Suspend).unwrap();
            assert_eq!(game.side_to_move, Color::Black);
            assert_eq!(
                legal_moves_for_color(&game, Color::Black).len(),
                20,
                "after {from}-{to}"
            );
        }
    }

    #[test]
    fn empty_square_has_no_moves() {
        let game = GameState::new_game();
        assert!(pseudo_moves(&game, sq("e4")).is_empty());
        assert!(legal_moves(&game, sq("e4")).is_empty());
    }

    #[test]
    fn pinned_piece_may_only_move_along_pin() {
        let board = parse_diagram(&[
            "....k...",
            "....r...",
            "........",
            "........",
            "........",
            "........",
            "....R...",
            "....K...",
        ])
        .unwrap();
        let game = GameState::from_board(board, Color::White, CastlingRights::NONE);
        let pseudo = pseudo_moves(&game, sq("e2"));
        let legal = legal_moves(&game, sq("e2"));
        assert!(pseudo.len() > legal.len());
        assert!(legal.iter().all(|m| m.to.col() == 4));
        assert!(legal.contains(&Move::normal(sq("e2"), sq("e7"))));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board = parse_diagram(&[
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "r.......",
            "....K...",
        ])
        .unwrap();
        let game = GameState::from_board(board, Color::White, CastlingRights::NONE);
        let legal = legal_moves(&game, sq("e1"));
        assert!(legal.iter().all(|m| m.to.row() == 7));
        assert_eq!(legal.len(), 2);
    }

    #[test]
    fn en_passant_exposing_king_is_filtered() {
        // Capturing d5 would clear the fifth rank between king and rook.
        let board = parse_diagram(&[
            "....k...",
            "........",
            "........",
            "K..pP..r",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        let mut game = GameState::from_board(board, Color::White, CastlingRights::NONE);
        game.last_move = Some(Move::new(sq("d7"), sq("d5"), MoveFlag::DoublePawnPush));
        assert!(pseudo_moves(&game, sq("e5")).iter().any(Move::is_en_passant));
        assert!(!legal_moves(&game, sq("e5")).iter().any(Move::is_en_passant));
    }

    #[test]
    fn legal_moves_never_leave_own_king_attacked() {
        let board = parse_diagram(&[
            "r...k..r",
            "p.ppqpb.",
            "bn..pnp.",
            "...PN...",
            ".p..P...",
            "..N..Q.p",
            "PPPBBPPP",
            "R...K..R",
        ])
        .unwrap();
        let game = GameState::from_board(board, Color::White, CastlingRights::ALL);
        for color in [Color::White, Color::Black] {
            for mv in legal_moves_for_color(&game, color) {
                let next = simulate_move(&game.board, mv).unwrap();
                assert!(!is_in_check(&next, color), "{mv} leaves {color:?} in check");
            }
        }
        assert_eq!(legal_moves_for_color(&game, Color::White).len(), 48);
    }
}
