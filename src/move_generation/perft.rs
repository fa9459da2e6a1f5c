//! Perft node counting over the full make/undo cycle.
//!
//! Each move is played with the executor and reverted with the history
//! manager, so the counts validate generation, execution and undo together.
//! Pawn moves onto the last row expand into all four promotion choices.

use crate::errors::ChessResult;
use crate::execution::move_executor::{begin_move, PromotionPolicy};
use crate::game_state::chess_types::*;
use crate::history::move_history::undo_last;
use crate::move_generation::legal_move_generator::legal_moves_for_color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut scratch = game_state.clone();
    perft_recurse(&mut scratch, depth)
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    let moves = legal_moves_for_color(game_state, game_state.side_to_move);

    for mv in moves {
        for promotion in promotion_variants(game_state, mv) {
            begin_move(game_state, mv, PromotionPolicy::Auto(*promotion))?;

            if depth == 1 {
                let record = game_state.history.last().cloned();
                total.nodes += 1;
                if let Some(record) = record {
                    total.captures += usize::from(record.is_capture());
                    total.en_passant += usize::from(record.is_en_passant());
                    total.castles += usize::from(record.castle().is_some());
                    total.promotions += usize::from(record.promotion.is_some());
                }
            } else {
                total.merge(perft_recurse(game_state, depth - 1)?);
            }

            undo_last(game_state)?;
        }
    }

    Ok(total)
}

const EVERY_CHOICE: &[PromotionChoice] = &PromotionChoice::ALL;
const NO_CHOICE: &[PromotionChoice] = &[PromotionChoice::Queen];

fn promotion_variants(game_state: &GameState, mv: Move) -> &'static [PromotionChoice] {
    let promotes = game_state.board.get(mv.from).is_some_and(|piece| {
        piece.kind == PieceKind::Pawn && mv.to.row() == piece.color.promotion_row()
    });
    if promotes {
        EVERY_CHOICE
    } else {
        NO_CHOICE
    }
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::chess_types::*;
    use crate::utils::board_diagram::parse_diagram;

    #[test]
    fn start_position_perft_depth_three() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).unwrap().nodes, 20);
        assert_eq!(perft(&game, 2).unwrap().nodes, 400);
        let depth3 = perft(&game, 3).unwrap();
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
    }

    #[test]
    fn kiwipete_perft_depth_two() {
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

        let depth1 = perft(&game, 1).unwrap();
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft(&game, 2).unwrap();
        assert_eq!(depth2.nodes, 2039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
    }

    #[test]
    fn rook_endgame_perft_depth_three() {
        let board = parse_diagram(&[
            "........",
            "..p.....",
            "...p....",
            "KP.....r",
            ".R...p.k",
            "........",
            "....P.P.",
            "........",
        ])
        .unwrap();
        let game = GameState::from_board(board, Color::White, CastlingRights::NONE);
        assert_eq!(perft(&game, 1).unwrap().nodes, 14);
        assert_eq!(perft(&game, 2).unwrap().nodes, 191);
        assert_eq!(perft(&game, 3).unwrap().nodes, 2812);
    }

    #[test]
    fn promotion_expands_to_four_choices() {
        let board = parse_diagram(&[
            "........",
            "P.......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "k.K.....",
        ])
        .unwrap();
        let game = GameState::from_board(board, Color::White, CastlingRights::NONE);
        let counts = perft(&game, 1).unwrap();
        assert_eq!(counts.promotions, 4);
        // King c1 cannot step next to the a1 king.
        assert_eq!(counts.nodes, 4 + 3);
    }

    #[test]
    fn perft_leaves_source_state_untouched() {
        let game = GameState::new_game();
        let before = game.clone();
        perft(&game, 2).unwrap();
        assert_eq!(game, before);
    }
}
