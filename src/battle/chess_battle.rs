//! The engine boundary consumed by the rendering layer.
//!
//! `ChessBattle` owns the single `GameState` and hands out read-only views.
//! Every mutating request is accepted atomically or rejected with the state
//! untouched. Engine turns are issued as [`EngineTicket`]s: the caller waits
//! out the ticket's delay and then plays it. Reset, undo-blocking, config
//! changes and cancellation make outstanding tickets stale, so a delayed
//! selection can never land on a game that has moved on.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::battle::battle_config::BattleConfig;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult, UndoBlock};
use crate::execution::move_executor::{begin_move, complete_move, MoveProgress, PromotionPolicy};
use crate::game_state::chess_types::*;
use crate::history::move_history::{undo_full_turn, undo_last};
use crate::move_generation::legal_move_generator::legal_moves;

/// Permission for one engine move, valid until the game moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineTicket {
    generation: u64,
    delay: Duration,
}

impl EngineTicket {
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Completed {
        status: GameStatus,
        /// Issued when the engine is due to reply.
        engine_ticket: Option<EngineTicket>,
    },
    AwaitingPromotionChoice {
        square: Square,
    },
}

pub struct ChessBattle<E = RandomEngine> {
    game: GameState,
    config: BattleConfig,
    engine: E,
    generation: u64,
    outstanding_ticket: Option<u64>,
}

impl ChessBattle<RandomEngine> {
    pub fn new(config: BattleConfig) -> Self {
        Self::with_engine(config, RandomEngine::new())
    }
}

impl Default for ChessBattle<RandomEngine> {
    fn default() -> Self {
        Self::new(BattleConfig::default())
    }
}

impl<E: Engine> ChessBattle<E> {
    pub fn with_engine(config: BattleConfig, engine: E) -> Self {
        Self::from_game_state(config, engine, GameState::new_game())
    }

    /// Starts from an arbitrary position. No ticket is issued; call
    /// [`request_engine_move`](Self::request_engine_move) if the engine is to move.
    pub fn from_game_state(config: BattleConfig, engine: E, game: GameState) -> Self {
        Self {
            game,
            config,
            engine,
            generation: 0,
            outstanding_ticket: None,
        }
    }

    /// Standard starting position, empty history. Returns a ticket when the
    /// engine plays White.
    pub fn reset(&mut self) -> Option<EngineTicket> {
        self.game = GameState::new_game();
        self.outstanding_ticket = None;
        info!(engine = self.engine.name(), config = ?self.config, "battle reset");
        self.schedule_engine_if_due()
    }

    pub fn legal_moves(&self, square: Square) -> Vec<Move> {
        legal_moves(&self.game, square)
    }

    /// Human move submission. `mv` must come from [`legal_moves`](Self::legal_moves).
    pub fn submit_move(&mut self, mv: Move) -> ChessResult<MoveOutcome> {
        self.ensure_accepting_moves()?;

        let side = self.game.side_to_move;
        if self.config.engine_controls(side) {
            return Err(ChessError::EngineControlled(side));
        }

        let piece = self
            .game
            .board
            .get(mv.from)
            .ok_or(ChessError::NoPieceAtSquare(mv.from))?;
        if piece.color != side {
            return Err(ChessError::NotSideToMove {
                square: mv.from,
                side_to_move: side,
            });
        }
        if !self.legal_moves(mv.from).contains(&mv) {
            warn!(mv = %mv, "rejected illegal move");
            return Err(ChessError::IllegalMoveRequested {
                from: mv.from,
                to: mv.to,
            });
        }

        self.execute(mv, PromotionPolicy::Suspend)
    }

    /// Finishes a move parked on a promotion choice.
    pub fn resolve_promotion(&mut self, choice: PromotionChoice) -> ChessResult<MoveOutcome> {
        let status = complete_move(&mut self.game, choice)?;
        Ok(self.completed(status))
    }

    pub fn undo(&mut self) -> ChessResult<MoveRecord> {
        self.ensure_undo_allowed()?;
        undo_last(&mut self.game)
    }

    /// Undoes both plies of the last full turn, or as many as exist.
    pub fn undo_full_turn(&mut self) -> ChessResult<usize> {
        self.ensure_undo_allowed()?;
        undo_full_turn(&mut self.game)
    }

    /// Issues a ticket when the engine's color is to move, e.g. after an undo.
    pub fn request_engine_move(&mut self) -> ChessResult<EngineTicket> {
        if self.game.promotion_pending() {
            return Err(ChessError::PromotionPending);
        }
        if self.game.status.is_over() {
            return Err(ChessError::GameOver(self.game.status));
        }
        if !self.config.engine_controls(self.game.side_to_move) {
            return Err(ChessError::NotEngineTurn);
        }
        Ok(self.issue_ticket())
    }

    /// Drops the outstanding ticket, if any.
    pub fn cancel_engine_move(&mut self) -> bool {
        let cancelled = self.outstanding_ticket.take().is_some();
        if cancelled {
            debug!("engine move cancelled");
        }
        cancelled
    }

    /// Runs the selector and plays its move. Engine promotions are queens.
    pub fn play_engine_move(&mut self, ticket: EngineTicket) -> ChessResult<MoveOutcome> {
        if self.outstanding_ticket != Some(ticket.generation) {
            warn!(generation = ticket.generation, "stale engine ticket");
            return Err(ChessError::StaleEngineTicket);
        }

        let color = self.game.side_to_move;
        let mv = self.engine.choose_move(&self.game, color)?;
        self.outstanding_ticket = None;
        debug!(engine = self.engine.name(), mv = %mv, "engine move");
        self.execute(mv, PromotionPolicy::Auto(PromotionChoice::Queen))
    }

    pub fn set_engine_side(&mut self, color: Color) -> Option<EngineTicket> {
        self.config.engine_side = color;
        self.config_changed()
    }

    pub fn set_engine_enabled(&mut self, enabled: bool) -> Option<EngineTicket> {
        self.config.engine_enabled = enabled;
        self.config_changed()
    }

    /// Named option update; see [`BattleConfig::set_option`].
    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<Option<EngineTicket>> {
        self.config.set_option(name, value)?;
        Ok(self.config_changed())
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn board(&self) -> &Board {
        &self.game.board
    }

    pub fn side_to_move(&self) -> Color {
        self.game.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.game.status
    }

    pub fn history(&self) -> &[MoveRecord] {
        self.game.history.as_slice()
    }

    pub fn move_list(&self) -> Vec<String> {
        self.game.history.move_list()
    }

    pub fn promotion_pending(&self) -> bool {
        self.game.promotion_pending()
    }

    pub fn engine_thinking(&self) -> bool {
        self.outstanding_ticket.is_some()
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    fn ensure_accepting_moves(&self) -> ChessResult<()> {
        if self.game.promotion_pending() {
            return Err(ChessError::PromotionPending);
        }
        if self.engine_thinking() {
            return Err(ChessError::EngineThinking);
        }
        if self.game.status.is_over() {
            return Err(ChessError::GameOver(self.game.status));
        }
        Ok(())
    }

    fn ensure_undo_allowed(&self) -> ChessResult<()> {
        if self.game.promotion_pending() {
            return Err(ChessError::UndoUnavailable(UndoBlock::PromotionPending));
        }
        if self.engine_thinking() {
            return Err(ChessError::UndoUnavailable(UndoBlock::EngineThinking));
        }
        Ok(())
    }

    fn execute(&mut self, mv: Move, policy: PromotionPolicy) -> ChessResult<MoveOutcome> {
        match begin_move(&mut self.game, mv, policy)? {
            MoveProgress::Completed(status) => Ok(self.completed(status)),
            MoveProgress::AwaitingPromotionChoice { square } => {
                Ok(MoveOutcome::AwaitingPromotionChoice { square })
            }
        }
    }

    fn completed(&mut self, status: GameStatus) -> MoveOutcome {
        MoveOutcome::Completed {
            status,
            engine_ticket: self.schedule_engine_if_due(),
        }
    }

    fn config_changed(&mut self) -> Option<EngineTicket> {
        self.outstanding_ticket = None;
        self.schedule_engine_if_due()
    }

    fn schedule_engine_if_due(&mut self) -> Option<EngineTicket> {
        let due = !self.game.promotion_pending()
            && !self.game.status.is_over()
            && self.config.engine_controls(self.game.side_to_move);
        due.then(|| self.issue_ticket())
    }

    fn issue_ticket(&mut self) -> EngineTicket {
        self.generation += 1;
        self.outstanding_ticket = Some(self.generation);
        EngineTicket {
            generation: self.generation,
            delay: self.config.engine_delay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_diagram::parse_diagram;
    use rand::rngs::StdRng;

    fn sq(name: &str) -> Square {
        name.parse().expect("valid square")
    }

    fn battle(config: BattleConfig) -> ChessBattle<RandomEngine<StdRng>> {
        ChessBattle::with_engine(config, RandomEngine::seeded(11))
    }

    fn find_move(battle: &ChessBattle<RandomEngine<StdRng>>, from: &str, to: &str) -> Move {
        battle
            .legal_moves(sq(from))
            .into_iter()
            .find(|m| m.to == sq(to))
            .expect("move should be legal")
    }

    fn ticket_of(outcome: MoveOutcome) -> Option<EngineTicket> {
        match outcome {
            MoveOutcome::Completed { engine_ticket, .. } => engine_ticket,
            MoveOutcome::AwaitingPromotionChoice { .. } => None,
        }
    }

    #[test]
    fn human_move_schedules_engine_reply() {
        let mut battle = battle(BattleConfig::default());
        let outcome = battle.submit_move(find_move(&battle, "e2", "e4")).unwrap();
        let ticket = ticket_of(outcome).expect("engine should be due");
        assert_eq!(ticket.delay(), Duration::from_millis(300));
        assert!(battle.engine_thinking());

        assert_eq!(
            battle.undo(),
            Err(ChessError::UndoUnavailable(UndoBlock::EngineThinking))
        );
        assert_eq!(
            battle.submit_move(find_move(&battle, "d2", "d4")),
            Err(ChessError::EngineThinking)
        );

        let reply = battle.play_engine_move(ticket).unwrap();
        assert_eq!(ticket_of(reply), None);
        assert!(!battle.engine_thinking());
        assert_eq!(battle.side_to_move(), Color::White);
        assert_eq!(battle.history().len(), 2);

        assert_eq!(battle.undo_full_turn(), Ok(2));
        assert_eq!(battle.game(), &GameState::new_game());
    }

    #[test]
    fn ticket_cannot_be_played_twice() {
        let mut battle = battle(BattleConfig::default());
        let ticket = ticket_of(battle.submit_move(find_move(&battle, "e2", "e4")).unwrap()).unwrap();
        battle.play_engine_move(ticket).unwrap();
        let snapshot = battle.game().clone();
        assert_eq!(battle.play_engine_move(ticket), Err(ChessError::StaleEngineTicket));
        assert_eq!(battle.game(), &snapshot);
    }

    #[test]
    fn reset_invalidates_outstanding_ticket() {
        let mut battle = battle(BattleConfig::default());
        let ticket = ticket_of(battle.submit_move(find_move(&battle, "e2", "e4")).unwrap()).unwrap();
        assert_eq!(battle.reset(), None);
        assert_eq!(battle.play_engine_move(ticket), Err(ChessError::StaleEngineTicket));
        assert_eq!(battle.game(), &GameState::new_game());
    }

    #[test]
    fn cancelled_ticket_is_stale_and_undo_is_allowed_again() {
        let mut battle = battle(BattleConfig::default());
        let ticket = ticket_of(battle.submit_move(find_move(&battle, "e2", "e4")).unwrap()).unwrap();
        assert!(battle.cancel_engine_move());
        assert!(!battle.cancel_engine_move());
        assert_eq!(battle.play_engine_move(ticket), Err(ChessError::StaleEngineTicket));
        battle.undo().unwrap();
        assert_eq!(battle.game(), &GameState::new_game());
    }

    #[test]
    fn engine_on_white_moves_first_after_reset() {
        let mut battle = battle(BattleConfig {
            engine_side: Color::White,
            ..BattleConfig::default()
        });
        let ticket = battle.reset().expect("engine opens");
        assert_eq!(
            battle.submit_move(find_move(&battle, "e2", "e4")),
            Err(ChessError::EngineThinking)
        );
        battle.play_engine_move(ticket).unwrap();
        assert_eq!(battle.side_to_move(), Color::Black);
    }

    #[test]
    fn engine_controlled_side_rejects_human_moves() {
        let mut battle = battle(BattleConfig::default());
        let ticket = ticket_of(battle.submit_move(find_move(&battle, "e2", "e4")).unwrap()).unwrap();
        battle.play_engine_move(ticket).unwrap();
        battle.undo().unwrap();
        // Black (engine) to move, no ticket outstanding.
        assert_eq!(
            battle.submit_move(find_move(&battle, "e7", "e5")),
            Err(ChessError::EngineControlled(Color::Black))
        );
        let ticket = battle.request_engine_move().unwrap();
        battle.play_engine_move(ticket).unwrap();
        assert_eq!(battle.request_engine_move(), Err(ChessError::NotEngineTurn));
    }

    #[test]
    fn invalid_submissions_leave_state_unchanged() {
        let mut battle = battle(BattleConfig::hot_seat());
        let before = battle.game().clone();

        assert_eq!(
            battle.submit_move(Move::normal(sq("e2"), sq("e5"))),
            Err(ChessError::IllegalMoveRequested {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert_eq!(
            battle.submit_move(Move::normal(sq("e7"), sq("e5"))),
            Err(ChessError::NotSideToMove {
                square: sq("e7"),
                side_to_move: Color::White
            })
        );
        assert_eq!(
            battle.submit_move(Move::normal(sq("e4"), sq("e5"))),
            Err(ChessError::NoPieceAtSquare(sq("e4")))
        );
        // Right squares, wrong flag.
        assert!(battle
            .submit_move(Move::normal(sq("e2"), sq("e4")))
            .is_err());
        assert_eq!(
            battle.undo(),
            Err(ChessError::UndoUnavailable(UndoBlock::EmptyHistory))
        );
        assert_eq!(battle.game(), &before);
    }

    #[test]
    fn human_promotion_suspends_until_resolved() {
        let board = parse_diagram(&[
            "........",
            "P......k",
            "........",
            "........",
            "........",
            "........",
            "........",
            "....K...",
        ])
        .unwrap();
        let game = GameState::from_board(board, Color::White, CastlingRights::NONE);
        let mut battle = ChessBattle::from_game_state(BattleConfig::default(), RandomEngine::seeded(5), game);

        let outcome = battle.submit_move(find_move(&battle, "a7", "a8")).unwrap();
        assert_eq!(outcome, MoveOutcome::AwaitingPromotionChoice { square: sq("a8") });
        assert!(battle.promotion_pending());
        assert!(!battle.engine_thinking());
        assert_eq!(battle.submit_move(find_move(&battle, "e1", "e2")), Err(ChessError::PromotionPending));
        assert_eq!(
            battle.undo_full_turn(),
            Err(ChessError::UndoUnavailable(UndoBlock::PromotionPending))
        );
        assert_eq!(battle.request_engine_move(), Err(ChessError::PromotionPending));

        let outcome = battle.resolve_promotion(PromotionChoice::Rook).unwrap();
        assert!(ticket_of(outcome).is_some());
        assert_eq!(
            battle.board().get(sq("a8")),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(battle.move_list(), vec!["1. ♙ a7→a8=♖"]);
    }

    #[test]
    fn engine_promotion_is_automatic_queen() {
        // a2xb1 is Black's only capture, so the selector must take it.
        let board = parse_diagram(&[
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "p.......",
            ".N....K.",
        ])
        .unwrap();
        let game = GameState::from_board(board, Color::Black, CastlingRights::NONE);
        let mut battle = ChessBattle::from_game_state(BattleConfig::default(), RandomEngine::seeded(9), game);
        let ticket = battle.request_engine_move().unwrap();
        let outcome = battle.play_engine_move(ticket).unwrap();
        assert!(matches!(outcome, MoveOutcome::Completed { engine_ticket: None, .. }));
        assert!(!battle.promotion_pending());

        let record = battle.history().last().unwrap();
        assert_eq!(record.promotion, Some(PieceKind::Queen));
        assert_eq!(record.captured, Some(Piece::new(Color::White, PieceKind::Knight)));
        assert_eq!(
            battle.board().get(sq("b1")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn checkmate_ends_game_and_blocks_further_moves() {
        let mut battle = battle(BattleConfig::hot_seat());
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
            battle.submit_move(find_move(&battle, from, to)).unwrap();
        }
        let outcome = battle.submit_move(find_move(&battle, "d8", "h4")).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Completed {
                status: GameStatus::Checkmate {
                    winner: Color::Black
                },
                engine_ticket: None
            }
        );
        assert_eq!(
            battle.submit_move(Move::normal(sq("e2"), sq("e3"))),
            Err(ChessError::GameOver(battle.status()))
        );
        assert_eq!(battle.request_engine_move(), Err(ChessError::GameOver(battle.status())));

        battle.undo().unwrap();
        assert_eq!(battle.status(), GameStatus::Ongoing);
        assert_eq!(battle.side_to_move(), Color::Black);
    }

    #[test]
    fn config_change_cancels_ticket() {
        let mut battle = battle(BattleConfig::default());
        let ticket = ticket_of(battle.submit_move(find_move(&battle, "e2", "e4")).unwrap()).unwrap();
        assert_eq!(battle.set_engine_enabled(false), None);
        assert!(!battle.engine_thinking());
        assert_eq!(battle.play_engine_move(ticket), Err(ChessError::StaleEngineTicket));

        // Re-enabling on the engine's turn issues a fresh ticket.
        let fresh = battle.set_engine_enabled(true).expect("engine due again");
        assert_ne!(fresh, ticket);
        battle.play_engine_move(fresh).unwrap();

        assert!(battle.set_option("EngineSide", "white").unwrap().is_some());
        assert_eq!(battle.config().engine_side, Color::White);
    }
}
