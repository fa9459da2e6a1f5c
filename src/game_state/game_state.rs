//! Mailbox board and the owned game state.
//!
//! `Board` is a flat 64-cell array and is `Copy`, so legality checks clone it
//! freely. `GameState` adds side to move, castling rights, the last move (for
//! en passant), status, a pending promotion and the move history.

use crate::game_state::chess_types::*;
use crate::history::move_history::MoveHistory;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.set(Square::from_row_col(0, col), Some(Piece::new(Color::Black, *kind)));
            board.set(Square::from_row_col(1, col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            board.set(Square::from_row_col(6, col), Some(Piece::new(Color::White, PieceKind::Pawn)));
            board.set(Square::from_row_col(7, col), Some(Piece::new(Color::White, *kind)));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.index()] = piece;
    }

    /// Clears `square`, returning what stood there.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Occupied squares of `color`, scanning from a8 to h1.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.get(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|square| self.get(*square) == Some(king))
    }
}

/// Single owned game instance. The boundary hands out shared references only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub last_move: Option<Move>,
    pub status: GameStatus,
    /// Move whose promotion choice is outstanding. Board already shows the
    /// pawn on its destination.
    pub pending_promotion: Option<MoveRecord>,
    pub history: MoveHistory,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new_game() -> Self {
        Self::from_board(Board::standard(), Color::White, CastlingRights::ALL)
    }

    /// Wraps an arbitrary position. Status is evaluated for `side_to_move`.
    pub fn from_board(board: Board, side_to_move: Color, castling_rights: CastlingRights) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            castling_rights,
            last_move: None,
            status: GameStatus::Ongoing,
            pending_promotion: None,
            history: MoveHistory::default(),
        };
        state.status = crate::move_generation::legal_move_checks::evaluate_status(&state);
        state
    }

    #[inline]
    pub fn promotion_pending(&self) -> bool {
        self.pending_promotion.is_some()
    }
}
