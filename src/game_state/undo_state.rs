use std::fmt;

use crate::game_state::chess_types::*;

/// Single history entry. Enough to reverse one ply exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Piece as it stood on `from` (a pawn, even when it promoted).
    pub piece: Piece,
    pub mv: Move,
    /// Occupant removed by this move; the en-passant pawn included.
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,

    pub prev_castling_rights: CastlingRights,
    pub prev_last_move: Option<Move>,
    pub prev_status: GameStatus,
}

impl MoveRecord {
    #[inline]
    pub fn from(&self) -> Square {
        self.mv.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.mv.to
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.mv.is_en_passant()
    }

    #[inline]
    pub fn castle(&self) -> Option<CastleSide> {
        self.mv.castle()
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.piece.unicode(), self.mv)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", Piece::new(self.piece.color, kind).unicode())?;
        }
        Ok(())
    }
}
