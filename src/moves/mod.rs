use std::fmt;

use log::trace;

use crate::board::{Board, Piece, PieceType, Position};
use crate::error::{BoardError, BoardResult};

pub mod table;
mod traverse;

/// A candidate move: origin, destination and an optional promotion piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChessMove {
    start: Position,
    end: Position,
    promotion: Option<PieceType>,
}

impl ChessMove {
    pub fn new(start: Position, end: Position, promotion: Option<PieceType>) -> Self { Self { start, end, promotion } }

    #[inline]
    pub fn start(&self) -> Position { self.start }
    #[inline]
    pub fn end(&self) -> Position { self.end }
    #[inline]
    pub fn promotion(&self) -> Option<PieceType> { self.promotion }
}

// UCI long algebraic, e.g. "e2e4" or "e7e8q".
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(p) = self.promotion { write!(f, "{}", p.to_char())?; }
        Ok(())
    }
}

/// Geometrically reachable moves for the piece on `position`.
///
/// Check, castling, en passant and turn order are left to the caller. Fails with
/// [`BoardError::EmptySquare`] if nothing stands on `position`.
pub fn piece_moves(board: &Board, position: Position) -> BoardResult<Vec<ChessMove>> {
    let piece = board.piece_at(position).ok_or(BoardError::EmptySquare(position))?;
    Ok(piece.piece_moves(board, position))
}

impl Piece {
    /// Moves this piece would have from `position` on `board`. The square itself is
    /// not read, so the piece need not actually be placed there.
    pub fn piece_moves(&self, board: &Board, position: Position) -> Vec<ChessMove> {
        let set = table::move_set(*self, position);
        let mut out = Vec::with_capacity(if set.repeatable { 28 } else { 8 });
        traverse::walk(board, position, *self, set, &mut out);
        trace!("{:?} {:?} on {}: {} moves", self.color(), self.kind(), position, out.len());
        out
    }
}
