// Mailbox board: one Option<Piece> per square, addressed by 1-based Position.
use std::fmt;

use log::trace;

mod piece;
mod position;

pub use piece::{Piece, PieceType, TeamColor};
pub use position::Position;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 grid holding at most one piece per square.
///
/// Equality and hashing compare every square, so two independently built boards with
/// the same placement are equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn new() -> Self { Self::default() }

    /// A board in the standard starting arrangement.
    pub fn standard() -> Self {
        let mut b = Self::new();
        b.reset_to_standard_setup();
        b
    }

    /// Puts `piece` on `position`, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, position: Position, piece: Piece) {
        self.squares[position.row_index()][position.col_index()] = Some(piece);
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.row_index()][position.col_index()]
    }

    /// Clears `position`, returning the previous occupant.
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        self.squares[position.row_index()][position.col_index()].take()
    }

    /// Writes the 32 pieces of the opening position onto rows 1, 2, 7 and 8.
    /// Rows 3 to 6 are not touched.
    pub fn reset_to_standard_setup(&mut self) {
        for color in [TeamColor::White, TeamColor::Black] {
            let back = (color.back_row() - 1) as usize;
            let pawns = (color.pawn_row() - 1) as usize;
            for (c, kind) in BACK_RANK.iter().enumerate() {
                self.squares[back][c] = Some(Piece::new(color, *kind));
                self.squares[pawns][c] = Some(Piece::new(color, PieceType::Pawn));
            }
        }
        trace!("board reset to standard setup");
    }

    /// Occupied squares in row-major order, a1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |p| self.piece_at(p).map(|pc| (p, pc)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rank 8 at the top, like a diagram from white's side.
        for row in self.squares.iter().rev() {
            for sq in row {
                let c = sq.map(Piece::to_char).unwrap_or('.');
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
