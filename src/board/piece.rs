use std::ops::Not;

use log::debug;

use crate::error::{BoardError, BoardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TeamColor {
    White,
    Black,
}

impl TeamColor {
    /// Row delta a pawn of this side advances by.
    #[inline]
    pub fn forward(self) -> i8 {
        match self { TeamColor::White => 1, TeamColor::Black => -1 }
    }

    #[inline]
    pub fn back_row(self) -> u8 {
        match self { TeamColor::White => 1, TeamColor::Black => 8 }
    }

    #[inline]
    pub fn pawn_row(self) -> u8 {
        match self { TeamColor::White => 2, TeamColor::Black => 7 }
    }
}

impl Not for TeamColor {
    type Output = TeamColor;

    fn not(self) -> TeamColor {
        match self { TeamColor::White => TeamColor::Black, TeamColor::Black => TeamColor::White }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] =
        [PieceType::King, PieceType::Queen, PieceType::Bishop, PieceType::Knight, PieceType::Rook, PieceType::Pawn];

    /// Lowercase FEN letter.
    pub fn to_char(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        }
    }

    pub fn from_char(c: char) -> BoardResult<Self> {
        match c.to_ascii_lowercase() {
            'k' => Ok(PieceType::King),
            'q' => Ok(PieceType::Queen),
            'b' => Ok(PieceType::Bishop),
            'n' => Ok(PieceType::Knight),
            'r' => Ok(PieceType::Rook),
            'p' => Ok(PieceType::Pawn),
            _ => {
                debug!("rejected piece letter {c:?}");
                Err(BoardError::InvalidPiece(c))
            }
        }
    }
}

/// A piece is just its side and kind; two pieces with the same pair are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    color: TeamColor,
    kind: PieceType,
}

impl Piece {
    pub const fn new(color: TeamColor, kind: PieceType) -> Self { Self { color, kind } }

    #[inline]
    pub fn color(self) -> TeamColor { self.color }
    #[inline]
    pub fn kind(self) -> PieceType { self.kind }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        if self.color == TeamColor::White { c.to_ascii_uppercase() } else { c }
    }

    pub fn from_char(c: char) -> BoardResult<Self> {
        let kind = PieceType::from_char(c)?;
        let color = if c.is_ascii_uppercase() { TeamColor::White } else { TeamColor::Black };
        Ok(Self { color, kind })
    }
}
