use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{BoardError, BoardResult};

/// A square on the 8x8 board, 1-based: row 1 is white's back rank, column 1 is the a-file.
///
/// Only in-range positions can be constructed, so every `Position` is addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(row: u8, col: u8) -> BoardResult<Self> {
        if in_range(row as i32) && in_range(col as i32) {
            Ok(Self { row, col })
        } else {
            debug!("rejected position ({row}, {col})");
            Err(BoardError::OutOfRange { row: row as i32, col: col as i32 })
        }
    }

    #[inline]
    pub fn row(self) -> u8 { self.row }
    #[inline]
    pub fn col(self) -> u8 { self.col }

    // Zero-based indices into the board grid.
    #[inline]
    pub(crate) fn row_index(self) -> usize { (self.row - 1) as usize }
    #[inline]
    pub(crate) fn col_index(self) -> usize { (self.col - 1) as usize }

    /// The square `(dr, dc)` away, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i32 + dr as i32;
        let col = self.col as i32 + dc as i32;
        if in_range(row) && in_range(col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order, a1 first.
    pub fn all() -> impl Iterator<Item = Position> {
        (Self::MIN..=Self::MAX).flat_map(|row| (Self::MIN..=Self::MAX).map(move |col| Position { row, col }))
    }
}

#[inline]
fn in_range(v: i32) -> bool {
    (Position::MIN as i32..=Position::MAX as i32).contains(&v)
}

impl TryFrom<(u8, u8)> for Position {
    type Error = BoardError;

    fn try_from((row, col): (u8, u8)) -> BoardResult<Self> { Position::new(row, col) }
}

impl From<Position> for (u8, u8) {
    fn from(p: Position) -> Self { (p.row, p.col) }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col - 1) as char, self.row)
    }
}

impl FromStr for Position {
    type Err = BoardError;

    fn from_str(s: &str) -> BoardResult<Self> {
        let b = s.as_bytes();
        if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            debug!("rejected square name {s:?}");
            return Err(BoardError::InvalidSquare(s.to_string()));
        }
        Ok(Self { row: b[1] - b'0', col: b[0] - b'a' + 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_nine() {
        assert_eq!(Position::new(0, 4), Err(BoardError::OutOfRange { row: 0, col: 4 }));
        assert_eq!(Position::new(4, 9), Err(BoardError::OutOfRange { row: 4, col: 9 }));
        assert!(Position::new(8, 8).is_ok());
    }

    #[test]
    fn offset_stops_at_the_edge() {
        let h8 = Position::new(8, 8).unwrap();
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(h8.offset(-2, -1), Some(Position::new(6, 7).unwrap()));
    }

    #[test]
    fn algebraic_names() {
        let e2 = Position::new(2, 5).unwrap();
        assert_eq!(e2.to_string(), "e2");
        assert_eq!("e2".parse::<Position>().unwrap(), e2);
        assert_eq!("a1".parse::<Position>().unwrap(), Position::new(1, 1).unwrap());
        for bad in ["", "e", "e9", "i1", "E2", "e22"] {
            assert!(bad.parse::<Position>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn all_is_row_major() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0].to_string(), "a1");
        assert_eq!(all[8].to_string(), "a2");
        assert_eq!(all[63].to_string(), "h8");
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }
}
