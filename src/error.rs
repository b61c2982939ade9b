use crate::board::Position;

/// Errors raised by board addressing and move-generation queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position ({row}, {col}) is off the board; rows and columns run 1..=8")]
    OutOfRange { row: i32, col: i32 },

    #[error("no piece at {0}")]
    EmptySquare(Position),

    #[error("invalid square name: {0:?}")]
    InvalidSquare(String),

    #[error("invalid piece letter: {0:?}")]
    InvalidPiece(char),
}

pub type BoardResult<T> = Result<T, BoardError>;
