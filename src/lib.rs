// Chessboard model and per-piece pseudo-legal move generation
pub mod board;
pub mod error;
pub mod moves;

pub use board::{Board, Piece, PieceType, Position, TeamColor};
pub use error::{BoardError, BoardResult};
pub use moves::{piece_moves, ChessMove};
