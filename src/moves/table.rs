// Per-piece movement as data: a list of direction vectors plus whether they repeat.
use crate::board::{Piece, PieceType, Position, TeamColor};

/// What a direction may do when it reaches an occupied or empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRule {
    /// Move to empty squares or capture an enemy piece.
    Allowed,
    /// Only legal as a capture (pawn diagonals).
    Required,
    /// Only legal onto empty squares (pawn pushes).
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
    pub capture: CaptureRule,
    /// Upper bound on steps along this vector; `None` means until blocked.
    pub max_steps: Option<u8>,
}

impl Direction {
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc, capture: CaptureRule::Allowed, max_steps: None }
    }

    const fn pawn(dr: i8, dc: i8, capture: CaptureRule, max_steps: u8) -> Self {
        Self { dr, dc, capture, max_steps: Some(max_steps) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSet {
    pub directions: &'static [Direction],
    /// Slide along each direction until blocked (bounded by `max_steps`).
    pub repeatable: bool,
}

pub const ROOK_DIRS: [Direction; 4] =
    [Direction::new(1, 0), Direction::new(-1, 0), Direction::new(0, 1), Direction::new(0, -1)];

pub const BISHOP_DIRS: [Direction; 4] =
    [Direction::new(1, 1), Direction::new(-1, 1), Direction::new(1, -1), Direction::new(-1, -1)];

pub const QUEEN_DIRS: [Direction; 8] = [
    Direction::new(1, 1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(-1, -1),
    Direction::new(1, 0),
    Direction::new(-1, 0),
    Direction::new(0, 1),
    Direction::new(0, -1),
];

pub const KNIGHT_DIRS: [Direction; 8] = [
    Direction::new(2, 1),
    Direction::new(2, -1),
    Direction::new(-2, 1),
    Direction::new(-2, -1),
    Direction::new(1, 2),
    Direction::new(1, -2),
    Direction::new(-1, 2),
    Direction::new(-1, -2),
];

// Pawns: push (no capture) then the two capture diagonals. The *_HOME variants allow the double step.
const WHITE_PAWN_HOME: [Direction; 3] = [
    Direction::pawn(1, 0, CaptureRule::Forbidden, 2),
    Direction::pawn(1, 1, CaptureRule::Required, 1),
    Direction::pawn(1, -1, CaptureRule::Required, 1),
];
const WHITE_PAWN: [Direction; 3] = [
    Direction::pawn(1, 0, CaptureRule::Forbidden, 1),
    Direction::pawn(1, 1, CaptureRule::Required, 1),
    Direction::pawn(1, -1, CaptureRule::Required, 1),
];
const BLACK_PAWN_HOME: [Direction; 3] = [
    Direction::pawn(-1, 0, CaptureRule::Forbidden, 2),
    Direction::pawn(-1, 1, CaptureRule::Required, 1),
    Direction::pawn(-1, -1, CaptureRule::Required, 1),
];
const BLACK_PAWN: [Direction; 3] = [
    Direction::pawn(-1, 0, CaptureRule::Forbidden, 1),
    Direction::pawn(-1, 1, CaptureRule::Required, 1),
    Direction::pawn(-1, -1, CaptureRule::Required, 1),
];

/// Movement table for `piece` standing on `from`. Only pawns depend on the square.
pub fn move_set(piece: Piece, from: Position) -> MoveSet {
    match piece.kind() {
        PieceType::Rook => MoveSet { directions: &ROOK_DIRS, repeatable: true },
        PieceType::Bishop => MoveSet { directions: &BISHOP_DIRS, repeatable: true },
        PieceType::Queen => MoveSet { directions: &QUEEN_DIRS, repeatable: true },
        PieceType::King => MoveSet { directions: &QUEEN_DIRS, repeatable: false },
        PieceType::Knight => MoveSet { directions: &KNIGHT_DIRS, repeatable: false },
        PieceType::Pawn => {
            let home = from.row() == piece.color().pawn_row();
            let directions: &'static [Direction] = match (piece.color(), home) {
                (TeamColor::White, true) => &WHITE_PAWN_HOME,
                (TeamColor::White, false) => &WHITE_PAWN,
                (TeamColor::Black, true) => &BLACK_PAWN_HOME,
                (TeamColor::Black, false) => &BLACK_PAWN,
            };
            MoveSet { directions, repeatable: true }
        }
    }
}
