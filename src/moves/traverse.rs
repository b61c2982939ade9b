use crate::board::{Board, Piece, Position};

use super::table::{CaptureRule, MoveSet};
use super::ChessMove;

/// Walks every direction of `set` from `from`, pushing reachable squares into `out`.
///
/// Any occupied square ends the walk along that direction; it is recorded only if it
/// holds an enemy piece and the direction may capture.
pub(crate) fn walk(board: &Board, from: Position, mover: Piece, set: MoveSet, out: &mut Vec<ChessMove>) {
    for dir in set.directions {
        let mut cur = from;
        let mut steps = 0u8;
        while let Some(target) = cur.offset(dir.dr, dir.dc) {
            steps += 1;
            match board.piece_at(target) {
                None => {
                    if dir.capture != CaptureRule::Required {
                        out.push(ChessMove::new(from, target, None));
                    }
                }
                Some(occupant) => {
                    if occupant.color() != mover.color() && dir.capture != CaptureRule::Forbidden {
                        out.push(ChessMove::new(from, target, None));
                    }
                    break;
                }
            }
            if !set.repeatable || dir.max_steps.is_some_and(|m| steps >= m) { break; }
            cur = target;
        }
    }
}
