use piecemoves::{piece_moves, Board, ChessMove, Piece, PieceType, Position, TeamColor};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn sq(s: &str) -> Position { s.parse().expect("valid square") }

fn squares(names: &[&str]) -> BTreeSet<Position> { names.iter().map(|s| sq(s)).collect() }

fn ends(moves: &[ChessMove]) -> BTreeSet<Position> { moves.iter().map(|m| m.end()).collect() }

const WP: Piece = Piece::new(TeamColor::White, PieceType::Pawn);
const BP: Piece = Piece::new(TeamColor::Black, PieceType::Pawn);

#[test]
fn white_pawn_single_and_double_step_from_home() -> anyhow::Result<()> {
    let b = Board::standard();
    assert_eq!(ends(&piece_moves(&b, sq("e2"))?), squares(&["e3", "e4"]));
    assert_eq!(ends(&piece_moves(&b, sq("a2"))?), squares(&["a3", "a4"]));
    Ok(())
}

#[test]
fn black_pawn_moves_toward_row_one() -> anyhow::Result<()> {
    let b = Board::standard();
    assert_eq!(ends(&piece_moves(&b, sq("d7"))?), squares(&["d6", "d5"]));

    let mut b = Board::new();
    b.place(sq("d5"), BP);
    assert_eq!(ends(&piece_moves(&b, sq("d5"))?), squares(&["d4"]));
    Ok(())
}

#[test]
fn pawn_off_home_rank_steps_once() -> anyhow::Result<()> {
    let mut b = Board::new();
    b.place(sq("e3"), WP);
    assert_eq!(ends(&piece_moves(&b, sq("e3"))?), squares(&["e4"]));
    Ok(())
}

#[test]
fn double_step_blocked_by_either_square() -> anyhow::Result<()> {
    let mut b = Board::new();
    b.place(sq("e2"), WP);
    b.place(sq("e4"), BP);
    assert_eq!(ends(&piece_moves(&b, sq("e2"))?), squares(&["e3"]));

    b.place(sq("e3"), Piece::new(TeamColor::White, PieceType::Knight));
    assert!(piece_moves(&b, sq("e2"))?.is_empty());
    Ok(())
}

#[test]
fn pawn_never_captures_straight_ahead() -> anyhow::Result<()> {
    let mut b = Board::new();
    b.place(sq("c4"), WP);
    b.place(sq("c5"), BP);
    assert!(piece_moves(&b, sq("c4"))?.is_empty());
    Ok(())
}

#[test]
fn pawn_captures_diagonally_only_enemies() -> anyhow::Result<()> {
    let mut b = Board::new();
    b.place(sq("d4"), WP);
    b.place(sq("c5"), BP);
    b.place(sq("e5"), Piece::new(TeamColor::White, PieceType::Rook));
    assert_eq!(ends(&piece_moves(&b, sq("d4"))?), squares(&["d5", "c5"]));

    // Black pawn captures downward.
    let mut b = Board::new();
    b.place(sq("d5"), BP);
    b.place(sq("e4"), WP);
    b.place(sq("c4"), WP);
    b.place(sq("d4"), WP);
    assert_eq!(ends(&piece_moves(&b, sq("d5"))?), squares(&["c4", "e4"]));
    Ok(())
}

#[test]
fn pawn_on_edge_file_has_one_diagonal() -> anyhow::Result<()> {
    let mut b = Board::new();
    b.place(sq("h2"), WP);
    b.place(sq("g3"), BP);
    assert_eq!(ends(&piece_moves(&b, sq("h2"))?), squares(&["h3", "h4", "g3"]));
    Ok(())
}

#[test]
fn pawn_on_last_rank_has_no_moves() -> anyhow::Result<()> {
    // Promotion is the rules engine's job; geometrically there is nowhere to go.
    let mut b = Board::new();
    b.place(sq("a8"), WP);
    b.place(sq("h1"), BP);
    assert!(piece_moves(&b, sq("a8"))?.is_empty());
    assert!(piece_moves(&b, sq("h1"))?.is_empty());
    Ok(())
}

#[test]
fn pawn_reaching_last_rank_gets_no_promotion_piece() -> anyhow::Result<()> {
    let mut b = Board::new();
    b.place(sq("b7"), WP);
    b.place(sq("a8"), Piece::new(TeamColor::Black, PieceType::Rook));
    let moves = piece_moves(&b, sq("b7"))?;
    assert_eq!(ends(&moves), squares(&["b8", "a8"]));
    assert!(moves.iter().all(|m| m.promotion().is_none()));
    Ok(())
}
