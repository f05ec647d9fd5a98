use crate::piece::{Piece, PieceKind};
use crate::test_harness::TestGame;

// ====================================================================
// Undo integration tests
// ====================================================================

fn square_game() -> TestGame {
    TestGame::new().with_hand_of(Piece::from_kind(PieceKind::Square(1), 0))
}

#[test]
fn test_first_hand_is_dealt_and_undo_unavailable() {
    let mut game = TestGame::new();
    assert!(game.hand().is_full());

    game.undo();
    assert!(game.undo_performed().is_empty());
    assert!(game.history().is_empty());
}

#[test]
fn test_place_then_undo_restores_everything() {
    let mut game = square_game();
    let hand_before = game.hand().clone();

    game.place(1, 2, 3);
    assert_eq!(game.board().get(2, 3).color, Some(PieceKind::Square(1).color()));
    assert_eq!(game.scorer().current_score, 1);
    assert_eq!(game.history().len(), 1);

    game.undo();
    assert!(game.board().get(2, 3).is_empty());
    assert_eq!(game.scorer().current_score, 0);
    assert_eq!(game.hand(), &hand_before);
    assert!(game.history().is_empty());

    let performed = game.undo_performed();
    assert_eq!(performed.len(), 1);
    assert_eq!(performed[0].restored_score, 0);
}

#[test]
fn test_rejected_placement_leaves_history_depth() {
    let mut game = square_game();
    game.place(0, 0, 0);
    game.place(1, 0, 0);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.hand().available_count(), 2);
}

#[test]
fn test_refill_blocks_undo_across_hands() {
    let mut game = square_game();
    game.place(0, 0, 0);
    game.place(1, 0, 1);
    game.place(2, 0, 2);
    assert!(game.hand().is_full(), "hand refilled after last piece");

    game.undo();
    assert!(game.undo_performed().is_empty());
    assert_eq!(game.scorer().current_score, 3);
}

#[test]
fn test_history_restarts_after_refill() {
    let mut game = square_game();
    for col in 0..3 {
        game.place(col, 0, col);
    }
    // The dealt hand is random; pick a spot that always fits a 5x5 piece.
    game.place(0, 5, 5);
    assert_eq!(game.history().len(), 1);

    game.undo();
    assert_eq!(game.scorer().current_score, 3);
    assert!(game.hand().is_full());
}
