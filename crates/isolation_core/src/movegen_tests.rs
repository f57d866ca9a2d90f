use super::*;

#[test]
fn test_knight_moves_from_centre() {
    let board = Board::from_layout(
        ". . . . .
         . . . . .
         . . 1 . .
         . . . . .
         . . . . 2",
        Player::One,
    )
    .unwrap();

    let moves = board.active_moves();
    assert_eq!(
        moves,
        vec![
            Move::new(0, 1),
            Move::new(0, 3),
            Move::new(1, 0),
            Move::new(1, 4),
            Move::new(3, 0),
            Move::new(3, 4),
            Move::new(4, 1),
            Move::new(4, 3),
        ]
    );
}

#[test]
fn test_knight_moves_clipped_at_corner() {
    let dests: Vec<Move> = knight_destinations(Move::new(0, 0), 3, 3).collect();
    assert_eq!(dests, vec![Move::new(1, 2), Move::new(2, 1)]);
}

#[test]
fn test_centre_of_3x3_has_no_jumps() {
    assert_eq!(knight_destinations(Move::new(1, 1), 3, 3).count(), 0);
}

#[test]
fn test_blocked_cells_are_skipped() {
    let board = Board::from_layout(
        "1 . .
         . . X
         . . .
         . 2 .",
        Player::One,
    )
    .unwrap();

    assert_eq!(board.active_moves(), vec![Move::new(2, 1)]);
    // From (3, 1) only (1, 0) is open: (1, 2) is blocked, the rest leave the board
    assert_eq!(board.legal_moves(Player::Two), vec![Move::new(1, 0)]);
}

#[test]
fn test_legal_moves_into_reuses_buffer() {
    let board = Board::new(3, 3).unwrap();
    let mut out = vec![Move::new(9, 9)];
    legal_moves_into(&board, Player::One, &mut out);
    assert_eq!(out.len(), 9);
    assert!(!out.contains(&Move::new(9, 9)));
}
