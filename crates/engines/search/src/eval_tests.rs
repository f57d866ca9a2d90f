use super::*;
use isolation_core::Board;

fn board(layout: &str) -> Board {
    Board::from_layout(layout, Player::One).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_terminal_scores_override_every_heuristic() {
    // Player one is boxed in: (1, 2) is blocked and (2, 1) holds player two.
    let lost = board(
        "1 . .
         . . X
         . 2 .",
    );

    for heuristic in Heuristic::ALL {
        assert_eq!(
            heuristic.evaluate(&lost, Player::One),
            f64::NEG_INFINITY,
            "{heuristic:?} should score a loss as -inf"
        );
        assert_eq!(
            heuristic.evaluate(&lost, Player::Two),
            f64::INFINITY,
            "{heuristic:?} should score a win as +inf"
        );
    }
}

#[test]
fn test_terminal_score_is_none_mid_game() {
    let open = Board::new(5, 5).unwrap();
    assert_eq!(terminal_score(&open, Player::One), None);
    assert_eq!(terminal_score(&open, Player::Two), None);
}

#[test]
fn test_mobility_scores_without_overlap() {
    // Player one has 8 jumps from the centre, player two has 2 from the corner.
    let pos = board(
        ". . . . .
         . . . . .
         . . 1 . .
         . . . . .
         . . . . 2",
    );

    assert_close(Heuristic::Null.evaluate(&pos, Player::One), 0.0);
    assert_close(Heuristic::OpenMove.evaluate(&pos, Player::One), 8.0);
    assert_close(Heuristic::Improved.evaluate(&pos, Player::One), 6.0);
    assert_close(Heuristic::Improved.evaluate(&pos, Player::Two), -6.0);
    assert_close(Heuristic::Overlap.evaluate(&pos, Player::One), 6.0);
    assert_close(Heuristic::Proximity.evaluate(&pos, Player::One), 6.0);
    assert_close(Heuristic::Adaptive.evaluate(&pos, Player::One), 6.0);
}

#[test]
fn test_shared_destinations_are_discounted() {
    // Both of player two's jumps, (2, 3) and (3, 2), are also player one's.
    let pos = board(
        ". . . . .
         . 1 . . .
         . . . . .
         . . . . .
         . . . . 2",
    );

    assert_close(Heuristic::Improved.evaluate(&pos, Player::One), 2.0);
    assert_close(Heuristic::Overlap.evaluate(&pos, Player::One), 1.0);
    assert_close(Heuristic::Proximity.evaluate(&pos, Player::One), 4.0 - 1.02 - 2.0);
    assert_close(Heuristic::Adaptive.evaluate(&pos, Player::One), 0.0);
}

#[test]
fn test_crowding_penalised_early() {
    let pos = board(
        ". . . . .
         . . . . .
         . . 1 2 .
         . . . . .
         . . . . .",
    );

    // 8 own moves, 6 opponent moves, tokens one cell apart
    assert_close(Heuristic::Improved.evaluate(&pos, Player::One), 2.0);
    assert_close(Heuristic::Proximity.evaluate(&pos, Player::One), 2.0 - 0.51);
    assert_close(Heuristic::Adaptive.evaluate(&pos, Player::One), 2.0 - 0.45);
}

#[test]
fn test_proximity_chases_late() {
    // 14 of 25 cells filled
    let pos = board(
        "X X X X X
         X X X X X
         X X 1 . .
         . . . . .
         . . . . 2",
    );

    let distance = 8f64.sqrt();
    assert_close(
        Heuristic::Proximity.evaluate(&pos, Player::One),
        4.0 - 0.1 * distance - 2.0,
    );
}

#[test]
fn test_evaluation_is_deterministic() {
    let pos = board(
        ". . . . .
         . 1 . . .
         . . X . .
         . . . . .
         . . . . 2",
    );
    let before = pos.clone();

    for heuristic in Heuristic::ALL {
        let a = heuristic.evaluate(&pos, Player::One);
        let b = heuristic.evaluate(&pos, Player::One);
        assert_eq!(a, b);
    }
    assert_eq!(pos, before);
}

#[test]
fn test_evaluator_through_reference() {
    let pos = Board::new(5, 5).unwrap();
    let heuristic = Heuristic::OpenMove;
    let by_ref: &Heuristic = &heuristic;
    assert_eq!(
        by_ref.evaluate(&pos, Player::One),
        heuristic.evaluate(&pos, Player::One)
    );
}
