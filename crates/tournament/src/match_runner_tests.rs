use super::*;
use isolation_core::{Clock, Decision};
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_engine::RandomAgent;
use search_engine::{AgentConfig, Heuristic, SearchAgent, SearchMethod};

fn untimed(size: u8) -> MatchRunner {
    MatchRunner::new(MatchConfig {
        board_width: size,
        board_height: size,
        time_limit: None,
    })
}

/// Always answers with the same move, legal or not.
struct Stubborn(Option<Move>);

impl Agent for Stubborn {
    fn search(&mut self, _board: &Board, _clock: &dyn Clock) -> Decision {
        Decision::immediate(self.0)
    }

    fn name(&self) -> &str {
        "stubborn"
    }
}

#[test]
fn test_random_opening_is_legal_and_reproducible() {
    let runner = untimed(7);
    let opening = runner.random_opening(&mut StdRng::seed_from_u64(3)).unwrap();
    let again = runner.random_opening(&mut StdRng::seed_from_u64(3)).unwrap();

    assert_eq!(opening.len(), OPENING_PLIES);
    assert_eq!(opening, again);
    assert_ne!(opening[0], opening[1]);

    let mut board = Board::new(7, 7).unwrap();
    for mv in opening {
        board.apply_move(mv).unwrap();
    }
    assert_eq!(board.move_count(), 2);
}

#[test]
fn test_stuck_player_loses() {
    // On 3x3 the centre has no knight moves at all.
    let runner = untimed(3);
    let mut first = RandomAgent::seeded("r1", 1);
    let mut second = RandomAgent::seeded("r2", 2);

    let game = runner
        .play_game(&mut first, &mut second, &[Move::new(0, 0), Move::new(1, 1)])
        .unwrap();

    assert_eq!(game.winner, Player::One);
    assert_eq!(game.reason, EndReason::NoMoves);
    assert_eq!(game.history.len(), 3);
    assert!(!game.reason.is_forfeit());
}

#[test]
fn test_timeout_forfeits() {
    let runner = MatchRunner::new(MatchConfig {
        board_width: 5,
        board_height: 5,
        time_limit: Some(Duration::ZERO),
    });
    let mut first = RandomAgent::seeded("r1", 1);
    let mut second = RandomAgent::seeded("r2", 2);
    let opening = vec![Move::new(0, 0), Move::new(4, 4)];

    let game = runner.play_game(&mut first, &mut second, &opening).unwrap();

    assert_eq!(game.winner, Player::Two);
    assert_eq!(game.reason, EndReason::Timeout);
    assert_eq!(game.history, opening);
}

#[test]
fn test_returning_no_move_forfeits() {
    let runner = untimed(5);
    let mut passer = Stubborn(None);
    let mut random = RandomAgent::seeded("r", 5);

    let game = runner
        .play_game(&mut passer, &mut random, &[Move::new(0, 0), Move::new(4, 4)])
        .unwrap();

    assert_eq!(game.winner, Player::Two);
    assert_eq!(game.reason, EndReason::NoMoveReturned);
}

#[test]
fn test_illegal_move_forfeits() {
    let runner = untimed(5);
    let mut random = RandomAgent::seeded("r", 5);
    // (0, 0) is already blocked by the opening
    let mut squatter = Stubborn(Some(Move::new(0, 0)));

    let game = runner
        .play_game(&mut random, &mut squatter, &[Move::new(0, 0), Move::new(4, 4)])
        .unwrap();

    assert_eq!(game.winner, Player::One);
    assert_eq!(game.reason, EndReason::IllegalMove);
    assert_eq!(game.history.len(), 3);
}

#[test]
fn test_illegal_opening_is_an_error() {
    let runner = untimed(5);
    let mut a = RandomAgent::seeded("a", 1);
    let mut b = RandomAgent::seeded("b", 2);

    let err = runner
        .play_game(&mut a, &mut b, &[Move::new(2, 2), Move::new(2, 2)])
        .unwrap_err();
    assert!(matches!(err, BoardError::IllegalMove { .. }));
}

#[test]
fn test_match_plays_each_opening_from_both_seats() {
    let runner = untimed(5);
    let mut rng = StdRng::seed_from_u64(11);
    let openings: Vec<Vec<Move>> = (0..3)
        .map(|_| runner.random_opening(&mut rng).unwrap())
        .collect();

    let config = AgentConfig::fixed(SearchMethod::AlphaBeta, 3, Heuristic::Improved);
    let mut search = SearchAgent::new("AB_Improved", config).unwrap();
    let mut random = RandomAgent::seeded("Random", 4);

    let result = runner.run_match(&mut search, &mut random, &openings).unwrap();

    assert_eq!(result.total_games(), 6);
    assert_eq!(result.forfeits, 0);
    assert_eq!(result.opponent_forfeits, 0);
}

#[test]
fn test_match_result_counts_seats() {
    let win_as_two = GameRecord {
        winner: Player::Two,
        reason: EndReason::Timeout,
        history: Vec::new(),
    };
    let loss_as_one = GameRecord {
        winner: Player::Two,
        reason: EndReason::NoMoves,
        history: Vec::new(),
    };

    let mut result = MatchResult::new();
    result.record(&win_as_two, Player::Two);
    result.record(&loss_as_one, Player::One);

    assert_eq!(
        result,
        MatchResult {
            wins: 1,
            losses: 1,
            forfeits: 0,
            opponent_forfeits: 1,
        }
    );
    assert_eq!(result.win_rate(), 0.5);
    assert_eq!(MatchResult::new().win_rate(), 0.0);
    assert_eq!(loss_as_one.loser(), Player::One);
}
