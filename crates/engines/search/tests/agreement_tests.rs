//! Alpha-beta must make the same root decisions as minimax while visiting
//! no more nodes, over a spread of reachable positions.

use std::time::Duration;

use isolation_core::{Board, GameState, TimeControl};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use search_engine::{Heuristic, SearchMethod, Searcher};

/// Play `plies` random moves from an empty board; None if the game ended first.
fn random_position(rng: &mut StdRng, size: u8, plies: usize) -> Option<Board> {
    let mut board = Board::new(size, size).unwrap();
    for _ in 0..plies {
        let moves = board.active_moves();
        let mv = *moves.choose(rng)?;
        board.apply_move(mv).unwrap();
    }
    if board.active_moves().is_empty() {
        None
    } else {
        Some(board)
    }
}

#[test]
fn test_alphabeta_matches_minimax_on_random_positions() {
    let mut rng = StdRng::seed_from_u64(7);
    let clock = TimeControl::new(None);
    let mut checked = 0;

    while checked < 12 {
        let Some(board) = random_position(&mut rng, 5, 6) else {
            continue;
        };
        let player = board.active_player();

        for heuristic in Heuristic::ALL {
            for depth in 1..=3 {
                let mut mm = Searcher::new(&heuristic, &clock, Duration::ZERO, player);
                let mut ab = Searcher::new(&heuristic, &clock, Duration::ZERO, player);

                let expected = mm.search(SearchMethod::Minimax, &board, depth).unwrap();
                let actual = ab.search(SearchMethod::AlphaBeta, &board, depth).unwrap();

                assert_eq!(
                    actual.best_move, expected.best_move,
                    "{heuristic:?} depth {depth} on\n{board}"
                );
                assert_eq!(actual.score, expected.score, "{heuristic:?} depth {depth}");
                assert!(
                    ab.nodes() <= mm.nodes(),
                    "alpha-beta visited {} nodes, minimax {}",
                    ab.nodes(),
                    mm.nodes()
                );
                assert!(board.legal_moves(player).contains(&actual.best_move.unwrap()));
            }
        }
        checked += 1;
    }
}

#[test]
fn test_searching_never_mutates_the_position() {
    let mut rng = StdRng::seed_from_u64(99);
    let clock = TimeControl::new(None);
    let board = loop {
        if let Some(board) = random_position(&mut rng, 6, 4) {
            break board;
        }
    };
    let before = board.clone();

    for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
        let mut searcher = Searcher::new(&Heuristic::Proximity, &clock, Duration::ZERO, board.active_player());
        searcher.search(method, &board, 3).unwrap();
    }
    assert_eq!(board, before);
    assert_eq!(GameState::move_count(&board), 4);
}
