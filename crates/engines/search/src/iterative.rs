//! Iterative deepening driver.
//!
//! Searches at depth 1, 2, 3, … until the clock runs out and keeps the
//! result of the deepest search that finished. An aborted search contributes
//! nothing.

use isolation_core::{GameState, Move};
use tracing::debug;

use crate::error::SearchError;
use crate::eval::Evaluator;
use crate::search::{SearchMethod, Searcher};

/// Result of an iterative deepening run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeepeningOutcome {
    /// Move from the deepest completed search (None if none completed)
    pub best_move: Option<Move>,
    /// Root score of that search
    pub score: f64,
    /// Deepest completed depth, 0 if none
    pub depth: u32,
    /// True if the clock stopped the run
    pub stopped: bool,
}

/// Run `method` at increasing depth until time runs out.
///
/// Deepening also ends once a completed search reports no move, at
/// `max_depth` if given, and after a search as deep as the number of blank
/// cells: no line of play is longer than that, so deeper searches would
/// repeat the same tree.
pub fn iterative_deepening<S, E>(
    searcher: &mut Searcher<'_, E>,
    method: SearchMethod,
    state: &S,
    max_depth: Option<u32>,
) -> DeepeningOutcome
where
    S: GameState,
    E: Evaluator,
{
    let mut outcome = DeepeningOutcome {
        best_move: None,
        score: f64::NEG_INFINITY,
        depth: 0,
        stopped: false,
    };

    let tree_depth = u32::try_from(state.blank_cell_count()).unwrap_or(u32::MAX).max(1);
    let ceiling = max_depth.map_or(tree_depth, |d| d.min(tree_depth));

    for depth in 1..=ceiling {
        match searcher.search(method, state, depth) {
            Ok(result) => {
                outcome.best_move = result.best_move;
                outcome.score = result.score;
                outcome.depth = depth;
                debug!(
                    depth,
                    score = result.score,
                    nodes = searcher.nodes(),
                    best_move = ?result.best_move,
                    "completed depth"
                );
                if result.best_move.is_none() {
                    break;
                }
            }
            Err(SearchError::Timeout) => {
                debug!(depth, completed = outcome.depth, "search timed out");
                outcome.stopped = true;
                break;
            }
        }
    }

    outcome
}

#[cfg(test)]
#[path = "iterative_tests.rs"]
mod iterative_tests;
