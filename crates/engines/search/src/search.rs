//! Depth-limited minimax and alpha-beta search
//!
//! Both searches share one depth convention: depth 0 is a leaf scored by the
//! evaluator with no move attached, so depth 1 scores every immediate reply.
//! Ties keep the first move in enumeration order.

use std::time::Duration;

use isolation_core::{Clock, GameState, Move, Player};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::eval::Evaluator;

/// Which tree search an agent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    #[default]
    Minimax,
    #[serde(alias = "alpha_beta")]
    AlphaBeta,
}

/// Score and move chosen at one tree node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    /// None when the node has no legal moves, or is a depth-0 leaf
    pub best_move: Option<Move>,
}

impl SearchResult {
    fn leaf(score: f64) -> Self {
        Self {
            score,
            best_move: None,
        }
    }

    /// A side with no moves has lost.
    fn no_moves(maximizing: bool) -> Self {
        Self::leaf(if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    }
}

/// State for one decision: evaluator, clock, and statistics.
///
/// Scores are always from `player`'s perspective, the player to move at the
/// root. A searcher lives for a single decision.
pub struct Searcher<'a, E> {
    evaluator: &'a E,
    clock: &'a dyn Clock,
    threshold: Duration,
    player: Player,
    nodes: u64,
}

impl<'a, E: Evaluator> Searcher<'a, E> {
    /// # Arguments
    /// * `evaluator` - Scores leaf positions
    /// * `clock` - Time remaining for this move
    /// * `threshold` - Abort once less than this much time is left
    /// * `player` - The maximizing player
    pub fn new(evaluator: &'a E, clock: &'a dyn Clock, threshold: Duration, player: Player) -> Self {
        Self {
            evaluator,
            clock,
            threshold,
            player,
            nodes: 0,
        }
    }

    /// Nodes visited so far, across every search run by this searcher.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Root search with the given method.
    pub fn search<S: GameState>(
        &mut self,
        method: SearchMethod,
        state: &S,
        depth: u32,
    ) -> Result<SearchResult, SearchError> {
        match method {
            SearchMethod::Minimax => self.minimax(state, depth, true),
            SearchMethod::AlphaBeta => {
                self.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }

    #[inline]
    fn enter_node(&mut self) -> Result<(), SearchError> {
        if self.clock.time_left() < self.threshold {
            return Err(SearchError::Timeout);
        }
        self.nodes += 1;
        Ok(())
    }

    /// Plain minimax.
    ///
    /// Returns the best (score, move) for this node, or `Timeout` as soon as
    /// any node finds the clock below the threshold.
    pub fn minimax<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        maximizing: bool,
    ) -> Result<SearchResult, SearchError> {
        self.enter_node()?;

        let moves = state.legal_moves(state.active_player());
        if moves.is_empty() {
            return Ok(SearchResult::no_moves(maximizing));
        }
        if depth == 0 {
            return Ok(SearchResult::leaf(self.evaluator.evaluate(state, self.player)));
        }

        let mut best: Option<SearchResult> = None;
        for mv in moves {
            let child = state.forecast(mv);
            let score = self.minimax(&child, depth - 1, !maximizing)?.score;

            let improves = match best {
                None => true,
                Some(b) if maximizing => score > b.score,
                Some(b) => score < b.score,
            };
            if improves {
                best = Some(SearchResult {
                    score,
                    best_move: Some(mv),
                });
            }
        }
        Ok(best.unwrap_or(SearchResult::no_moves(maximizing)))
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// `alpha` and `beta` are passed by value so sibling subtrees never see
    /// each other's windows.
    pub fn alphabeta<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> Result<SearchResult, SearchError> {
        self.enter_node()?;

        let moves = state.legal_moves(state.active_player());
        if moves.is_empty() {
            return Ok(SearchResult::no_moves(maximizing));
        }
        if depth == 0 {
            return Ok(SearchResult::leaf(self.evaluator.evaluate(state, self.player)));
        }

        let mut best: Option<SearchResult> = None;
        for mv in moves {
            let child = state.forecast(mv);
            let score = self
                .alphabeta(&child, depth - 1, alpha, beta, !maximizing)?
                .score;

            let improves = match best {
                None => true,
                Some(b) if maximizing => score > b.score,
                Some(b) => score < b.score,
            };
            if improves {
                best = Some(SearchResult {
                    score,
                    best_move: Some(mv),
                });
            }

            if maximizing {
                if score >= beta {
                    return Ok(SearchResult {
                        score,
                        best_move: Some(mv),
                    }); // Beta cutoff
                }
                alpha = alpha.max(score);
            } else {
                if score <= alpha {
                    return Ok(SearchResult {
                        score,
                        best_move: Some(mv),
                    }); // Alpha cutoff
                }
                beta = beta.min(score);
            }
        }
        Ok(best.unwrap_or(SearchResult::no_moves(maximizing)))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
