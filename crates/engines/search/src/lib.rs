//! Isolation Search Agent
//!
//! Minimax and alpha-beta search over the knight-move Isolation game, with
//! iterative deepening under a move clock and pluggable mobility heuristics.

mod config;
mod error;
mod eval;
mod iterative;
mod search;

use isolation_core::{Agent, Board, Clock, Decision, GameState, Move};
use tracing::{trace, warn};

/// Search agent binding a search method, an evaluator, a depth policy and a
/// timeout threshold.
///
/// The agent keeps no search state between decisions.
#[derive(Debug, Clone)]
pub struct SearchAgent<E = Heuristic> {
    name: String,
    config: AgentConfig,
    evaluator: E,
}

impl SearchAgent<Heuristic> {
    /// Agent using the heuristic named in `config`.
    ///
    /// Fails if `config` does not pass [`AgentConfig::validate`].
    pub fn new(name: impl Into<String>, config: AgentConfig) -> Result<Self, ConfigError> {
        let evaluator = config.heuristic;
        Self::with_evaluator(name, config, evaluator)
    }
}

impl<E: Evaluator> SearchAgent<E> {
    /// Agent using a custom evaluator; `config.heuristic` is ignored.
    pub fn with_evaluator(
        name: impl Into<String>,
        config: AgentConfig,
        evaluator: E,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            config,
            evaluator,
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Choose a move for the active player of `state`.
    ///
    /// Returns a legal move of `state`, or None when there is none or the
    /// clock ran out before any search depth completed.
    pub fn decide<S: GameState>(&self, state: &S, clock: &dyn Clock) -> Option<Move> {
        self.analyze(state, clock).best_move
    }

    /// Like [`decide`](Self::decide), also reporting score, depth and nodes.
    pub fn analyze<S: GameState>(&self, state: &S, clock: &dyn Clock) -> Decision {
        let player = state.active_player();
        if state.legal_moves(player).is_empty() {
            return Decision::no_moves();
        }
        if state.move_count() == 0 {
            let (width, height) = state.dimensions();
            let centre = Move::new(height / 2, width / 2);
            trace!(%centre, "opening book move");
            return Decision::immediate(Some(centre));
        }

        let mut searcher = Searcher::new(&self.evaluator, clock, self.config.timeout(), player);

        let decision = if self.config.iterative {
            let outcome = iterative_deepening(
                &mut searcher,
                self.config.method,
                state,
                self.config.max_depth,
            );
            Decision {
                best_move: outcome.best_move,
                score: outcome.score,
                depth: outcome.depth,
                nodes: searcher.nodes(),
                stopped: outcome.stopped,
            }
        } else {
            let depth = self.config.search_depth;
            match searcher.search(self.config.method, state, depth) {
                Ok(result) => Decision {
                    best_move: result.best_move,
                    score: result.score,
                    depth,
                    nodes: searcher.nodes(),
                    stopped: false,
                },
                Err(SearchError::Timeout) => Decision {
                    best_move: None,
                    score: f64::NEG_INFINITY,
                    depth: 0,
                    nodes: searcher.nodes(),
                    stopped: true,
                },
            }
        };

        if decision.best_move.is_none() {
            warn!(
                agent = %self.name,
                nodes = decision.nodes,
                "no search depth completed before the timeout"
            );
        }
        decision
    }
}

impl<E: Evaluator> Agent for SearchAgent<E> {
    fn search(&mut self, board: &Board, clock: &dyn Clock) -> Decision {
        self.analyze(board, clock)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// Re-export for direct use if needed
pub use config::AgentConfig;
pub use error::{ConfigError, SearchError};
pub use eval::{terminal_score, Evaluator, Heuristic};
pub use iterative::{iterative_deepening, DeepeningOutcome};
pub use search::{SearchMethod, SearchResult, Searcher};
