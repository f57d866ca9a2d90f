//! Random Move Isolation Agent
//!
//! A simple agent that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any search agent should easily beat this)
//! - Exercising the match runner without search costs

use isolation_core::{Agent, Board, Clock, Decision};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An agent that plays random legal moves.
///
/// This agent provides no evaluation - it simply picks a random move
/// from all available legal moves and ignores the clock.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Reproducible agent; tournaments derive `seed` from their own seed.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn search(&mut self, board: &Board, _clock: &dyn Clock) -> Decision {
        let moves = board.active_moves();
        let Some(&best_move) = moves.choose(&mut self.rng) else {
            return Decision::no_moves();
        };

        Decision {
            best_move: Some(best_move),
            score: 0.0,
            depth: 0,
            nodes: 1,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
