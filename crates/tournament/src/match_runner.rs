//! Match runner for playing games between agents

use isolation_core::{Agent, Board, BoardError, Move, Player, TimeControl};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

/// Number of random placements made before the agents take over
pub const OPENING_PLIES: usize = 2;

/// Configuration for the games of a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub board_width: u8,
    pub board_height: u8,
    /// Maximum time per move (None = no limit)
    pub time_limit: Option<Duration>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_width: 7,
            board_height: 7,
            time_limit: Some(Duration::from_millis(150)),
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The loser had no legal moves on their turn
    NoMoves,
    /// The loser returned no move although one was available
    NoMoveReturned,
    IllegalMove,
    /// The loser used up the whole move budget
    Timeout,
}

impl EndReason {
    pub fn is_forfeit(self) -> bool {
        self != EndReason::NoMoves
    }
}

/// Result of a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub winner: Player,
    pub reason: EndReason,
    /// Every move played, opening included
    pub history: Vec<Move>,
}

impl GameRecord {
    pub fn loser(&self) -> Player {
        self.winner.other()
    }
}

/// Result of a match (multiple games) from one agent's perspective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    /// Losses by forfeit
    pub forfeits: u32,
    /// Wins because the opponent forfeited
    pub opponent_forfeits: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of games won (0 when nothing was played)
    pub fn win_rate(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        self.wins as f64 / total as f64
    }

    /// Count a game in which this side sat in `seat`.
    pub fn record(&mut self, game: &GameRecord, seat: Player) {
        let forfeit = game.reason.is_forfeit();
        if game.loser() == seat {
            self.losses += 1;
            self.forfeits += u32::from(forfeit);
        } else {
            self.wins += 1;
            self.opponent_forfeits += u32::from(forfeit);
        }
    }
}

/// Runs games between two agents
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Random legal placements for both players on an empty board
    pub fn random_opening<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Move>, BoardError> {
        let mut board = Board::new(self.config.board_width, self.config.board_height)?;
        let mut opening = Vec::with_capacity(OPENING_PLIES);

        for _ in 0..OPENING_PLIES {
            let Some(&mv) = board.active_moves().choose(rng) else {
                break;
            };
            board.apply_move(mv)?;
            opening.push(mv);
        }
        Ok(opening)
    }

    /// Play one game with `first` as player one.
    ///
    /// The opening moves are applied before either agent is asked to move.
    /// A player loses when they have no legal moves, or forfeits by returning
    /// no move, an illegal move, or by using up the move budget.
    pub fn play_game(
        &self,
        first: &mut dyn Agent,
        second: &mut dyn Agent,
        opening: &[Move],
    ) -> Result<GameRecord, BoardError> {
        let mut board = Board::new(self.config.board_width, self.config.board_height)?;
        for &mv in opening {
            board.apply_move(mv)?;
        }
        let mut history = opening.to_vec();

        loop {
            let player = board.active_player();
            let legal = board.active_moves();

            let end = |reason: EndReason, history: Vec<Move>| GameRecord {
                winner: player.other(),
                reason,
                history,
            };

            if legal.is_empty() {
                return Ok(end(EndReason::NoMoves, history));
            }

            let agent: &mut dyn Agent = match player {
                Player::One => &mut *first,
                Player::Two => &mut *second,
            };

            // Fresh clock for every move
            let clock = TimeControl::new(self.config.time_limit);
            let decision = agent.search(&board, &clock);

            if clock.is_expired() {
                debug!(agent = agent.name(), elapsed = ?clock.elapsed(), "move timed out");
                return Ok(end(EndReason::Timeout, history));
            }

            match decision.best_move {
                None => {
                    debug!(agent = agent.name(), "no move returned");
                    return Ok(end(EndReason::NoMoveReturned, history));
                }
                Some(mv) if !legal.contains(&mv) => {
                    debug!(agent = agent.name(), %mv, "illegal move");
                    return Ok(end(EndReason::IllegalMove, history));
                }
                Some(mv) => {
                    board.apply_move(mv)?;
                    history.push(mv);
                }
            }
        }
    }

    /// Run a match between two agents
    ///
    /// Every opening is played twice, once from each seat. Returns the result
    /// from `agent1`'s perspective.
    pub fn run_match(
        &self,
        agent1: &mut dyn Agent,
        agent2: &mut dyn Agent,
        openings: &[Vec<Move>],
    ) -> Result<MatchResult, BoardError> {
        let mut result = MatchResult::new();

        for (game_num, opening) in openings.iter().enumerate() {
            let game = self.play_game(agent1, agent2, opening)?;
            result.record(&game, Player::One);
            debug!(
                game = 2 * game_num + 1,
                first = agent1.name(),
                winner = %game.winner,
                reason = ?game.reason,
                "game finished"
            );

            let game = self.play_game(agent2, agent1, opening)?;
            result.record(&game, Player::Two);
            debug!(
                game = 2 * game_num + 2,
                first = agent2.name(),
                winner = %game.winner,
                reason = ?game.reason,
                "game finished"
            );
        }

        Ok(result)
    }
}
