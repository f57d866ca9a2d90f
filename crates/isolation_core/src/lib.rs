pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod time_control;
pub mod types;

// Re-export core game logic (not agent-specific)
pub use board::*;
pub use error::BoardError;
pub use movegen::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Game state capability consumed by the search
// =============================================================================

/// Everything a search needs to know about a position.
///
/// Implementations are immutable values: `forecast` returns a new state and
/// never alters the original.
pub trait GameState: Clone {
    /// The player whose turn it is.
    fn active_player(&self) -> Player;

    /// Legal moves for `player`, in a stable enumeration order. May be empty.
    fn legal_moves(&self, player: Player) -> Vec<Move>;

    /// The state after the active player plays `mv`.
    fn forecast(&self, mv: Move) -> Self;

    fn is_winner(&self, player: Player) -> bool;

    fn is_loser(&self, player: Player) -> bool;

    /// Where `player`'s token stands (None before its first move).
    fn player_location(&self, player: Player) -> Option<Move>;

    fn blank_cell_count(&self) -> usize;

    /// Board (width, height).
    fn dimensions(&self) -> (u8, u8);

    /// Moves made so far, zero exactly at the initial position.
    fn move_count(&self) -> u32;
}

impl GameState for Board {
    fn active_player(&self) -> Player {
        Board::active_player(self)
    }

    fn legal_moves(&self, player: Player) -> Vec<Move> {
        Board::legal_moves(self, player)
    }

    fn forecast(&self, mv: Move) -> Self {
        self.forecast_move(mv)
    }

    fn is_winner(&self, player: Player) -> bool {
        Board::is_winner(self, player)
    }

    fn is_loser(&self, player: Player) -> bool {
        Board::is_loser(self, player)
    }

    fn player_location(&self, player: Player) -> Option<Move> {
        Board::player_location(self, player)
    }

    fn blank_cell_count(&self) -> usize {
        Board::blank_cell_count(self)
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.width(), self.height())
    }

    fn move_count(&self) -> u32 {
        Board::move_count(self)
    }
}

// =============================================================================
// Agent trait: implemented by every player the match runner can seat
// =============================================================================

/// Outcome of one move decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// The chosen move (None if no legal moves, or no search depth completed)
    pub best_move: Option<Move>,
    /// Root score from the deciding player's perspective
    pub score: f64,
    /// Deepest search depth that completed
    pub depth: u32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early due to the clock
    pub stopped: bool,
}

impl Decision {
    /// The player to move has no legal moves and has lost.
    pub fn no_moves() -> Self {
        Self {
            score: f64::NEG_INFINITY,
            ..Self::immediate(None)
        }
    }

    /// A decision made without searching (forced or book move).
    pub fn immediate(best_move: Option<Move>) -> Self {
        Self {
            best_move,
            score: 0.0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Trait that all Isolation agents implement.
///
/// This lets the match runner seat search agents, random baselines and
/// anything else side by side.
pub trait Agent {
    /// Choose a move for the active player of `board`.
    ///
    /// # Arguments
    /// * `board` - The current position
    /// * `clock` - Time remaining for this move
    fn search(&mut self, board: &Board, clock: &dyn Clock) -> Decision;

    /// Returns the agent's display name
    fn name(&self) -> &str;
}
