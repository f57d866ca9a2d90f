//! Mobility-based position evaluation
//!
//! Every heuristic scores a position from a given player's perspective.
//! Finished games score `+inf` for the winner and `-inf` for the loser before
//! any other term is computed; this is the only termination signal the search
//! gets below its depth limit.

use isolation_core::{GameState, Move, Player};
use serde::{Deserialize, Serialize};

/// Deduction per move destination shared with the opponent (`Overlap`).
const OVERLAP_PENALTY: f64 = 0.5;
/// Deduction per shared destination and for crowding early on (`Proximity`).
const PROXIMITY_PENALTY: f64 = 0.51;
/// Weight on token distance once the board is half full (`Proximity`).
const CHASE_WEIGHT: f64 = 0.1;
/// Board fill ratio at which `Proximity` switches from avoiding to chasing.
const LATE_GAME_FILL: f64 = 0.5;
/// Crowding deduction and light overlap weight (`Adaptive`).
const ADAPTIVE_PENALTY: f64 = 0.45;

/// Static evaluation of a game state.
///
/// Implementations must be pure: the same state and player always give the
/// same score, and the state is never modified.
pub trait Evaluator {
    fn evaluate<S: GameState>(&self, state: &S, player: Player) -> f64;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate<S: GameState>(&self, state: &S, player: Player) -> f64 {
        (**self).evaluate(state, player)
    }
}

/// Built-in evaluation functions, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Only distinguishes won and lost positions.
    Null,
    /// Own legal-move count.
    #[default]
    OpenMove,
    /// Own minus opponent legal-move count.
    Improved,
    /// `Improved`, discounting destinations the opponent can also reach.
    Overlap,
    /// `Overlap` plus token distance: keep away early, close in late.
    Proximity,
    /// Overlap weight depends on how much of the own mobility is contested.
    Adaptive,
}

impl Heuristic {
    pub const ALL: [Heuristic; 6] = [
        Heuristic::Null,
        Heuristic::OpenMove,
        Heuristic::Improved,
        Heuristic::Overlap,
        Heuristic::Proximity,
        Heuristic::Adaptive,
    ];
}

impl Evaluator for Heuristic {
    fn evaluate<S: GameState>(&self, state: &S, player: Player) -> f64 {
        if let Some(score) = terminal_score(state, player) {
            return score;
        }
        match self {
            Heuristic::Null => 0.0,
            Heuristic::OpenMove => state.legal_moves(player).len() as f64,
            Heuristic::Improved => {
                let own = state.legal_moves(player).len() as f64;
                let opp = state.legal_moves(player.other()).len() as f64;
                own - opp
            }
            Heuristic::Overlap => {
                let m = Mobility::of(state, player);
                m.own - m.opp - OVERLAP_PENALTY * m.shared
            }
            Heuristic::Proximity => proximity_score(state, player),
            Heuristic::Adaptive => adaptive_score(state, player),
        }
    }
}

/// `Some(±inf)` once `player` has won or lost.
pub fn terminal_score<S: GameState>(state: &S, player: Player) -> Option<f64> {
    if state.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if state.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// Move counts for both sides and how many destinations they share.
struct Mobility {
    own: f64,
    opp: f64,
    shared: f64,
}

impl Mobility {
    fn of<S: GameState>(state: &S, player: Player) -> Self {
        let own_moves = state.legal_moves(player);
        let opp_moves = state.legal_moves(player.other());
        let shared = own_moves.iter().filter(|mv| opp_moves.contains(mv)).count();
        Self {
            own: own_moves.len() as f64,
            opp: opp_moves.len() as f64,
            shared: shared as f64,
        }
    }
}

fn token_distance<S: GameState>(state: &S, player: Player) -> Option<f64> {
    let own: Move = state.player_location(player)?;
    let opp: Move = state.player_location(player.other())?;
    Some(own.distance(opp))
}

fn fill_ratio<S: GameState>(state: &S) -> f64 {
    let (width, height) = state.dimensions();
    let total = width as f64 * height as f64;
    1.0 - state.blank_cell_count() as f64 / total
}

fn proximity_score<S: GameState>(state: &S, player: Player) -> f64 {
    let m = Mobility::of(state, player);
    let mut own = m.own - PROXIMITY_PENALTY * m.shared;

    if let Some(distance) = token_distance(state, player) {
        let (width, _) = state.dimensions();
        if fill_ratio(state) < LATE_GAME_FILL {
            if distance < width as f64 / 3.0 {
                own -= PROXIMITY_PENALTY;
            }
        } else {
            own -= CHASE_WEIGHT * distance;
        }
    }

    own - m.opp
}

fn adaptive_score<S: GameState>(state: &S, player: Player) -> f64 {
    let m = Mobility::of(state, player);
    let mut own = m.own;

    if m.shared * 1.5 < m.own {
        own -= m.shared;
    } else {
        own -= ADAPTIVE_PENALTY * m.shared;
    }

    if let Some(distance) = token_distance(state, player) {
        let (width, _) = state.dimensions();
        if distance < width as f64 / 3.0 {
            own -= ADAPTIVE_PENALTY;
        }
    }

    own - m.opp
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
