use crate::types::{Move, Player};

/// Errors raised when a board is built or a move is applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("illegal move {mv} for player {player}")]
    IllegalMove { mv: Move, player: Player },

    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}
