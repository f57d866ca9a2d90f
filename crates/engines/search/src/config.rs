use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::eval::Heuristic;
use crate::search::SearchMethod;

/// How a [`SearchAgent`](crate::SearchAgent) searches, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Plies searched in fixed-depth mode (ignored when `iterative`)
    pub search_depth: u32,
    /// Leaf evaluation
    pub heuristic: Heuristic,
    /// Iterative deepening (true) or a single fixed-depth search (false)
    pub iterative: bool,
    pub method: SearchMethod,
    /// Abort the search once fewer than this many milliseconds remain
    pub timeout_ms: u64,
    /// Optional cap on iterative deepening
    pub max_depth: Option<u32>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            heuristic: Heuristic::default(),
            iterative: true,
            method: SearchMethod::Minimax,
            timeout_ms: 10,
            max_depth: None,
        }
    }
}

impl AgentConfig {
    /// Fixed-depth search with the given method.
    pub fn fixed(method: SearchMethod, search_depth: u32, heuristic: Heuristic) -> Self {
        Self {
            search_depth,
            heuristic,
            iterative: false,
            method,
            ..Default::default()
        }
    }

    /// Iterative deepening with the given method.
    pub fn iterative(method: SearchMethod, heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            iterative: true,
            method,
            ..Default::default()
        }
    }

    /// The clock threshold below which searches abort.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::Validation("search_depth must be > 0".into()));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::Validation("max_depth must be > 0".into()));
        }
        Ok(())
    }
}
