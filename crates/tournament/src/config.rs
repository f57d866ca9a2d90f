//! Tournament configuration loaded from TOML

use std::path::Path;
use std::time::Duration;

use isolation_core::Agent;
use random_engine::RandomAgent;
use search_engine::{AgentConfig, Heuristic, SearchAgent, SearchMethod};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::match_runner::MatchConfig;

/// Which kind of agent an [`AgentSpec`] builds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Random,
    #[default]
    Search,
}

/// A named participant in the tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    #[serde(default)]
    pub kind: AgentKind,
    /// Search settings; ignored for random agents
    #[serde(default)]
    pub search: AgentConfig,
}

impl AgentSpec {
    pub fn random(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: AgentKind::Random,
            search: AgentConfig::default(),
        }
    }

    pub fn search(name: &str, search: AgentConfig) -> Self {
        Self {
            name: name.to_string(),
            kind: AgentKind::Search,
            search,
        }
    }

    /// Build a fresh agent. `seed` only affects random agents.
    pub fn build(&self, seed: u64) -> Result<Box<dyn Agent>, ConfigError> {
        match self.kind {
            AgentKind::Random => Ok(Box::new(RandomAgent::seeded(self.name.clone(), seed))),
            AgentKind::Search => {
                let agent = SearchAgent::new(self.name.clone(), self.search.clone())
                    .map_err(|source| ConfigError::Agent {
                        name: self.name.clone(),
                        source,
                    })?;
                Ok(Box::new(agent))
            }
        }
    }
}

/// Settings for a round-robin run between test agents and opponents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub name: String,
    pub board_width: u8,
    pub board_height: u8,
    /// Per-move time limit in milliseconds; 0 disables the limit
    pub time_limit_ms: u64,
    /// Openings per pairing; each is played once from each seat
    pub num_matches: u32,
    pub seed: u64,
    pub test_agents: Vec<AgentSpec>,
    pub opponents: Vec<AgentSpec>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        let fixed = AgentConfig::fixed;
        Self {
            name: "Isolation round robin".to_string(),
            board_width: 7,
            board_height: 7,
            time_limit_ms: 150,
            num_matches: 5,
            seed: 0,
            test_agents: vec![
                AgentSpec::search(
                    "ID_Improved",
                    AgentConfig::iterative(SearchMethod::AlphaBeta, Heuristic::Improved),
                ),
                AgentSpec::search(
                    "Student",
                    AgentConfig::iterative(SearchMethod::AlphaBeta, Heuristic::Adaptive),
                ),
            ],
            opponents: vec![
                AgentSpec::random("Random"),
                AgentSpec::search("MM_Null", fixed(SearchMethod::Minimax, 3, Heuristic::Null)),
                AgentSpec::search("MM_Open", fixed(SearchMethod::Minimax, 3, Heuristic::OpenMove)),
                AgentSpec::search(
                    "MM_Improved",
                    fixed(SearchMethod::Minimax, 3, Heuristic::Improved),
                ),
                AgentSpec::search("AB_Null", fixed(SearchMethod::AlphaBeta, 5, Heuristic::Null)),
                AgentSpec::search(
                    "AB_Open",
                    fixed(SearchMethod::AlphaBeta, 5, Heuristic::OpenMove),
                ),
                AgentSpec::search(
                    "AB_Improved",
                    fixed(SearchMethod::AlphaBeta, 5, Heuristic::Improved),
                ),
            ],
        }
    }
}

impl TournamentConfig {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width < 3 || self.board_height < 3 {
            return Err(ConfigError::Validation(format!(
                "board must be at least 3x3, got {}x{}",
                self.board_width, self.board_height
            )));
        }
        if self.num_matches == 0 {
            return Err(ConfigError::Validation("num_matches must be > 0".into()));
        }
        if self.test_agents.is_empty() || self.opponents.is_empty() {
            return Err(ConfigError::Validation(
                "need at least one test agent and one opponent".into(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for spec in self.test_agents.iter().chain(&self.opponents) {
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate agent name '{}'",
                    spec.name
                )));
            }
            if spec.kind == AgentKind::Search {
                spec.search.validate().map_err(|source| ConfigError::Agent {
                    name: spec.name.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    pub fn time_limit(&self) -> Option<Duration> {
        (self.time_limit_ms > 0).then(|| Duration::from_millis(self.time_limit_ms))
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            board_width: self.board_width,
            board_height: self.board_height,
            time_limit: self.time_limit(),
        }
    }
}
