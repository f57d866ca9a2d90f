//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::TournamentConfig;
use crate::error::ResultsError;
use crate::match_runner::MatchResult;

/// Complete tournament results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Agents under test, in report order
    pub participants: Vec<String>,
    /// All match results, one per (test agent, opponent) pairing
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub agent: String,
    pub opponent: String,
    /// From `agent`'s perspective
    pub result: MatchResult,
}

impl TournamentResults {
    pub fn new(config: TournamentConfig) -> Self {
        Self {
            name: config.name.clone(),
            participants: config.test_agents.iter().map(|s| s.name.clone()).collect(),
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, agent: &str, opponent: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            agent: agent.to_string(),
            opponent: opponent.to_string(),
            result,
        });
    }

    /// Combined result of every match `agent` played
    pub fn totals(&self, agent: &str) -> MatchResult {
        self.matches
            .iter()
            .filter(|entry| entry.agent == agent)
            .fold(MatchResult::new(), |mut total, entry| {
                total.wins += entry.result.wins;
                total.losses += entry.result.losses;
                total.forfeits += entry.result.forfeits;
                total.opponent_forfeits += entry.result.opponent_forfeits;
                total
            })
    }

    /// Overall win rate of `agent` across all its matches
    pub fn win_rate(&self, agent: &str) -> f64 {
        self.totals(agent).win_rate()
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Config: {}x{} board, {} openings/match, {}\n\n",
            self.config.board_width,
            self.config.board_height,
            self.config.num_matches,
            match self.config.time_limit() {
                Some(limit) => format!("{} ms/move", limit.as_millis()),
                None => "no time limit".to_string(),
            }
        ));

        for agent in &self.participants {
            report.push_str(&format!("*** {} ***\n", agent));
            report.push_str(&format!(
                "{:<20} {:>5}-{:<5} {:>9}\n",
                "Opponent", "W", "L", "Forfeits"
            ));
            report.push_str(&"-".repeat(42));
            report.push('\n');

            for entry in self.matches.iter().filter(|e| &e.agent == agent) {
                report.push_str(&format!(
                    "{:<20} {:>5}-{:<5} {:>9}\n",
                    entry.opponent, entry.result.wins, entry.result.losses, entry.result.forfeits
                ));
            }

            report.push_str(&format!(
                "Win rate: {:.1}%\n\n",
                self.win_rate(agent) * 100.0
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
