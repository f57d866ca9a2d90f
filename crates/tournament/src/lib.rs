//! Tournament Runner for Isolation agents
//!
//! This crate provides infrastructure for:
//! - Playing games between agents with per-move time limits and forfeits
//! - Round-robin tournaments of test agents against a roster of opponents
//! - Generating reports and saving results as JSON
//!
//! # Usage
//!
//! ```bash
//! # Run the default roster
//! cargo run -p tournament -- run
//!
//! # Run from a config file with more openings per pairing
//! cargo run -p tournament -- run configs/tournament.toml --matches 20
//! ```

mod config;
mod error;
mod match_runner;
mod results;
mod round_robin;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
pub use round_robin::run_tournament;
