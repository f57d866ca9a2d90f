use std::path::PathBuf;

use isolation_core::BoardError;

/// Errors that can occur when loading a tournament configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("agent '{name}': {source}")]
    Agent {
        name: String,
        source: search_engine::ConfigError,
    },
}

/// Errors that can occur when saving or loading tournament results.
#[derive(Debug, thiserror::Error)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that abort a tournament run.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}
