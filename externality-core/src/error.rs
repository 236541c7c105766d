//! Error types for the economic model and its configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Misuse of the round-settlement API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A settlement was attempted after the last round was played.
    #[error("game is over: round {round} exceeds the {total_rounds} rounds of this play-through")]
    GameOver { round: u32, total_rounds: u32 },
}

/// Failure to load or validate a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
