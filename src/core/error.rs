//! Error types.

use thiserror::Error;

/// Errors loading a [`GameConfig`](super::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Operations the game refuses to perform.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("round has not started")]
    NotStarted,
    #[error("it is the scripted opponent's turn")]
    ScriptedTurn,
    #[error("session is closed")]
    SessionClosed,
    #[error("dice faces must be in 1..=6, got ({first}, {second})")]
    InvalidDice { first: u8, second: u8 },
}
