//! Error types for the tournament crate

use std::path::PathBuf;

use minimax_engine::ConfigError;
use thiserror::Error;
use ttt_core::BoardError;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TournamentError {
    #[error("unknown engine '{0}' (expected minimax, reference, random or random:<seed>)")]
    UnknownEngine(String),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("invalid engine configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed config file: {0}")]
    Toml(#[from] toml::de::Error),
}
