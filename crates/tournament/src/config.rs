//! TOML configuration and engine construction.
//!
//! ```toml
//! [match]
//! num_games = 20
//! board_size = 3
//!
//! [minimax]
//! jitter = 0.01
//! seed = 7
//! ```

use std::path::Path;

use minimax_engine::{MinimaxConfig, MinimaxEngine, TableMode};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use ttt_core::Engine;

use crate::error::TournamentError;
use crate::match_runner::MatchConfig;

/// Contents of a tournament config file. Missing sections use defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    #[serde(rename = "match")]
    pub match_config: MatchConfig,
    /// Settings for every minimax engine in the match
    pub minimax: MinimaxConfig,
}

impl TournamentConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, TournamentError> {
        let config: Self = toml::from_str(text)?;
        config.minimax.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let text = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Builds an engine from a command-line name.
///
/// - `minimax`: configured minimax engine
/// - `reference`: same, with the content-keyed table
/// - `random` or `random:<seed>`
pub fn create_engine(
    spec: &str,
    minimax: &MinimaxConfig,
) -> Result<Box<dyn Engine>, TournamentError> {
    let (name, arg) = match spec.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (spec, None),
    };

    match (name.to_lowercase().as_str(), arg) {
        ("minimax" | "mm", None) => Ok(Box::new(MinimaxEngine::with_config(minimax.clone())?)),
        ("reference" | "ref", None) => {
            let config = MinimaxConfig {
                table_mode: TableMode::ContentOnly,
                ..minimax.clone()
            };
            Ok(Box::new(MinimaxEngine::with_config(config)?))
        }
        ("random", None) => Ok(Box::new(RandomEngine::new())),
        ("random", Some(seed)) => match seed.parse() {
            Ok(seed) => Ok(Box::new(RandomEngine::seeded(seed))),
            Err(_) => Err(TournamentError::UnknownEngine(spec.to_string())),
        },
        _ => Err(TournamentError::UnknownEngine(spec.to_string())),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
