//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tt::TableMode;

/// How long table entries live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableScope {
    /// Kept for the engine's lifetime (cleared only by `new_game`)
    #[default]
    Persistent,
    /// Cleared at the start of every move selection
    PerMove,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("jitter must be a finite, non-negative number (got {0})")]
    InvalidJitter(f64),

    #[error("invalid value '{value}' for option {name}")]
    InvalidValue { name: String, value: String },

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Settings for [`crate::MinimaxEngine`].
///
/// Every field has a default, so a TOML `[minimax]` table only needs the keys
/// it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    /// Depth horizon in plies below the root move (None = exhaustive)
    pub max_depth: Option<u8>,
    /// Leaf perturbation amplitude; 0 disables it
    pub jitter: f64,
    /// Seed for the perturbation (None = seeded from the OS)
    pub seed: Option<u64>,
    /// Alpha-beta cutoffs; off only for equivalence testing
    pub pruning: bool,
    pub table_mode: TableMode,
    pub table_scope: TableScope,
    /// Maximum number of table entries (None = unbounded)
    pub table_capacity: Option<usize>,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            jitter: 0.0,
            seed: None,
            pruning: true,
            table_mode: TableMode::Bounded,
            table_scope: TableScope::Persistent,
            table_capacity: None,
        }
    }
}

impl MinimaxConfig {
    /// The unmodified search: content-keyed table that persists across moves.
    pub fn reference() -> Self {
        Self {
            table_mode: TableMode::ContentOnly,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(ConfigError::InvalidJitter(self.jitter));
        }
        Ok(())
    }

    /// Applies one named option, as sent by a driver's `setoption` command.
    ///
    /// Option names are case-insensitive. `none` clears optional values.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();

        match name.to_ascii_lowercase().as_str() {
            "maxdepth" | "max_depth" => {
                self.max_depth = parse_optional(value).map_err(|_| invalid())?;
            }
            "jitter" => {
                let jitter: f64 = value.parse().map_err(|_| invalid())?;
                if !jitter.is_finite() || jitter < 0.0 {
                    return Err(ConfigError::InvalidJitter(jitter));
                }
                self.jitter = jitter;
            }
            "seed" => {
                self.seed = parse_optional(value).map_err(|_| invalid())?;
            }
            "pruning" => {
                self.pruning = value.parse().map_err(|_| invalid())?;
            }
            "tablemode" | "table_mode" => {
                self.table_mode = match value.to_ascii_lowercase().as_str() {
                    "bounded" => TableMode::Bounded,
                    "content_only" | "contentonly" => TableMode::ContentOnly,
                    _ => return Err(invalid()),
                };
            }
            "tablescope" | "table_scope" => {
                self.table_scope = match value.to_ascii_lowercase().as_str() {
                    "persistent" => TableScope::Persistent,
                    "per_move" | "permove" => TableScope::PerMove,
                    _ => return Err(invalid()),
                };
            }
            "tablecapacity" | "table_capacity" => {
                self.table_capacity = parse_optional(value).map_err(|_| invalid())?;
            }
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}

fn parse_optional<T: std::str::FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    if value.eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
