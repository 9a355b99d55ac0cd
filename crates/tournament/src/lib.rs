//! Tournament runner for tic-tac-toe engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines, alternating who moves first
//! - Saving match results as JSON and rendering text reports
//! - Loading match and engine settings from TOML
//!
//! # Usage
//!
//! ```bash
//! # Minimax against a random mover, 100 games
//! cargo run -p tournament -- match minimax random --games 100
//!
//! # Print a saved report
//! cargo run -p tournament -- report results.json
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::TournamentError;
pub use match_runner::*;
pub use results::*;
