//! `ttt_solver`: plays the bot side over stdin/stdout.
//!
//! Logs go to stderr so stdout carries protocol replies only.

mod session;

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use minimax_engine::{MinimaxConfig, MinimaxEngine};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ttt_core::Board;

use session::{Flow, Session};

/// Minimax tic-tac-toe solver speaking a line protocol
#[derive(Parser, Debug)]
#[command(name = "ttt_solver")]
#[command(version)]
struct Cli {
    /// TOML file with engine settings (max_depth, jitter, seed, table_mode, ...)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial board side length
    #[arg(short, long, default_value_t = ttt_core::DEFAULT_SIZE)]
    size: usize,
}

fn load_config(path: Option<&PathBuf>) -> Result<MinimaxConfig> {
    let Some(path) = path else {
        return Ok(MinimaxConfig::default());
    };
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let engine = MinimaxEngine::with_config(config)?;
    let mut session = Session::new(engine, Board::new(cli.size)?);
    info!(size = cli.size, "solver ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        match session.handle(&line, &mut stdout) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => {
                warn!(command = line.trim(), "{err:#}");
                println!("error: {err:#}");
            }
        }
    }
    Ok(())
}
