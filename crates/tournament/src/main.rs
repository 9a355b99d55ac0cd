//! Tournament CLI
//!
//! Run matches between engines and report saved results.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tournament::{create_engine, MatchRunner, TournamentConfig, TournamentResults};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe tournament runner
#[derive(Parser, Debug)]
#[command(name = "tournament")]
#[command(about = "Play tic-tac-toe engines against each other", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a match between two engines
    Match {
        /// First engine: minimax, reference, random or random:<seed>
        engine1: String,

        /// Second engine
        engine2: String,

        /// TOML file with [match] and [minimax] sections
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of games (overrides the config file)
        #[arg(short, long)]
        games: Option<u32>,

        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Search horizon in plies (overrides the config file)
        #[arg(short, long)]
        depth: Option<u8>,

        /// Write results as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the report for a saved results file
    Report {
        /// Results file written by `match --output`
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Match {
            engine1,
            engine2,
            config,
            games,
            size,
            depth,
            output,
        } => run_match(&engine1, &engine2, config, games, size, depth, output),
        Command::Report { path } => {
            let results = TournamentResults::load(&path)
                .with_context(|| format!("loading {}", path.display()))?;
            results.print_report();
            Ok(())
        }
    }
}

fn run_match(
    engine1_spec: &str,
    engine2_spec: &str,
    config_path: Option<PathBuf>,
    games: Option<u32>,
    size: Option<usize>,
    depth: Option<u8>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => TournamentConfig::load(path)?,
        None => TournamentConfig::default(),
    };
    if let Some(games) = games {
        config.match_config.num_games = games;
    }
    if let Some(size) = size {
        config.match_config.board_size = size;
    }
    if depth.is_some() {
        config.match_config.max_depth = depth;
    }

    let mut engine1 = create_engine(engine1_spec, &config.minimax)?;
    let mut engine2 = create_engine(engine2_spec, &config.minimax)?;

    info!(
        engine1 = engine1_spec,
        engine2 = engine2_spec,
        games = config.match_config.num_games,
        size = config.match_config.board_size,
        "starting match"
    );

    let runner = MatchRunner::new(config.match_config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    let mut results = TournamentResults::new(
        &format!("{engine1_spec} vs {engine2_spec}"),
        vec![engine1_spec.to_string(), engine2_spec.to_string()],
        config.match_config,
    );
    results.add_match(engine1_spec, engine2_spec, result);
    results.print_report();

    if let Some(path) = output {
        results.save(&path)?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}
