//! Match runner for playing games between engines

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ttt_core::{evaluate, Board, Engine, Mark, Outcome, SearchLimits, DEFAULT_SIZE};

use crate::error::TournamentError;
use crate::results::{GameRecord, GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Side length of the board
    pub board_size: usize,
    /// Horizon handed to engines on every move (None = exhaustive)
    pub max_depth: Option<u8>,
    /// Whether to alternate who moves first each game
    pub alternate_first: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            board_size: DEFAULT_SIZE,
            max_depth: None,
            alternate_first: true,
        }
    }
}

impl MatchConfig {
    fn search_limits(&self) -> SearchLimits {
        match self.max_depth {
            Some(depth) => SearchLimits::depth(depth),
            None => SearchLimits::exhaustive(),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchResult, TournamentError> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_first || game_num % 2 == 0;

            let game = if engine1_first {
                self.play_game(engine1, engine2)?
            } else {
                let mut game = self.play_game(engine2, engine1)?;
                game.engine1_first = false;
                game.result = game.result.reversed();
                game
            };

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                first = if engine1_first { engine1.name() } else { engine2.name() },
                result = game.result.notation(),
                "game finished"
            );
            result.record(game);
        }

        info!(
            engine1 = engine1.name(),
            engine2 = engine2.name(),
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            "match finished"
        );
        Ok(result)
    }

    /// Play a single game, result from the first mover's perspective.
    ///
    /// The first mover's marks are [`Mark::Bot`] on the game board; the second
    /// mover is shown the flipped board so it also places `Bot` marks. An
    /// engine that returns no move or an illegal one forfeits.
    fn play_game(
        &self,
        first: &mut dyn Engine,
        second: &mut dyn Engine,
    ) -> Result<GameRecord, TournamentError> {
        let mut board = Board::new(self.config.board_size)?;
        first.new_game();
        second.new_game();

        let limits = self.config.search_limits();
        let mut moves = Vec::new();
        let mut first_to_move = true;

        loop {
            let result = match evaluate(&board) {
                Outcome::BotWins => Some(GameResult::Win),
                Outcome::PlayerWins => Some(GameResult::Loss),
                Outcome::Drawn => Some(GameResult::Draw),
                Outcome::Undecided => None,
            };
            if let Some(result) = result {
                return Ok(GameRecord {
                    engine1_first: true,
                    moves,
                    result,
                    forfeit: None,
                });
            }

            let (searched, mark) = if first_to_move {
                (first.search(&board, limits), Mark::Bot)
            } else {
                (second.search(&board.flipped(), limits), Mark::Player)
            };
            let name = if first_to_move { first.name() } else { second.name() };

            let placed = match searched.best_move {
                Some(mv) => board
                    .try_place(usize::from(mv.row), usize::from(mv.col), mark)
                    .map_err(|err| err.to_string()),
                None => Err("no move on a board with empty cells".to_string()),
            };

            match placed {
                Ok(mv) => {
                    debug!(engine = name, mv = %mv, nodes = searched.nodes, "move played");
                    moves.push(mv.to_string());
                }
                Err(reason) => {
                    warn!(engine = name, %reason, "engine forfeits");
                    let result = if first_to_move {
                        GameResult::Loss
                    } else {
                        GameResult::Win
                    };
                    return Ok(GameRecord {
                        engine1_first: true,
                        moves,
                        result,
                        forfeit: Some(format!("{name}: {reason}")),
                    });
                }
            }

            first_to_move = !first_to_move;
        }
    }
}

/// Quick utility to run a single exhaustive match on the default board
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> Result<MatchResult, TournamentError> {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
