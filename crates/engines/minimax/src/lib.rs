//! Minimax Tic-tac-toe Engine
//!
//! Exhaustive minimax with alpha-beta pruning and a transposition table.
//! On a 3x3 board it plays perfectly: it never loses, takes the quickest win
//! available and delays a forced loss as long as possible.

mod config;
mod jitter;
#[cfg(feature = "parallel")]
mod parallel;
mod search;
mod tt;

use tracing::{debug, warn};
use ttt_core::{Board, BoardError, Engine, Move, Score, SearchLimits, SearchResult};

pub use config::{ConfigError, MinimaxConfig, TableScope};
pub use jitter::{Jitter, DEFAULT_AMPLITUDE};
pub use search::{pick_best_move, Searcher};
pub use tt::{Bound, ScoreStore, SharedTable, TableMode, TranspositionTable};

/// Engine that picks the game-theoretically optimal move for the bot.
///
/// The engine owns its transposition table; by default entries survive
/// between moves (and games, until [`Engine::new_game`]), which makes repeated
/// searches of known positions nearly free.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    pub(crate) config: MinimaxConfig,
    pub(crate) table: TranspositionTable,
    pub(crate) jitter: Jitter,
    /// Node counter for the last move selection
    pub(crate) nodes: u64,
    /// Horizon the table contents were computed with
    table_horizon: Option<u8>,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxEngine {
    pub fn new() -> Self {
        let config = MinimaxConfig::default();
        Self {
            table: TranspositionTable::with_capacity(config.table_mode, config.table_capacity),
            jitter: Jitter::disabled(),
            nodes: 0,
            table_horizon: config.max_depth,
            config,
        }
    }

    pub fn with_config(config: MinimaxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            table: TranspositionTable::with_capacity(config.table_mode, config.table_capacity),
            jitter: Jitter::new(config.jitter, config.seed),
            nodes: 0,
            table_horizon: config.max_depth,
            config,
        })
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    pub fn clear_table(&mut self) {
        self.table.clear();
    }

    /// Search nodes visited since the last reset.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Best cell for the bot, or None when the board is full.
    ///
    /// The board is trusted as is; see [`MinimaxEngine::try_best_move`] for a
    /// validating variant.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        self.best_move_scored(board).map(|(mv, _)| mv)
    }

    /// Best cell for the bot together with its minimax value.
    pub fn best_move_scored(&mut self, board: &Board) -> Option<(Move, Score)> {
        let horizon = self.config.max_depth;
        self.select(board, horizon)
    }

    /// Like [`MinimaxEngine::best_move`], but rejects boards whose mark counts
    /// cannot come from alternating play.
    pub fn try_best_move(&mut self, board: &Board) -> Result<Option<Move>, BoardError> {
        board.validate()?;
        Ok(self.best_move(board))
    }

    /// Raw minimax value of `board`, using and filling the engine's table.
    ///
    /// `depth` is the number of plies already played below the root move and
    /// `maximizing` is true when the bot is to move. The board is restored
    /// before returning. Visited nodes are added to [`MinimaxEngine::nodes`].
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Score {
        self.sync_horizon(self.config.max_depth);
        let mut searcher = Searcher::new(
            &mut self.table,
            &mut self.jitter,
            self.config.max_depth,
            self.config.pruning,
        );
        let score = searcher.minimax(board, depth, maximizing, alpha, beta);
        self.nodes += searcher.nodes;
        score
    }

    /// Replaces the configuration, rebuilding the table and the jitter source
    /// when the settings they depend on change.
    pub fn reconfigure(&mut self, config: MinimaxConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if config.table_mode != self.config.table_mode
            || config.table_capacity != self.config.table_capacity
        {
            self.table = TranspositionTable::with_capacity(config.table_mode, config.table_capacity);
        }
        if config.jitter != self.config.jitter || config.seed != self.config.seed {
            self.jitter = Jitter::new(config.jitter, config.seed);
        }
        self.config = config;
        Ok(())
    }

    fn sync_horizon(&mut self, horizon: Option<u8>) {
        // Scores cut off at one horizon are not comparable with another's.
        if horizon != self.table_horizon {
            self.table.clear();
            self.table_horizon = horizon;
        }
    }

    /// Prepares the table and the node counter for a move selection.
    pub(crate) fn prepare_table(&mut self, horizon: Option<u8>) {
        self.sync_horizon(horizon);
        if self.config.table_scope == TableScope::PerMove {
            self.table.clear();
        }
        self.nodes = 0;
    }

    fn select(&mut self, board: &Board, horizon: Option<u8>) -> Option<(Move, Score)> {
        self.prepare_table(horizon);
        let rejected_before = self.table.rejected();

        let mut searcher = Searcher::new(
            &mut self.table,
            &mut self.jitter,
            horizon,
            self.config.pruning,
        );
        let best = pick_best_move(board, &mut searcher);
        self.nodes = searcher.nodes;

        debug!(
            best_move = ?best.map(|(mv, _)| mv.to_tuple()),
            score = ?best.map(|(_, s)| s),
            nodes = self.nodes,
            table_entries = self.table.len(),
            table_hits = self.table.hits(),
            "minimax move selected"
        );
        if self.table.rejected() > rejected_before {
            warn!(
                capacity = ?self.table.capacity(),
                rejected = self.table.rejected() - rejected_before,
                "transposition table full, positions not cached"
            );
        }
        best
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        let horizon = limits.max_depth.or(self.config.max_depth);
        let best = self.select(board, horizon);

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s).unwrap_or(0.0),
            max_depth: horizon,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.table.clear();
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        let mut config = self.config.clone();
        let applied = config
            .set_option(name, value)
            .and_then(|()| self.reconfigure(config));
        match applied {
            Ok(()) => true,
            Err(e) => {
                warn!(option = name, value, error = %e, "option rejected");
                false
            }
        }
    }
}
