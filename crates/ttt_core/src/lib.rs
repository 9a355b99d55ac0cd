pub mod board;
pub mod error;
pub mod eval;
pub mod key;
pub mod limits;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::BoardError;
pub use eval::*;
pub use key::{BoardKey, KEYS};
pub use limits::*;
pub use notation::*;
pub use perft::{count_games, count_nodes, perft};
pub use types::*;

/// Minimax value of a position from the bot's point of view.
///
/// Integral for exhaustive searches; leaf jitter makes it fractional.
pub type Score = f64;

// =============================================================================
// Engine trait: implemented by every player (minimax, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The best move found (None if the board is full)
    pub best_move: Option<Move>,
    /// Value of the best move from the mover's perspective
    pub score: Score,
    /// Depth horizon the search ran with (None = exhaustive)
    pub max_depth: Option<u8>,
    /// Number of search nodes visited
    pub nodes: u64,
}

/// Trait that all engines must implement.
///
/// The board handed to [`Engine::search`] is always from the mover's point of
/// view: the engine places [`Mark::Bot`] marks. Drivers playing an engine on the
/// other side pass [`Board::flipped`].
pub trait Engine: Send {
    /// Search the board with the given limits and return the chosen move.
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "ttt-solver"
    }

    /// Reset internal state for a new game (clear tables, counters, etc.)
    fn new_game(&mut self) {}

    /// Optional: Set a named option. Returns true if the option was recognized
    /// and the value accepted.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
