//! Search limits shared by every engine.

/// Limits an engine should respect for a single search.
///
/// Tic-tac-toe trees are small enough to search exhaustively, so the only
/// limit is an optional depth horizon counted in plies below the root move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Horizon in plies (None = search to the end of the game)
    pub max_depth: Option<u8>,
}

impl SearchLimits {
    /// Search every line to the end of the game.
    pub fn exhaustive() -> Self {
        Self { max_depth: None }
    }

    /// Stop and score the board once `depth` plies below the root move are reached.
    pub fn depth(depth: u8) -> Self {
        Self {
            max_depth: Some(depth),
        }
    }

    pub fn is_exhaustive(&self) -> bool {
        self.max_depth.is_none()
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
