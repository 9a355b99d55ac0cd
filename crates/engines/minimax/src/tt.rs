//! Transposition table for caching minimax values.
//!
//! Positions are looked up by their canonical [`BoardKey`], so a position
//! reached through different move orders is searched once.
//!
//! Two storage modes are supported:
//!
//! - [`TableMode::Bounded`] keys entries by board, depth and side to move, and
//!   records whether the stored score is exact or only a bound produced by an
//!   alpha-beta cutoff. A probe answers only when the entry is exact or its
//!   bound already decides the current window, which keeps the root value
//!   identical to plain minimax.
//! - [`TableMode::ContentOnly`] keys entries by board contents alone and returns
//!   whatever score was stored, regardless of the window or depth it was
//!   computed under. Cheaper, but cached cutoff bounds are reused as if exact,
//!   so root values can drift from the true minimax value.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use ttt_core::{BoardKey, Score};

/// How entries are keyed and when they may answer a probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableMode {
    /// Keyed by position, depth and side to move, with bound kinds
    #[default]
    Bounded,
    /// Keyed by position only; every stored score is trusted
    ContentOnly,
}

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Exact score - the node was searched inside its window
    Exact,
    /// Lower bound - true value >= stored score (fail high)
    Lower,
    /// Upper bound - true value <= stored score (fail low)
    Upper,
}

impl Bound {
    /// Classifies `score` against the window the node was entered with.
    pub fn classify(score: Score, alpha: Score, beta: Score) -> Bound {
        if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    score: Score,
    bound: Bound,
}

/// Cache of previously searched positions, owned by one engine.
#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<(BoardKey, u8, bool), Entry>,
    mode: TableMode,
    capacity: Option<usize>,
    hits: u64,
    rejected: u64,
}

impl TranspositionTable {
    pub fn new(mode: TableMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Table that stops accepting new positions once it holds `capacity` entries.
    pub fn with_capacity(mode: TableMode, capacity: Option<usize>) -> Self {
        Self {
            mode,
            capacity,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> TableMode {
        self.mode
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Probes answered from the table since the last clear.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Stores dropped because the table was full.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.rejected = 0;
    }

    fn slot(&self, key: BoardKey, depth: u8, maximizing: bool) -> (BoardKey, u8, bool) {
        match self.mode {
            TableMode::Bounded => (key, depth, maximizing),
            TableMode::ContentOnly => (key, 0, false),
        }
    }

    /// Returns a stored score that is valid for the window `(alpha, beta)`.
    pub fn probe(
        &mut self,
        key: BoardKey,
        depth: u8,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Option<Score> {
        let entry = *self.entries.get(&self.slot(key, depth, maximizing))?;
        let usable = match (self.mode, entry.bound) {
            (TableMode::ContentOnly, _) | (_, Bound::Exact) => true,
            (TableMode::Bounded, Bound::Lower) => entry.score >= beta,
            (TableMode::Bounded, Bound::Upper) => entry.score <= alpha,
        };
        if usable {
            self.hits += 1;
            Some(entry.score)
        } else {
            None
        }
    }

    pub fn store(
        &mut self,
        key: BoardKey,
        depth: u8,
        maximizing: bool,
        score: Score,
        bound: Bound,
    ) {
        let slot = self.slot(key, depth, maximizing);
        if let Some(cap) = self.capacity {
            if self.entries.len() >= cap && !self.entries.contains_key(&slot) {
                self.rejected += 1;
                return;
            }
        }
        self.entries.insert(slot, Entry { score, bound });
    }
}

/// Access to a score cache from inside the recursive search.
///
/// The single-threaded search owns its table outright; parallel root search
/// goes through [`SharedTable`], which takes the lock for every operation.
pub trait ScoreStore {
    fn probe(
        &mut self,
        key: BoardKey,
        depth: u8,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Option<Score>;
    fn store(
        &mut self,
        key: BoardKey,
        depth: u8,
        maximizing: bool,
        score: Score,
        bound: Bound,
    );
}

impl ScoreStore for TranspositionTable {
    fn probe(
        &mut self,
        key: BoardKey,
        depth: u8,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Option<Score> {
        TranspositionTable::probe(self, key, depth, maximizing, alpha, beta)
    }

    fn store(
        &mut self,
        key: BoardKey,
        depth: u8,
        maximizing: bool,
        score: Score,
        bound: Bound,
    ) {
        TranspositionTable::store(self, key, depth, maximizing, score, bound)
    }
}

impl<T: ScoreStore + ?Sized> ScoreStore for &mut T {
    fn probe(
        &mut self,
        key: BoardKey,
        depth: u8,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Option<Score> {
        (**self).probe(key, depth, maximizing, alpha, beta)
    }

    fn store(
        &mut self,
        key: BoardKey,
        depth: u8,
        maximizing: bool,
        score: Score,
        bound: Bound,
    ) {
        (**self).store(key, depth, maximizing, score, bound)
    }
}

/// A table shared between threads behind a mutex.
#[derive(Debug, Clone, Copy)]
pub struct SharedTable<'a>(pub &'a Mutex<TranspositionTable>);

impl ScoreStore for SharedTable<'_> {
    fn probe(
        &mut self,
        key: BoardKey,
        depth: u8,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Option<Score> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .probe(key, depth, maximizing, alpha, beta)
    }

    fn store(
        &mut self,
        key: BoardKey,
        depth: u8,
        maximizing: bool,
        score: Score,
        bound: Bound,
    ) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .store(key, depth, maximizing, score, bound)
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
