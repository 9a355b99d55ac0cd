//! Canonical position keys.
//!
//! A board key packs the cell contents into a base-3 number: cell `i` contributes
//! `digit * 3^i`, where the digit is 0 for empty, 1 for a player mark and 2 for a
//! bot mark. The encoding is exact (no collisions) and only depends on what is on
//! the board, so two move orders that reach the same position share a key.
//!
//! Like a Zobrist hash the key is updated incrementally: placing a mark adds its
//! term and clearing the cell subtracts it again, so make/undo costs O(1).
//!
//! Rotations and reflections are deliberately not folded together.

use crate::types::{MAX_CELLS, Mark};

/// Canonical encoding of a board's cell contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardKey(pub u128);

/// Powers of three, one per cell index.
pub struct KeyTable {
    pub powers: [u128; MAX_CELLS],
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTable {
    /// Computed at compile time; 3^63 is the largest entry and fits in a `u128`.
    pub const fn new() -> Self {
        let mut powers = [0u128; MAX_CELLS];
        let mut value = 1u128;
        let mut i = 0;
        while i < MAX_CELLS {
            powers[i] = value;
            value *= 3;
            i += 1;
        }
        KeyTable { powers }
    }

    /// Key contribution of `mark` sitting on cell `index`.
    #[inline(always)]
    pub fn term(&self, mark: Mark, index: usize) -> u128 {
        mark.digit() * self.powers[index]
    }
}

pub static KEYS: KeyTable = KeyTable::new();

impl BoardKey {
    #[inline(always)]
    pub fn with_mark(self, mark: Mark, index: usize) -> Self {
        BoardKey(self.0 + KEYS.term(mark, index))
    }

    #[inline(always)]
    pub fn without_mark(self, mark: Mark, index: usize) -> Self {
        BoardKey(self.0 - KEYS.term(mark, index))
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod key_tests;
