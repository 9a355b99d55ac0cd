use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;
use crate::key::BoardKey;
use crate::types::*;

/// An N x N tic-tac-toe grid, stored row-major.
///
/// `Board` is a small `Copy` value. Search code mutates a private copy with
/// [`Board::place`] / [`Board::clear`] and restores every trial move before
/// returning, so a caller's board never changes underneath it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    cells: [Cell; MAX_CELLS],
    key: BoardKey,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Empty 3x3 board.
    pub fn empty() -> Self {
        Self {
            size: DEFAULT_SIZE as u8,
            cells: [None; MAX_CELLS],
            key: BoardKey::default(),
        }
    }

    /// Empty board of the given side.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SIZE {
            return Err(BoardError::UnsupportedSize {
                size,
                max: MAX_SIZE,
            });
        }
        Ok(Self {
            size: size as u8,
            cells: [None; MAX_CELLS],
            key: BoardKey::default(),
        })
    }

    /// Builds a board from row-major cells; the side is inferred from the count.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, BoardError> {
        let size = (1..=MAX_SIZE)
            .find(|s| s * s == cells.len())
            .ok_or(BoardError::NotSquare { count: cells.len() })?;
        let mut board = Self::new(size)?;
        for (i, &cell) in cells.iter().enumerate() {
            if let Some(mark) = cell {
                board.place(Move::from_index(i, size), mark);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size() * self.size()
    }

    #[inline]
    pub fn key(&self) -> BoardKey {
        self.key
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells[..self.cell_count()]
    }

    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index(self.size())]
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size()
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv).is_none()
    }

    /// Puts `mark` on an empty cell. The cell must be empty.
    #[inline]
    pub fn place(&mut self, mv: Move, mark: Mark) {
        let index = mv.index(self.size());
        debug_assert!(self.cells[index].is_none(), "place on occupied cell {mv}");
        self.cells[index] = Some(mark);
        self.key = self.key.with_mark(mark, index);
    }

    /// Removes the mark from a cell, undoing a previous [`Board::place`].
    #[inline]
    pub fn clear(&mut self, mv: Move) {
        let index = mv.index(self.size());
        if let Some(mark) = self.cells[index].take() {
            self.key = self.key.without_mark(mark, index);
        }
    }

    /// Checked placement for input coming from outside the engine.
    pub fn try_place(&mut self, row: usize, col: usize, mark: Mark) -> Result<Move, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size(),
            });
        }
        let mv = Move::new(row as u8, col as u8);
        if !self.is_empty_at(mv) {
            return Err(BoardError::Occupied { row, col });
        }
        self.place(mv, mark);
        Ok(mv)
    }

    /// Empty cells in row-major scan order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        let size = self.size();
        self.cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(i, _)| Move::from_index(i, size))
    }

    pub fn has_empty(&self) -> bool {
        self.cells().iter().any(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        !self.has_empty()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells().iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Same position seen from the other side: every mark is swapped.
    pub fn flipped(&self) -> Self {
        let mut out = Self {
            size: self.size,
            cells: [None; MAX_CELLS],
            key: BoardKey::default(),
        };
        for (i, cell) in self.cells().iter().enumerate() {
            if let Some(mark) = cell {
                out.place(Move::from_index(i, self.size()), mark.other());
            }
        }
        out
    }

    /// Checks the turn invariant: the two mark counts differ by at most one.
    ///
    /// The search trusts its input, so this is only called at API boundaries.
    pub fn validate(&self) -> Result<(), BoardError> {
        let player = self.count(Mark::Player);
        let bot = self.count(Mark::Bot);
        if player.abs_diff(bot) > 1 {
            return Err(BoardError::MarkImbalance { player, bot });
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses cells written row-major as `X`, `O` and `_` (or `.`/`-`).
    /// Whitespace and `/` row separators are ignored, e.g. `"XO_/_O_/__X"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(MAX_CELLS);
        for (position, ch) in s.chars().enumerate() {
            if ch.is_whitespace() || ch == '/' {
                continue;
            }
            let cell = parse_cell(ch).ok_or(BoardError::InvalidCell {
                character: ch,
                position,
            })?;
            cells.push(cell);
        }
        Self::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells().chunks(self.size()).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &cell in chunk {
                write!(f, "{}", cell_symbol(cell))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
