use std::fmt;

/// Largest supported board side. `N * N` cells must fit the base-3 key in a `u128`.
pub const MAX_SIZE: usize = 8;
pub const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE;

/// Side of the reference board.
pub const DEFAULT_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Player,
    Bot,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::Player => Mark::Bot,
            Mark::Bot => Mark::Player,
        }
    }

    /// Base-3 digit used by the board key (0 is reserved for empty).
    pub fn digit(self) -> u128 {
        match self {
            Mark::Player => 1,
            Mark::Bot => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Bot => 'O',
        }
    }
}

/// One square of the grid: empty, or holding a mark.
pub type Cell = Option<Mark>;

pub fn cell_symbol(cell: Cell) -> char {
    cell.map_or('_', Mark::symbol)
}

pub fn parse_cell(ch: char) -> Option<Cell> {
    match ch {
        'X' | 'x' => Some(Some(Mark::Player)),
        'O' | 'o' => Some(Some(Mark::Bot)),
        '_' | '.' | '-' => Some(None),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: (index / size) as u8,
            col: (index % size) as u8,
        }
    }

    /// Row-major cell index on a board of the given side.
    #[inline]
    pub fn index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    pub fn to_tuple(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
