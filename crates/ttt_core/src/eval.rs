//! Terminal-state evaluation.

use crate::{board::Board, types::*};

/// Score of a bot win before depth adjustment; a player win is the negation.
pub const WIN_SCORE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    BotWins,
    PlayerWins,
    Drawn,
    Undecided,
}

impl Outcome {
    /// Static score from the bot's point of view.
    pub fn score(self) -> i32 {
        match self {
            Outcome::BotWins => WIN_SCORE,
            Outcome::PlayerWins => -WIN_SCORE,
            Outcome::Drawn | Outcome::Undecided => 0,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

/// Evaluates the board from the bot's point of view.
///
/// Lines are scanned rows first, then columns, then the main diagonal and the
/// anti-diagonal; the first complete line decides. Without a winner, a full
/// board is a draw and anything else is still in play.
pub fn evaluate(board: &Board) -> Outcome {
    match winner(board) {
        Some(Mark::Bot) => Outcome::BotWins,
        Some(Mark::Player) => Outcome::PlayerWins,
        None if board.is_full() => Outcome::Drawn,
        None => Outcome::Undecided,
    }
}

/// Mark owning the first complete line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    let n = board.size();

    for row in 0..n {
        if let Some(mark) = line_owner(board, (0..n).map(|col| row * n + col)) {
            return Some(mark);
        }
    }
    for col in 0..n {
        if let Some(mark) = line_owner(board, (0..n).map(|row| row * n + col)) {
            return Some(mark);
        }
    }
    if let Some(mark) = line_owner(board, (0..n).map(|i| i * n + i)) {
        return Some(mark);
    }
    line_owner(board, (0..n).map(|i| i * n + (n - 1 - i)))
}

fn line_owner(board: &Board, mut cells: impl Iterator<Item = usize>) -> Option<Mark> {
    let first = board.cell_at(cells.next()?)?;
    cells
        .all(|i| board.cell_at(i) == Some(first))
        .then_some(first)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
