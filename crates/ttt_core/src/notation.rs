use crate::{board::Board, error::BoardError, types::*};

pub fn move_to_text(mv: Move) -> String {
    mv.to_string()
}

/// Parses `"<row>,<col>"` and checks the cell against the board.
///
/// The move must be on the board and the cell must be empty.
pub fn parse_move(board: &Board, txt: &str) -> Result<Move, BoardError> {
    let invalid = || BoardError::InvalidMoveText {
        text: txt.to_string(),
    };
    let (row, col) = txt.trim().split_once(',').ok_or_else(invalid)?;
    let row: usize = row.trim().parse().map_err(|_| invalid())?;
    let col: usize = col.trim().parse().map_err(|_| invalid())?;

    if !board.in_bounds(row, col) {
        return Err(BoardError::OutOfBounds {
            row,
            col,
            size: board.size(),
        });
    }
    let mv = Move::new(row as u8, col as u8);
    if !board.is_empty_at(mv) {
        return Err(BoardError::Occupied { row, col });
    }
    Ok(mv)
}

/// Applies `position` arguments: `empty [size]` or a cell string such as `XO_/_O_/__X`.
pub fn set_board_from_text(board: &mut Board, args: &[&str]) -> Result<(), BoardError> {
    match args {
        [] | ["empty"] => {
            *board = Board::new(board.size())?;
        }
        ["empty", size] => {
            let size = size.parse().map_err(|_| BoardError::InvalidSizeText {
                text: size.to_string(),
            })?;
            *board = Board::new(size)?;
        }
        cells => {
            *board = cells.concat().parse()?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
