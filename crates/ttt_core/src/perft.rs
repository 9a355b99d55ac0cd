use crate::{board::Board, eval::winner, types::Mark};

/// Pure perft node count.
/// Counts move sequences of exactly `depth` plies from the current board.
/// A sequence that finishes the game early does not reach the horizon and
/// contributes nothing.
pub fn perft(board: &mut Board, to_move: Mark, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if winner(board).is_some() {
        return 0;
    }

    let moves: Vec<_> = board.empty_cells().collect();
    let mut nodes = 0u64;
    for mv in moves {
        board.place(mv, to_move);
        nodes += perft(board, to_move.other(), depth - 1);
        board.clear(mv);
    }
    nodes
}

/// Number of distinct complete games playable from this board.
pub fn count_games(board: &mut Board, to_move: Mark) -> u64 {
    if winner(board).is_some() || board.is_full() {
        return 1;
    }

    let moves: Vec<_> = board.empty_cells().collect();
    let mut games = 0u64;
    for mv in moves {
        board.place(mv, to_move);
        games += count_games(board, to_move.other());
        board.clear(mv);
    }
    games
}

/// Number of positions in the unpruned game tree, the root included.
pub fn count_nodes(board: &mut Board, to_move: Mark) -> u64 {
    if winner(board).is_some() || board.is_full() {
        return 1;
    }

    let moves: Vec<_> = board.empty_cells().collect();
    let mut nodes = 1u64;
    for mv in moves {
        board.place(mv, to_move);
        nodes += count_nodes(board, to_move.other());
        board.clear(mv);
    }
    nodes
}
