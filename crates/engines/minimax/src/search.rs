//! Minimax search with alpha-beta pruning and a transposition table

use ttt_core::{evaluate, Board, Mark, Move, Outcome, Score, WIN_SCORE};

use crate::jitter::Jitter;
use crate::tt::{Bound, ScoreStore};

/// Recursive search state for one move selection.
///
/// The bot maximizes and the player minimizes. Scores are depth-biased:
/// a bot win found `d` plies below the root move is worth `10 - d` and a
/// player win `-10 + d`, so the bot prefers quick wins and slow losses.
pub struct Searcher<'a, S: ScoreStore> {
    table: S,
    jitter: &'a mut Jitter,
    max_depth: Option<u8>,
    pruning: bool,
    /// Number of `minimax` invocations, table hits included
    pub nodes: u64,
}

impl<'a, S: ScoreStore> Searcher<'a, S> {
    pub fn new(table: S, jitter: &'a mut Jitter, max_depth: Option<u8>, pruning: bool) -> Self {
        Self {
            table,
            jitter,
            max_depth,
            pruning,
            nodes: 0,
        }
    }

    /// Minimax value of `board` with `depth` plies already played below the
    /// root move. Every trial move is undone before returning.
    ///
    /// The table is consulted before the board is evaluated, so a cached
    /// position never reaches the terminal checks. Decided leaves and horizon
    /// leaves are not stored.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.nodes += 1;

        let key = board.key();
        if let Some(score) = self.table.probe(key, depth, maximizing, alpha, beta) {
            return score;
        }

        let outcome = evaluate(board);
        if outcome == Outcome::BotWins {
            return self.leaf_score(outcome, depth);
        }
        // The horizon is checked before player wins and draws.
        if self.max_depth == Some(depth) {
            return self.horizon_score(outcome, depth);
        }
        match outcome {
            Outcome::PlayerWins => return self.leaf_score(outcome, depth),
            Outcome::Drawn => return 0.0,
            Outcome::BotWins | Outcome::Undecided => {}
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mark = if maximizing { Mark::Bot } else { Mark::Player };
        let mut best = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };

        let size = board.size();
        for index in 0..board.cell_count() {
            if board.cell_at(index).is_some() {
                continue;
            }
            let mv = Move::from_index(index, size);

            board.place(mv, mark);
            let score = self.minimax(board, depth + 1, !maximizing, alpha, beta);
            board.clear(mv);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.pruning && beta <= alpha {
                break; // Cutoff
            }
        }

        let bound = Bound::classify(best, alpha_orig, beta_orig);
        self.table.store(key, depth, maximizing, best, bound);
        best
    }

    /// Depth-adjusted static score of a won or lost leaf, plus jitter.
    fn leaf_score(&mut self, outcome: Outcome, depth: u8) -> Score {
        let bias = Score::from(depth);
        let base = match outcome {
            Outcome::BotWins => Score::from(WIN_SCORE) - bias,
            Outcome::PlayerWins => -Score::from(WIN_SCORE) + bias,
            Outcome::Drawn | Outcome::Undecided => 0.0,
        };
        base + self.jitter.sample()
    }

    /// Score of any leaf cut off at the horizon: the static score minus the
    /// depth, plus jitter. Draws and undecided boards come out at `-depth`
    /// and a player win at `-10 - depth`.
    fn horizon_score(&mut self, outcome: Outcome, depth: u8) -> Score {
        Score::from(outcome.score()) - Score::from(depth) + self.jitter.sample()
    }
}

/// Scores every empty cell for the bot and returns the best one with its value.
///
/// Cells are tried in row-major order and a later cell only replaces the
/// current best when its score is strictly greater, so the first of several
/// equal moves wins. Returns None on a full board.
pub fn pick_best_move<S: ScoreStore>(
    board: &Board,
    searcher: &mut Searcher<'_, S>,
) -> Option<(Move, Score)> {
    let mut tmp = *board;
    let moves: Vec<Move> = tmp.empty_cells().collect();

    let mut best: Option<(Move, Score)> = None;
    for mv in moves {
        tmp.place(mv, Mark::Bot);
        let score = searcher.minimax(&mut tmp, 0, false, Score::NEG_INFINITY, Score::INFINITY);
        tmp.clear(mv);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
