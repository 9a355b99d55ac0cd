//! Parallel root-move search.
//!
//! Root moves are independent subtrees: each worker gets its own copy of the
//! board, its own jitter stream and its own node counter. The transposition
//! table is shared and every probe or store takes its lock.

use std::sync::{Mutex, PoisonError};

use rayon::prelude::*;
use tracing::debug;
use ttt_core::{Board, Mark, Move, Score};

use crate::search::Searcher;
use crate::tt::SharedTable;
use crate::MinimaxEngine;

impl MinimaxEngine {
    /// Same selection as [`MinimaxEngine::best_move`], with root moves searched
    /// on the rayon thread pool.
    pub fn best_move_parallel(&mut self, board: &Board) -> Option<Move> {
        self.best_move_parallel_scored(board).map(|(mv, _)| mv)
    }

    pub fn best_move_parallel_scored(&mut self, board: &Board) -> Option<(Move, Score)> {
        let horizon = self.config.max_depth;
        self.prepare_table(horizon);

        let moves: Vec<Move> = board.empty_cells().collect();
        // Forked in scan order so a seeded run stays reproducible.
        let streams: Vec<_> = moves.iter().map(|_| self.jitter.fork()).collect();

        let shared = Mutex::new(std::mem::take(&mut self.table));
        let pruning = self.config.pruning;

        let scored: Vec<(Move, Score, u64)> = moves
            .into_par_iter()
            .zip(streams)
            .map(|(mv, mut jitter)| {
                let mut tmp = *board;
                tmp.place(mv, Mark::Bot);
                let mut searcher =
                    Searcher::new(SharedTable(&shared), &mut jitter, horizon, pruning);
                let score =
                    searcher.minimax(&mut tmp, 0, false, Score::NEG_INFINITY, Score::INFINITY);
                (mv, score, searcher.nodes)
            })
            .collect();

        self.table = shared.into_inner().unwrap_or_else(PoisonError::into_inner);

        let mut best: Option<(Move, Score)> = None;
        for (mv, score, nodes) in scored {
            self.nodes += nodes;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        debug!(
            best_move = ?best.map(|(mv, _)| mv.to_tuple()),
            nodes = self.nodes,
            table_entries = self.table.len(),
            "parallel minimax move selected"
        );
        best
    }
}

#[cfg(test)]
#[path = "parallel_tests.rs"]
mod parallel_tests;
