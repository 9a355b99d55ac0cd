//! Random Move Engine
//!
//! Picks uniformly among the empty cells. Used as a baseline opponent in
//! tournaments and as a source of varied openings in tests. A seeded engine
//! replays the same sequence of choices.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use ttt_core::{Board, Engine, Move, SearchLimits, SearchResult};


/// A player that places its mark on a random empty cell.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
            nodes: 0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            nodes: 0,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> SearchResult {
        let moves: Vec<Move> = board.empty_cells().collect();
        self.nodes = 1;

        SearchResult {
            best_move: moves.choose(&mut self.rng).copied(),
            score: 0.0,
            max_depth: Some(0),
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !name.eq_ignore_ascii_case("seed") {
            return false;
        }
        match value.trim().parse::<u64>() {
            Ok(seed) => {
                *self = Self::seeded(seed);
                true
            }
            Err(_) => false,
        }
    }
}
