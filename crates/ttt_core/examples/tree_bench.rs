//! Game-tree enumeration benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example tree_bench -p ttt_core -- [depth] [board]
//!
//! Examples:
//!   # Default: every opening enumerated to a full board
//!   cargo flamegraph --example tree_bench -p ttt_core
//!
//!   # Custom depth and position
//!   cargo flamegraph --example tree_bench -p ttt_core -- 6 "X__/_O_/___"

use std::env;
use std::time::Instant;

use ttt_core::{Board, Mark, count_games, perft};

/// Reference openings: empty board, then the three distinct first player moves.
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Empty board", "___/___/___"),
    ("Corner start", "X__/___/___"),
    ("Edge start", "_X_/___/___"),
    ("Center start", "___/_X_/___"),
];

fn side_to_move(board: &Board) -> Mark {
    if board.count(Mark::Player) > board.count(Mark::Bot) {
        Mark::Bot
    } else {
        Mark::Player
    }
}

fn remaining(board: &Board) -> u8 {
    board.empty_cells().count() as u8
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Without a depth, every position is enumerated to a full board.
    let depth: Option<u8> = args.get(1).and_then(|s| s.parse().ok());

    if let Some(text) = args.get(2) {
        match text.parse::<Board>() {
            Ok(board) => run_single_position(board, depth),
            Err(e) => eprintln!("Invalid board '{text}': {e}"),
        }
    } else {
        run_all_positions(depth);
    }
}

fn run_single_position(mut board: Board, depth: Option<u8>) {
    let depth = depth.unwrap_or_else(|| remaining(&board));
    println!("Board:\n{board}");
    println!("Depth: {depth}");
    println!();

    let to_move = side_to_move(&board);
    let start = Instant::now();
    let nodes = perft(&mut board, to_move, depth);
    let games = count_games(&mut board, to_move);
    let elapsed = start.elapsed();

    println!("Perft: {nodes}");
    println!("Games: {games}");
    println!("Time: {elapsed:.3?}");
}

fn run_all_positions(depth: Option<u8>) {
    println!("=== Tree Benchmark Suite ===");
    match depth {
        Some(d) => println!("Depth: {d}"),
        None => println!("Depth: to full board"),
    }
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, text) in TEST_POSITIONS {
        let Ok(mut board) = text.parse::<Board>() else {
            eprintln!("Skipping malformed position {name}");
            continue;
        };
        let to_move = side_to_move(&board);
        let depth = depth.unwrap_or_else(|| remaining(&board));

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut board, to_move, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(" {nodes:>12} sequences in {elapsed:>8.3?}");
    }

    println!();
    println!("{:=<70}", "");
    println!("TOTAL: {total_nodes} sequences in {total_time:.3?}");
}
