//! Plays the engine against every possible sequence of player replies.

use minimax_engine::{MinimaxConfig, MinimaxEngine};
use ttt_core::{evaluate, Board, Mark, Outcome};

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl Tally {
    fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

fn explore(engine: &mut MinimaxEngine, board: &mut Board, bot_to_move: bool, tally: &mut Tally) {
    let counter = match evaluate(board) {
        Outcome::BotWins => &mut tally.wins,
        Outcome::PlayerWins => &mut tally.losses,
        Outcome::Drawn => &mut tally.draws,
        Outcome::Undecided => {
            return descend(engine, board, bot_to_move, tally);
        }
    };
    *counter += 1;
}

fn descend(engine: &mut MinimaxEngine, board: &mut Board, bot_to_move: bool, tally: &mut Tally) {
    if bot_to_move {
        let mv = engine.best_move(board).expect("undecided board has an empty cell");
        board.place(mv, Mark::Bot);
        explore(engine, board, false, tally);
        board.clear(mv);
    } else {
        let replies: Vec<_> = board.empty_cells().collect();
        for mv in replies {
            board.place(mv, Mark::Player);
            explore(engine, board, true, tally);
            board.clear(mv);
        }
    }
}

fn play_out(config: MinimaxConfig, bot_first: bool) -> Tally {
    let mut engine = MinimaxEngine::with_config(config).unwrap();
    let mut tally = Tally::default();
    explore(&mut engine, &mut Board::empty(), bot_first, &mut tally);
    tally
}

#[test]
fn never_loses_moving_first() {
    let tally = play_out(MinimaxConfig::default(), true);
    assert_eq!(tally.losses, 0);
    assert_eq!(
        tally,
        Tally {
            wins: 71,
            losses: 0,
            draws: 2
        }
    );
}

#[test]
fn never_loses_moving_second() {
    let tally = play_out(MinimaxConfig::default(), false);
    assert_eq!(tally.losses, 0);
    assert_eq!(tally.games(), 569);
    assert_eq!(tally.wins, 386);
}

#[test]
fn per_move_table_plays_the_same_games() {
    let config = MinimaxConfig {
        table_scope: minimax_engine::TableScope::PerMove,
        ..Default::default()
    };
    assert_eq!(play_out(config, false), play_out(MinimaxConfig::default(), false));
}

#[test]
fn content_keyed_table_can_lose() {
    // Replayed cutoff bounds misjudge some replies once the player moves first.
    let tally = play_out(MinimaxConfig::reference(), false);
    assert_eq!(tally.losses, 46);
    assert_eq!(tally.games(), 577);

    let tally = play_out(MinimaxConfig::reference(), true);
    assert_eq!(tally.losses, 0);
}
