use super::*;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use ttt_core::{Move, SearchResult};

/// Always asks for the top-left corner, so its second move is illegal.
struct CornerOnly;

impl Engine for CornerOnly {
    fn search(&mut self, _board: &Board, _limits: SearchLimits) -> SearchResult {
        SearchResult {
            best_move: Some(Move::new(0, 0)),
            score: 0.0,
            max_depth: None,
            nodes: 0,
        }
    }

    fn name(&self) -> &str {
        "Corner"
    }
}

fn config(num_games: u32) -> MatchConfig {
    MatchConfig {
        num_games,
        ..Default::default()
    }
}

#[test]
fn test_self_play_is_drawn() {
    let mut engine1 = MinimaxEngine::new();
    let mut engine2 = MinimaxEngine::new();

    let result = MatchRunner::new(config(2))
        .run_match(&mut engine1, &mut engine2)
        .unwrap();

    assert_eq!(result.total_games(), 2);
    assert_eq!(result.draws, 2);
    assert!(result.games[0].engine1_first);
    assert!(!result.games[1].engine1_first);
    assert!(result.games.iter().all(|g| g.moves.len() == 9));
}

#[test]
fn test_minimax_never_loses_to_random() {
    let mut minimax = MinimaxEngine::new();
    let mut random = RandomEngine::seeded(2024);

    let result = MatchRunner::new(config(20))
        .run_match(&mut minimax, &mut random)
        .unwrap();

    assert_eq!(result.losses, 0);
    assert!(result.wins > 0);
}

#[test]
fn test_first_mover_always_wins_on_two_by_two() {
    // Any two cells of a 2x2 board share a line.
    let mut engine1 = RandomEngine::seeded(1);
    let mut engine2 = RandomEngine::seeded(2);
    let runner = MatchRunner::new(MatchConfig {
        num_games: 4,
        board_size: 2,
        ..Default::default()
    });

    let result = runner.run_match(&mut engine1, &mut engine2).unwrap();
    assert_eq!((result.wins, result.losses, result.draws), (2, 2, 0));
    for game in &result.games {
        assert_eq!(game.moves.len(), 3);
        assert_eq!(game.result == GameResult::Win, game.engine1_first);
    }
}

#[test]
fn test_without_alternation_engine1_always_starts() {
    let mut engine1 = RandomEngine::seeded(3);
    let mut engine2 = RandomEngine::seeded(4);
    let runner = MatchRunner::new(MatchConfig {
        num_games: 3,
        alternate_first: false,
        ..Default::default()
    });

    let result = runner.run_match(&mut engine1, &mut engine2).unwrap();
    assert!(result.games.iter().all(|g| g.engine1_first));
}

#[test]
fn test_illegal_move_forfeits() {
    let mut corner = CornerOnly;
    let mut random = RandomEngine::seeded(11);

    let result = MatchRunner::new(config(4))
        .run_match(&mut corner, &mut random)
        .unwrap();

    assert_eq!(result.losses, 4);
    for game in &result.games {
        let reason = game.forfeit.as_deref().unwrap();
        assert!(reason.starts_with("Corner: "), "{reason}");
    }
}

#[test]
fn test_unsupported_board_size() {
    let mut engine1 = RandomEngine::new();
    let mut engine2 = RandomEngine::new();
    let runner = MatchRunner::new(MatchConfig {
        board_size: 9,
        ..Default::default()
    });

    let err = runner.run_match(&mut engine1, &mut engine2).unwrap_err();
    assert!(matches!(err, TournamentError::Board(_)));
}

#[test]
fn test_quick_match() {
    let mut engine1 = MinimaxEngine::new();
    let mut engine2 = RandomEngine::seeded(9);
    let result = quick_match(&mut engine1, &mut engine2, 2).unwrap();
    assert_eq!(result.total_games(), 2);
    assert_eq!(result.losses, 0);
}
