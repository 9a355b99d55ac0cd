use super::*;

fn game(result: GameResult) -> GameRecord {
    GameRecord {
        engine1_first: true,
        moves: vec!["1,1".to_string()],
        result,
        forfeit: None,
    }
}

#[test]
fn test_match_result_tally_and_score() {
    let mut result = MatchResult::new();
    assert_eq!(result.score(), 0.5);

    result.record(game(GameResult::Win));
    result.record(game(GameResult::Draw));
    result.record(game(GameResult::Draw));
    result.record(game(GameResult::Loss));

    assert_eq!((result.wins, result.losses, result.draws), (1, 1, 2));
    assert_eq!(result.total_games(), 4);
    assert_eq!(result.games.len(), 4);
    assert_eq!(result.score(), 0.5);
}

#[test]
fn test_game_result_reversed() {
    assert_eq!(GameResult::Win.reversed(), GameResult::Loss);
    assert_eq!(GameResult::Loss.reversed(), GameResult::Win);
    assert_eq!(GameResult::Draw.reversed(), GameResult::Draw);
    assert_eq!(GameResult::Draw.notation(), "1/2");
}

#[test]
fn test_save_and_load_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let mut results = TournamentResults::new(
        "smoke",
        vec!["minimax".to_string(), "random".to_string()],
        MatchConfig::default(),
    );
    let mut result = MatchResult::new();
    result.record(game(GameResult::Win));
    results.add_match("minimax", "random", result);

    results.save(&path).unwrap();
    let loaded = TournamentResults::load(&path).unwrap();
    assert_eq!(loaded, results);
}

#[test]
fn test_load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TournamentResults::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, TournamentError::Io { operation: "read", .. }));
}

#[test]
fn test_load_reports_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        TournamentResults::load(&path),
        Err(TournamentError::Json(_))
    ));
}

#[test]
fn test_report_lists_every_match() {
    let mut results =
        TournamentResults::new("report", vec!["a".into(), "b".into()], MatchConfig::default());
    let mut result = MatchResult::new();
    result.record(game(GameResult::Draw));
    results.add_match("a", "b", result);

    let report = results.generate_report();
    assert!(report.contains("=== Tournament: report ==="));
    assert!(report.contains("depth exhaustive"));
    assert!(report.contains("50.0%"));
}
