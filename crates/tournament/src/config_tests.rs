use super::*;
use minimax_engine::TableScope;

#[test]
fn test_empty_file_gives_defaults() {
    let config = TournamentConfig::from_toml_str("").unwrap();
    assert_eq!(config, TournamentConfig::default());
    assert_eq!(config.match_config.board_size, 3);
    assert!(config.match_config.alternate_first);
}

#[test]
fn test_parses_both_sections() {
    let text = r#"
        [match]
        num_games = 4
        max_depth = 2

        [minimax]
        jitter = 0.01
        seed = 7
        table_scope = "per_move"
    "#;
    let config = TournamentConfig::from_toml_str(text).unwrap();
    assert_eq!(config.match_config.num_games, 4);
    assert_eq!(config.match_config.max_depth, Some(2));
    assert_eq!(config.match_config.board_size, 3);
    assert_eq!(config.minimax.seed, Some(7));
    assert_eq!(config.minimax.table_scope, TableScope::PerMove);
}

#[test]
fn test_rejects_invalid_minimax_settings() {
    let err = TournamentConfig::from_toml_str("[minimax]\njitter = -1.0\n").unwrap_err();
    assert!(matches!(err, TournamentError::Config(_)));

    let err = TournamentConfig::from_toml_str("[match]\nnum_games = \"many\"\n").unwrap_err();
    assert!(matches!(err, TournamentError::Toml(_)));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tournament.toml");
    std::fs::write(&path, "[match]\nnum_games = 2\n").unwrap();
    assert_eq!(TournamentConfig::load(&path).unwrap().match_config.num_games, 2);
}

#[test]
fn test_create_engine_names() {
    let config = MinimaxConfig::default();
    assert_eq!(create_engine("minimax", &config).unwrap().name(), "Minimax v1.0");
    assert_eq!(create_engine("Reference", &config).unwrap().name(), "Minimax v1.0");
    assert_eq!(create_engine("random", &config).unwrap().name(), "Random v1.0");
    assert_eq!(create_engine("random:42", &config).unwrap().name(), "Random v1.0");

    for bad in ["alphazero", "random:x", "minimax:3"] {
        assert!(matches!(
            create_engine(bad, &config),
            Err(TournamentError::UnknownEngine(_))
        ));
    }
}
