use super::*;

fn board(s: &str) -> Board {
    s.parse().expect("test board")
}

#[test]
fn test_bot_row_wins() {
    let b = board("OOO/XX_/X__");
    assert_eq!(evaluate(&b), Outcome::BotWins);
    assert_eq!(evaluate(&b).score(), 10);
}

#[test]
fn test_player_column_wins() {
    let b = board("XO_/XO_/X__");
    assert_eq!(evaluate(&b), Outcome::PlayerWins);
    assert_eq!(evaluate(&b).score(), -10);
}

#[test]
fn test_diagonals() {
    assert_eq!(evaluate(&board("O_X/XO_/__O")), Outcome::BotWins);
    assert_eq!(evaluate(&board("O_X/_X_/XO_")), Outcome::PlayerWins);
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let b = board("XOX/XOO/OXX");
    assert_eq!(evaluate(&b), Outcome::Drawn);
    assert_eq!(evaluate(&b).score(), 0);
    assert!(evaluate(&b).is_terminal());
}

#[test]
fn test_in_progress_is_undecided() {
    let b = board("XO_/___/___");
    assert_eq!(evaluate(&b), Outcome::Undecided);
    assert_eq!(evaluate(&b).score(), 0);
    assert!(!evaluate(&b).is_terminal());
}

#[test]
fn test_win_on_last_cell_beats_draw() {
    let b = board("XOX/OOX/XXO");
    assert_eq!(winner(&b), None);
    let b = board("XOX/OXO/OXX");
    assert_eq!(evaluate(&b), Outcome::PlayerWins);
}

#[test]
fn test_four_by_four_lines() {
    assert_eq!(
        evaluate(&board("OOOO/X___/X___/X___")),
        Outcome::BotWins
    );
    assert_eq!(
        evaluate(&board("OOO_/X___/X___/X___")),
        Outcome::Undecided
    );
    assert_eq!(
        evaluate(&board("___X/__X_/_X__/X___")),
        Outcome::PlayerWins
    );
}

#[test]
fn test_single_cell_board() {
    assert_eq!(evaluate(&board("_")), Outcome::Undecided);
    assert_eq!(evaluate(&board("O")), Outcome::BotWins);
}
