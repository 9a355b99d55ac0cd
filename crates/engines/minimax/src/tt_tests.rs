use super::*;

const INF: Score = Score::INFINITY;

#[test]
fn test_bound_classification() {
    assert_eq!(Bound::classify(0.0, -INF, INF), Bound::Exact);
    assert_eq!(Bound::classify(-3.0, -3.0, 5.0), Bound::Upper);
    assert_eq!(Bound::classify(5.0, -3.0, 5.0), Bound::Lower);
    assert_eq!(Bound::classify(1.0, -3.0, 5.0), Bound::Exact);
}

#[test]
fn test_exact_entry_always_answers() {
    let mut tt = TranspositionTable::new(TableMode::Bounded);
    tt.store(BoardKey(42), 2, true, 7.0, Bound::Exact);
    assert_eq!(tt.probe(BoardKey(42), 2, true, -INF, INF), Some(7.0));
    assert_eq!(tt.probe(BoardKey(42), 2, true, 8.0, 9.0), Some(7.0));
    assert_eq!(tt.hits(), 2);
}

#[test]
fn test_bounded_mode_separates_depths() {
    let mut tt = TranspositionTable::new(TableMode::Bounded);
    tt.store(BoardKey(42), 2, true, 7.0, Bound::Exact);
    assert_eq!(tt.probe(BoardKey(42), 3, true, -INF, INF), None);
    assert_eq!(tt.len(), 1);
}

#[test]
fn test_bound_entries_only_answer_when_they_decide_the_window() {
    let mut tt = TranspositionTable::new(TableMode::Bounded);
    tt.store(BoardKey(1), 0, true, 6.0, Bound::Lower);
    assert_eq!(tt.probe(BoardKey(1), 0, true, -INF, 5.0), Some(6.0));
    assert_eq!(tt.probe(BoardKey(1), 0, true, -INF, INF), None);

    tt.store(BoardKey(2), 0, true, -4.0, Bound::Upper);
    assert_eq!(tt.probe(BoardKey(2), 0, true, -4.0, INF), Some(-4.0));
    assert_eq!(tt.probe(BoardKey(2), 0, true, -5.0, INF), None);
}

#[test]
fn test_bounded_mode_separates_sides_to_move() {
    let mut tt = TranspositionTable::new(TableMode::Bounded);
    tt.store(BoardKey(42), 0, true, 7.0, Bound::Exact);
    assert_eq!(tt.probe(BoardKey(42), 0, false, -INF, INF), None);
    tt.store(BoardKey(42), 0, false, -5.0, Bound::Exact);
    assert_eq!(tt.len(), 2);
    assert_eq!(tt.probe(BoardKey(42), 0, true, -INF, INF), Some(7.0));
}

#[test]
fn test_content_only_mode_trusts_everything() {
    let mut tt = TranspositionTable::new(TableMode::ContentOnly);
    tt.store(BoardKey(1), 4, true, 6.0, Bound::Lower);
    // Different depth, side and window still hit.
    assert_eq!(tt.probe(BoardKey(1), 0, false, -INF, INF), Some(6.0));
}

#[test]
fn test_capacity_rejects_new_positions() {
    let mut tt = TranspositionTable::with_capacity(TableMode::Bounded, Some(2));
    tt.store(BoardKey(1), 0, true, 1.0, Bound::Exact);
    tt.store(BoardKey(2), 0, true, 2.0, Bound::Exact);
    tt.store(BoardKey(3), 0, true, 3.0, Bound::Exact);
    assert_eq!(tt.len(), 2);
    assert_eq!(tt.rejected(), 1);

    // Overwriting a known position is still allowed.
    tt.store(BoardKey(2), 0, true, 5.0, Bound::Exact);
    assert_eq!(tt.probe(BoardKey(2), 0, true, -INF, INF), Some(5.0));
}

#[test]
fn test_clear_resets_counters() {
    let mut tt = TranspositionTable::with_capacity(TableMode::Bounded, Some(0));
    tt.store(BoardKey(1), 0, true, 1.0, Bound::Exact);
    assert_eq!(tt.rejected(), 1);
    tt.clear();
    assert!(tt.is_empty());
    assert_eq!(tt.rejected(), 0);
    assert_eq!(tt.hits(), 0);
}

#[test]
fn test_shared_table_goes_through_the_lock() {
    let table = Mutex::new(TranspositionTable::new(TableMode::Bounded));
    let mut shared = SharedTable(&table);
    shared.store(BoardKey(9), 1, true, 3.0, Bound::Exact);
    assert_eq!(shared.probe(BoardKey(9), 1, true, -INF, INF), Some(3.0));
    assert_eq!(table.lock().unwrap().len(), 1);
}
