use super::*;

// =============================================================
// Helpers
// =============================================================

fn titles(store: &BoardStore, id: BoardId) -> Vec<String> {
    store.board(id).unwrap().cards.iter().map(|c| c.title.clone()).collect()
}

fn is_empty(store: &BoardStore, id: BoardId) -> bool {
    store.board(id).unwrap().cards.is_empty()
}

fn abc_store() -> BoardStore {
    BoardStore::new(vec![
        Board::new(
            BoardId(1),
            "Left",
            vec![Card::new("A", "a"), Card::new("B", "b"), Card::new("C", "c")],
        ),
        Board::new(BoardId(2), "Right", vec![]),
    ])
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_absent_value_seeds_defaults() {
    let (store, source) = BoardStore::load(None);
    assert_eq!(source, LoadSource::Missing);
    assert_eq!(store.boards(), default_boards().as_slice());
}

#[test]
fn load_malformed_value_seeds_defaults() {
    let (store, source) = BoardStore::load(Some("{not json"));
    assert!(matches!(source, LoadSource::Malformed { .. }));
    assert_eq!(store, BoardStore::default());
}

#[test]
fn load_null_value_seeds_defaults() {
    let (store, source) = BoardStore::load(Some("null"));
    assert!(matches!(source, LoadSource::Malformed { .. }));
    assert_eq!(store.boards().len(), 3);
}

#[test]
fn load_duplicate_ids_seeds_defaults() {
    let raw = r#"[{"id":1,"title":"a","cards":[]},{"id":1,"title":"b","cards":[]}]"#;
    let (store, source) = BoardStore::load(Some(raw));
    match source {
        LoadSource::Malformed { reason } => assert!(reason.contains("repeat board id 1")),
        other => panic!("expected malformed, got {other:?}"),
    }
    assert_eq!(store, BoardStore::default());
}

#[test]
fn load_stored_value_is_used_verbatim() {
    let raw = r#"[{"id":9,"title":"Only","cards":[{"title":"t","description":"d"}]}]"#;
    let (store, source) = BoardStore::load(Some(raw));
    assert_eq!(source, LoadSource::Stored);
    assert_eq!(store.boards().len(), 1);
    assert_eq!(store.card(CardRef::new(BoardId(9), 0)), Some(&Card::new("t", "d")));
}

#[test]
fn json_round_trip_is_structurally_equal() {
    let store = BoardStore::default();
    let raw = store.to_json().unwrap();
    let (reloaded, source) = BoardStore::load(Some(&raw));
    assert_eq!(source, LoadSource::Stored);
    assert_eq!(reloaded, store);
}

#[test]
fn json_round_trip_after_mutations() {
    let mut store = abc_store();
    store.move_card(CardRef::new(BoardId(1), 0), BoardId(2), 0).unwrap();
    store.add_card(BoardId(2), "D", "d").unwrap();
    store.edit_card(CardRef::new(BoardId(1), 0), "B2", "b2").unwrap();
    let (reloaded, _) = BoardStore::load(Some(&store.to_json().unwrap()));
    assert_eq!(reloaded, store);
    assert_eq!(titles(&reloaded, BoardId(1)), ["B2", "C"]);
    assert_eq!(titles(&reloaded, BoardId(2)), ["A", "D"]);
}

// =============================================================
// add_card
// =============================================================

#[test]
fn add_card_appends_trimmed_card() {
    let mut store = abc_store();
    let card = store.add_card(BoardId(1), " D ", " d ").unwrap();
    assert_eq!(card, CardRef::new(BoardId(1), 3));
    assert_eq!(store.card(card), Some(&Card::new("D", "d")));
}

#[test]
fn add_card_to_empty_column_clears_placeholder() {
    let mut store = abc_store();
    assert!(is_empty(&store, BoardId(2)));
    store.add_card(BoardId(2), "New", "task").unwrap();
    assert!(!is_empty(&store, BoardId(2)));
    assert_eq!(store.board(BoardId(2)).unwrap().cards.len(), 1);
}

#[test]
fn add_card_with_missing_title_leaves_store_unchanged() {
    let mut store = abc_store();
    let before = store.clone();
    let err = store.add_card(BoardId(1), "", "desc").unwrap_err();
    assert_eq!(err, StoreError::Invalid(ValidationError::MissingTitle));
    assert_eq!(err.to_string(), "You must enter a title.");
    assert_eq!(store, before);
}

#[test]
fn add_card_with_both_missing_reports_combined_message() {
    let mut store = abc_store();
    let err = store.add_card(BoardId(2), "  ", "").unwrap_err();
    assert_eq!(err, StoreError::Invalid(ValidationError::MissingBoth));
    assert!(is_empty(&store, BoardId(2)));
}

#[test]
fn add_card_to_unknown_board_fails() {
    let mut store = abc_store();
    let err = store.add_card(BoardId(99), "t", "d").unwrap_err();
    assert_eq!(err, StoreError::UnknownBoard(BoardId(99)));
}

// =============================================================
// edit_card
// =============================================================

#[test]
fn edit_card_updates_in_place() {
    let mut store = abc_store();
    store.edit_card(CardRef::new(BoardId(1), 1), "Bee", "buzz").unwrap();
    assert_eq!(titles(&store, BoardId(1)), ["A", "Bee", "C"]);
    assert_eq!(store.card(CardRef::new(BoardId(1), 1)).unwrap().description, "buzz");
}

#[test]
fn edit_card_with_missing_description_keeps_old_content() {
    let mut store = abc_store();
    let err = store.edit_card(CardRef::new(BoardId(1), 1), "Bee", " ").unwrap_err();
    assert_eq!(err, StoreError::Invalid(ValidationError::MissingDescription));
    assert_eq!(store.card(CardRef::new(BoardId(1), 1)), Some(&Card::new("B", "b")));
}

#[test]
fn edit_card_out_of_range_fails() {
    let mut store = abc_store();
    let err = store.edit_card(CardRef::new(BoardId(2), 0), "t", "d").unwrap_err();
    assert_eq!(err, StoreError::CardOutOfRange { board: BoardId(2), index: 0 });
}

// =============================================================
// delete_card
// =============================================================

#[test]
fn delete_card_removes_and_returns_it() {
    let mut store = abc_store();
    let removed = store.delete_card(CardRef::new(BoardId(1), 1)).unwrap();
    assert_eq!(removed.title, "B");
    assert_eq!(titles(&store, BoardId(1)), ["A", "C"]);
}

#[test]
fn deleting_last_card_restores_placeholder() {
    let mut store = abc_store();
    store.add_card(BoardId(2), "Only", "one").unwrap();
    assert!(!is_empty(&store, BoardId(2)));
    store.delete_card(CardRef::new(BoardId(2), 0)).unwrap();
    assert!(is_empty(&store, BoardId(2)));
}

#[test]
fn delete_card_out_of_range_fails() {
    let mut store = abc_store();
    let before = store.clone();
    let err = store.delete_card(CardRef::new(BoardId(1), 3)).unwrap_err();
    assert_eq!(err, StoreError::CardOutOfRange { board: BoardId(1), index: 3 });
    assert_eq!(store, before);
}

// =============================================================
// move_card
// =============================================================

#[test]
fn move_card_down_within_column() {
    let mut store = abc_store();
    // Remaining [B, C]; index 1 places A before C.
    let moved = store.move_card(CardRef::new(BoardId(1), 0), BoardId(1), 1).unwrap();
    assert_eq!(moved, CardRef::new(BoardId(1), 1));
    assert_eq!(titles(&store, BoardId(1)), ["B", "A", "C"]);
}

#[test]
fn move_card_up_within_column() {
    let mut store = abc_store();
    let moved = store.move_card(CardRef::new(BoardId(1), 2), BoardId(1), 0).unwrap();
    assert_eq!(moved, CardRef::new(BoardId(1), 0));
    assert_eq!(titles(&store, BoardId(1)), ["C", "A", "B"]);
}

#[test]
fn move_card_across_columns() {
    let mut store = abc_store();
    let moved = store.move_card(CardRef::new(BoardId(1), 1), BoardId(2), 0).unwrap();
    assert_eq!(moved, CardRef::new(BoardId(2), 0));
    assert_eq!(titles(&store, BoardId(1)), ["A", "C"]);
    assert_eq!(titles(&store, BoardId(2)), ["B"]);
}

#[test]
fn move_card_index_clamps_to_end() {
    let mut store = abc_store();
    let moved = store.move_card(CardRef::new(BoardId(1), 0), BoardId(1), 99).unwrap();
    assert_eq!(moved, CardRef::new(BoardId(1), 2));
    assert_eq!(titles(&store, BoardId(1)), ["B", "C", "A"]);
}

#[test]
fn move_card_to_unknown_board_keeps_card() {
    let mut store = abc_store();
    let before = store.clone();
    let err = store.move_card(CardRef::new(BoardId(1), 0), BoardId(7), 0).unwrap_err();
    assert_eq!(err, StoreError::UnknownBoard(BoardId(7)));
    assert_eq!(store, before);
}
