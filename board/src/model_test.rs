use super::*;

// =============================================================
// BoardId
// =============================================================

#[test]
fn board_id_serializes_as_bare_number() {
    assert_eq!(serde_json::to_string(&BoardId(7)).unwrap(), "7");
    let id: BoardId = serde_json::from_str("42").unwrap();
    assert_eq!(id, BoardId(42));
}

#[test]
fn board_id_display() {
    assert_eq!(BoardId(3).to_string(), "3");
}

// =============================================================
// Board / Card serde layout
// =============================================================

#[test]
fn board_json_layout_matches_storage_format() {
    let board = Board::new(BoardId(1), "To do", vec![Card::new("Cats", "Feed them")]);
    let value = serde_json::to_value(&board).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": 1,
            "title": "To do",
            "cards": [{ "title": "Cats", "description": "Feed them" }],
        })
    );
}

#[test]
fn board_without_cards_field_deserializes_empty() {
    let board: Board = serde_json::from_str(r#"{"id":5,"title":"Later"}"#).unwrap();
    assert!(board.cards.is_empty());
    assert_eq!(board.id, BoardId(5));
}

#[test]
fn card_missing_description_rejects() {
    let result = serde_json::from_str::<Card>(r#"{"title":"x"}"#);
    assert!(result.is_err());
}

// =============================================================
// Default seed
// =============================================================

#[test]
fn default_boards_are_the_three_columns() {
    let boards = default_boards();
    let titles: Vec<&str> = boards.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["To do", "In progress", "Completed"]);
    let ids: Vec<BoardId> = boards.iter().map(|b| b.id).collect();
    assert_eq!(ids, [BoardId(1), BoardId(2), BoardId(3)]);
}

#[test]
fn default_boards_seed_cards() {
    let boards = default_boards();
    let counts: Vec<usize> = boards.iter().map(|b| b.cards.len()).collect();
    assert_eq!(counts, [2, 1, 2]);
    assert_eq!(boards[0].cards[0].title, "Cats");
    assert_eq!(boards[1].cards[0].title, "Programming");
    assert_eq!(boards[2].cards[1].title, "Fasting");
}

#[test]
fn card_ref_equality() {
    assert_eq!(CardRef::new(BoardId(1), 0), CardRef { board: BoardId(1), index: 0 });
    assert_ne!(CardRef::new(BoardId(1), 0), CardRef::new(BoardId(1), 1));
    assert_ne!(CardRef::new(BoardId(1), 0), CardRef::new(BoardId(2), 0));
}
