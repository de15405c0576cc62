use super::*;

#[test]
fn parse_board_id_accepts_integers() {
    assert_eq!(parse_board_id("3"), Some(BoardId(3)));
    assert_eq!(parse_board_id(" 12 "), Some(BoardId(12)));
    assert_eq!(parse_board_id("-1"), Some(BoardId(-1)));
}

#[test]
fn parse_board_id_rejects_garbage() {
    assert_eq!(parse_board_id(""), None);
    assert_eq!(parse_board_id("one"), None);
    assert_eq!(parse_board_id("1.5"), None);
}

#[test]
fn only_primary_non_touch_pointer_starts_drag() {
    assert!(starts_pointer_drag("mouse", 0));
    assert!(starts_pointer_drag("pen", 0));
    assert!(!starts_pointer_drag("mouse", 2));
    assert!(!starts_pointer_drag("touch", 0));
}

#[test]
fn touch_pointer_events_are_left_to_touch_handlers() {
    assert!(is_pointer_drag_event("mouse"));
    assert!(!is_pointer_drag_event("touch"));
}

#[test]
fn drop_zone_is_the_card_list() {
    assert_eq!(DROP_ZONE_SELECTOR, format!(".{CARD_LIST_CLASS}"));
}
