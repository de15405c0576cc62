//! Raw input mapping and DOM measurement for card dragging.
//!
//! Everything here turns browser events and elements into the plain values
//! `board::drag` works with (`Point`, `Rect`, `ColumnLayout`). The DOM
//! contract is: each column's card list is a `.board__card-list` element
//! carrying `data-board-id`, and its cards are `.card` elements in model
//! order. Only the card list is a drop zone; a column's title and add
//! button are not.

#[cfg(test)]
#[path = "drag_input_test.rs"]
mod drag_input_test;

use board::model::BoardId;

#[cfg(feature = "csr")]
use board::drag::ColumnLayout;
#[cfg(feature = "csr")]
use board::geometry::{Point, Rect};
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Class of the card list inside a column.
pub const CARD_LIST_CLASS: &str = "board__card-list";

/// Selector of the drop zone of a column: its card list.
pub const DROP_ZONE_SELECTOR: &str = ".board__card-list";

/// Selector of a card element.
pub const CARD_SELECTOR: &str = ".card";

/// Attribute holding the board id of a drop zone.
pub const BOARD_ID_ATTR: &str = "data-board-id";

/// Parse the `data-board-id` attribute value.
pub fn parse_board_id(raw: &str) -> Option<BoardId> {
    raw.trim().parse().ok().map(BoardId)
}

/// Whether a pointer-down starts a mouse-style drag. Touch pointers are
/// left to the touch handlers, and only the primary button drags.
pub fn starts_pointer_drag(pointer_type: &str, button: i16) -> bool {
    pointer_type != "touch" && button == 0
}

/// Whether a pointer event belongs to the mouse-style drag path.
pub fn is_pointer_drag_event(pointer_type: &str) -> bool {
    pointer_type != "touch"
}

#[cfg(feature = "csr")]
pub fn element_rect(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.x(), r.y(), r.width(), r.height())
}

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Position of the first finger still on the screen.
#[cfg(feature = "csr")]
pub fn touch_point(ev: &leptos::ev::TouchEvent) -> Option<Point> {
    let touch = ev.touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Whether the event started on a button (edit/close) rather than the card body.
#[cfg(feature = "csr")]
pub fn event_hits_control(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("button").ok().flatten())
        .is_some()
}

/// Bounds of the card the event target sits in.
#[cfg(feature = "csr")]
pub fn event_card_rect(target: Option<web_sys::EventTarget>) -> Option<Rect> {
    let el = target?.dyn_into::<web_sys::Element>().ok()?;
    let card = el.closest(CARD_SELECTOR).ok().flatten()?;
    Some(element_rect(&card))
}

/// Measure every drop zone and its cards as currently laid out.
#[cfg(feature = "csr")]
pub fn measure_columns() -> Vec<ColumnLayout> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(columns) = document.query_selector_all(DROP_ZONE_SELECTOR) else {
        return Vec::new();
    };
    (0..columns.length())
        .filter_map(|i| columns.item(i)?.dyn_into::<web_sys::Element>().ok())
        .filter_map(|zone| {
            let board = parse_board_id(&zone.get_attribute(BOARD_ID_ATTR)?)?;
            Some(ColumnLayout { board, rect: element_rect(&zone), cards: card_rects(&zone) })
        })
        .collect()
}

#[cfg(feature = "csr")]
fn card_rects(zone: &web_sys::Element) -> Vec<Rect> {
    let Ok(cards) = zone.query_selector_all(CARD_SELECTOR) else {
        return Vec::new();
    };
    (0..cards.length())
        .filter_map(|i| cards.item(i)?.dyn_into::<web_sys::Element>().ok())
        .map(|card| element_rect(&card))
        .collect()
}
