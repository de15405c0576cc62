//! Transient interaction state of the board page.
//!
//! DESIGN
//! ======
//! Owned by `BoardPage` rather than `App`: an open dialog or an in-flight
//! drag only exists while the user is in the middle of that interaction and
//! never outlives the page. The board store is separate and long-lived.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use board::dialog::CardDialog;
use board::drag::DragSession;
use board::model::{BoardId, CardRef};
use board::store::BoardStore;

/// Opacity applied to the card under a drag.
pub const DRAG_OPACITY: f64 = 0.5;

/// Style every card carries so touch gestures on it never pan the page.
pub const CARD_TOUCH_STYLE: &str = "touch-action:none";

/// Open dialog and active drag, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub dialog: Option<CardDialog>,
    pub drag: Option<DragSession>,
}

impl UiState {
    /// Open the add dialog for `board`, replacing any open dialog.
    pub fn open_add(&mut self, board: BoardId) {
        self.dialog = Some(CardDialog::add(board));
    }

    /// Open the edit dialog for `card`. Returns `false` if the card no longer
    /// exists.
    pub fn open_edit(&mut self, store: &BoardStore, card: CardRef) -> bool {
        let Some(current) = store.card(card) else {
            return false;
        };
        self.dialog = Some(CardDialog::edit(card, current));
        true
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn is_dragging(&self, card: CardRef) -> bool {
        self.drag.as_ref().is_some_and(|d| d.is_dragging(card))
    }

    /// Inline style for `card`. Once the gesture engages, the dragged card is
    /// drawn at reduced opacity, detached from the column and pinned under
    /// the pointer.
    pub fn card_style(&self, card: CardRef) -> String {
        let Some(drag) = self.drag.as_ref().filter(|d| d.is_dragging(card)) else {
            return CARD_TOUCH_STYLE.to_owned();
        };
        let origin = drag.floating_origin();
        format!(
            "{CARD_TOUCH_STYLE};opacity:{DRAG_OPACITY};position:fixed;left:{}px;top:{}px;width:{}px;pointer-events:none;z-index:1000",
            origin.x,
            origin.y,
            drag.floating_width()
        )
    }
}
