//! Add/edit card dialog state.
//!
//! The dialog owns the draft text while it is open. Saving validates the
//! draft against the store; on failure the dialog stays open carrying the
//! error, on success the caller closes it. Cancelling is simply dropping the
//! value.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use crate::consts::{ADD_HEADING, DESCRIPTION_PLACEHOLDER, EDIT_HEADING, TITLE_PLACEHOLDER};
use crate::model::{BoardId, Card, CardRef};
use crate::store::{BoardStore, StoreError};
use crate::validate::{Field, ValidationError};

/// What a save commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// Append a new card to the board.
    Add(BoardId),
    /// Overwrite an existing card.
    Edit(CardRef),
}

/// Keyboard command recognized inside the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKey {
    Save,
    Cancel,
}

/// Map a key press to a dialog command. Shift+Enter is left to the input so
/// the description can hold line breaks.
#[must_use]
pub fn dialog_key(key: &str, shift: bool) -> Option<DialogKey> {
    match key {
        "Enter" if !shift => Some(DialogKey::Save),
        "Escape" => Some(DialogKey::Cancel),
        _ => None,
    }
}

/// An open card dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDialog {
    pub mode: DialogMode,
    pub title: String,
    pub description: String,
    pub error: Option<ValidationError>,
}

impl CardDialog {
    /// Empty dialog adding to `board`.
    #[must_use]
    pub fn add(board: BoardId) -> Self {
        Self { mode: DialogMode::Add(board), title: String::new(), description: String::new(), error: None }
    }

    /// Dialog editing `card`, prefilled with its current content.
    #[must_use]
    pub fn edit(card: CardRef, current: &Card) -> Self {
        Self {
            mode: DialogMode::Edit(card),
            title: current.title.clone(),
            description: current.description.clone(),
            error: None,
        }
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self.mode {
            DialogMode::Add(_) => ADD_HEADING,
            DialogMode::Edit(_) => EDIT_HEADING,
        }
    }

    /// Input placeholder for `field`; only the add dialog shows hints.
    #[must_use]
    pub fn placeholder(&self, field: Field) -> Option<&'static str> {
        match (self.mode, field) {
            (DialogMode::Add(_), Field::Title) => Some(TITLE_PLACEHOLDER),
            (DialogMode::Add(_), Field::Description) => Some(DESCRIPTION_PLACEHOLDER),
            (DialogMode::Edit(_), _) => None,
        }
    }

    /// The message rendered next to `field`, if the last save put it there.
    #[must_use]
    pub fn message_at(&self, field: Field) -> Option<String> {
        self.error.filter(|e| e.field() == field).map(|e| e.to_string())
    }

    /// Whether `field` is highlighted as missing.
    #[must_use]
    pub fn is_invalid(&self, field: Field) -> bool {
        self.error.is_some_and(|e| e.marks(field))
    }

    /// Validate the draft and commit it to `store`.
    ///
    /// A validation failure is kept on the dialog for display and the store is
    /// left untouched. A success clears any previous error.
    pub fn save(&mut self, store: &mut BoardStore) -> Result<CardRef, StoreError> {
        let result = match self.mode {
            DialogMode::Add(board) => store.add_card(board, &self.title, &self.description),
            DialogMode::Edit(card) => store.edit_card(card, &self.title, &self.description).map(|()| card),
        };
        match &result {
            Ok(_) => self.error = None,
            Err(StoreError::Invalid(err)) => self.error = Some(*err),
            Err(_) => {}
        }
        result
    }
}
