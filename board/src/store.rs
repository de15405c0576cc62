//! The authoritative in-memory board list.
//!
//! DESIGN
//! ======
//! Every user action lands here as a direct mutation; the UI renders from
//! this store and never reads state back out of the DOM. Mutations either
//! fully apply or leave the store untouched, so a failed save or a stale
//! card reference cannot corrupt ordering.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::model::{Board, BoardId, Card, CardRef, default_boards};
use crate::storage::{StorageError, decode_boards, encode_boards};
use crate::validate::{ValidationError, validate_card};

/// Failure applying a mutation to the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no board with id {0}")]
    UnknownBoard(BoardId),
    #[error("board {board} has no card at index {index}")]
    CardOutOfRange { board: BoardId, index: usize },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Where the boards of a freshly loaded store came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the stored value.
    Stored,
    /// Nothing was stored; the default seed is in use.
    Missing,
    /// The stored value was unusable; the default seed is in use.
    Malformed { reason: String },
}

/// Ordered boards, each with ordered cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStore {
    boards: Vec<Board>,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self { boards: default_boards() }
    }
}

impl BoardStore {
    #[must_use]
    pub fn new(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// Build the store from a raw stored value, seeding defaults when the
    /// value is absent or malformed.
    #[must_use]
    pub fn load(raw: Option<&str>) -> (Self, LoadSource) {
        let Some(raw) = raw else {
            return (Self::default(), LoadSource::Missing);
        };
        match decode_boards(raw) {
            Ok(boards) => (Self::new(boards), LoadSource::Stored),
            Err(err) => (Self::default(), LoadSource::Malformed { reason: err.to_string() }),
        }
    }

    /// Serialize all boards in the persisted layout.
    pub fn to_json(&self) -> Result<String, StorageError> {
        encode_boards(&self.boards)
    }

    // --- Queries ---

    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[must_use]
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn card(&self, card: CardRef) -> Option<&Card> {
        self.board(card.board).and_then(|b| b.cards.get(card.index))
    }

    // --- Mutations ---

    /// Validate and append a card to the end of `board`.
    pub fn add_card(&mut self, board: BoardId, title: &str, description: &str) -> Result<CardRef, StoreError> {
        let target = self.board_mut(board)?;
        let card = validate_card(title, description)?;
        target.cards.push(card);
        Ok(CardRef::new(board, target.cards.len() - 1))
    }

    /// Validate and replace the title and description of an existing card.
    pub fn edit_card(&mut self, card: CardRef, title: &str, description: &str) -> Result<(), StoreError> {
        let slot = self.card_mut(card)?;
        *slot = validate_card(title, description)?;
        Ok(())
    }

    /// Remove a card, returning it.
    pub fn delete_card(&mut self, card: CardRef) -> Result<Card, StoreError> {
        let board = self.board_mut(card.board)?;
        if card.index >= board.cards.len() {
            return Err(StoreError::CardOutOfRange { board: card.board, index: card.index });
        }
        Ok(board.cards.remove(card.index))
    }

    /// Move a card into `to_board` at `to_index`.
    ///
    /// `to_index` counts positions among the target column's cards with the
    /// moved card already taken out, and is clamped to the end of the column.
    /// Returns the card's new reference.
    pub fn move_card(&mut self, from: CardRef, to_board: BoardId, to_index: usize) -> Result<CardRef, StoreError> {
        self.board(to_board).ok_or(StoreError::UnknownBoard(to_board))?;
        let card = self.delete_card(from)?;
        let target = self.board_mut(to_board)?;
        let index = to_index.min(target.cards.len());
        target.cards.insert(index, card);
        Ok(CardRef::new(to_board, index))
    }

    fn board_mut(&mut self, id: BoardId) -> Result<&mut Board, StoreError> {
        self.boards.iter_mut().find(|b| b.id == id).ok_or(StoreError::UnknownBoard(id))
    }

    fn card_mut(&mut self, card: CardRef) -> Result<&mut Card, StoreError> {
        self.board_mut(card.board)?
            .cards
            .get_mut(card.index)
            .ok_or(StoreError::CardOutOfRange { board: card.board, index: card.index })
    }
}
