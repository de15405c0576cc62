//! Board store lifecycle and the render projection.
//!
//! SYSTEM CONTEXT
//! ==============
//! `load_store` runs once at startup; `persist` runs after every committed
//! mutation (dialog save, delete, finished drag). `column_views` is the
//! only shape the components render from, so what is on screen is always a
//! projection of the store and never the other way around.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use board::model::{BoardId, CardRef};
use board::storage::{Storage, load_boards, save_boards};
use board::store::{BoardStore, LoadSource, StoreError};
use leptos::prelude::*;

use crate::util::ui_persistence::BrowserStorage;

/// Load the store from `storage`, logging where the boards came from.
pub fn load_store<S: Storage + ?Sized>(storage: &S) -> BoardStore {
    let (store, source) = load_boards(storage);
    match source {
        LoadSource::Stored => log::debug!("loaded {} boards from storage", store.boards().len()),
        LoadSource::Missing => log::info!("no saved boards; using default boards"),
        LoadSource::Malformed { reason } => log::info!("saved boards unusable ({reason}); using default boards"),
    }
    store
}

/// Write the whole store to `storage`. Failures are logged and otherwise
/// ignored; the in-memory store stays authoritative.
pub fn persist<S: Storage + ?Sized>(storage: &mut S, store: &BoardStore) {
    match save_boards(storage, store) {
        Ok(()) => log::debug!("persisted {} boards", store.boards().len()),
        Err(err) => log::warn!("failed to persist boards: {err}"),
    }
}

/// Apply a user mutation to the shared store and persist it on success.
///
/// Validation failures are expected user input and log at debug; anything
/// else (a stale card reference, an unknown board) logs a warning. Returns
/// `None` when nothing was committed.
pub fn commit<T>(
    store: RwSignal<BoardStore>,
    action: &str,
    mutate: impl FnOnce(&mut BoardStore) -> Result<T, StoreError>,
) -> Option<T> {
    match store.try_update(mutate)? {
        Ok(value) => {
            log::debug!("{action}: committed");
            store.with_untracked(|s| persist(&mut BrowserStorage, s));
            Some(value)
        }
        Err(StoreError::Invalid(err)) => {
            log::debug!("{action}: rejected input: {err}");
            None
        }
        Err(err) => {
            log::warn!("{action}: {err}");
            None
        }
    }
}

/// One rendered column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnView {
    pub id: BoardId,
    pub title: String,
    pub cards: Vec<CardView>,
}

/// One rendered card with the reference its buttons act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub card: CardRef,
    pub title: String,
    pub description: String,
}

impl ColumnView {
    /// Whether the column renders its empty placeholder.
    pub fn shows_placeholder(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Project the store into render order.
pub fn column_views(store: &BoardStore) -> Vec<ColumnView> {
    store
        .boards()
        .iter()
        .map(|board| ColumnView {
            id: board.id,
            title: board.title.clone(),
            cards: board
                .cards
                .iter()
                .enumerate()
                .map(|(index, card)| CardView {
                    card: CardRef::new(board.id, index),
                    title: card.title.clone(),
                    description: card.description.clone(),
                })
                .collect(),
        })
        .collect()
}
