//! Persistence: the storage backend seam and the persisted JSON codec.
//!
//! The whole board list lives under one key ([`STORAGE_KEY`]) as a JSON
//! array of boards. Every mutation rewrites the entire value; there is no
//! versioning and the last write wins.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::{HashMap, HashSet};

use crate::consts::STORAGE_KEY;
use crate::model::{Board, BoardId};
use crate::store::{BoardStore, LoadSource};

/// Failure reading or writing persisted boards.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("stored boards are not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode boards: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("stored boards repeat board id {0}")]
    DuplicateBoardId(BoardId),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A string key-value slot, e.g. the browser's `localStorage`.
pub trait Storage {
    /// Read the raw value under `key`, `Ok(None)` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage for tests and non-browser builds.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Parse the persisted board list, rejecting repeated board ids.
pub fn decode_boards(raw: &str) -> Result<Vec<Board>, StorageError> {
    let boards: Vec<Board> = serde_json::from_str(raw).map_err(StorageError::Decode)?;
    let mut seen = HashSet::with_capacity(boards.len());
    for board in &boards {
        if !seen.insert(board.id) {
            return Err(StorageError::DuplicateBoardId(board.id));
        }
    }
    Ok(boards)
}

/// Serialize the board list in the persisted layout.
pub fn encode_boards(boards: &[Board]) -> Result<String, StorageError> {
    serde_json::to_string(boards).map_err(StorageError::Encode)
}

/// Load the store from `storage`, falling back to the default seed.
///
/// A backend read failure is treated like an absent value.
pub fn load_boards<S: Storage + ?Sized>(storage: &S) -> (BoardStore, LoadSource) {
    match storage.get_item(STORAGE_KEY) {
        Ok(raw) => BoardStore::load(raw.as_deref()),
        Err(err) => (BoardStore::default(), LoadSource::Malformed { reason: err.to_string() }),
    }
}

/// Write the full board list to `storage`.
pub fn save_boards<S: Storage + ?Sized>(storage: &mut S, store: &BoardStore) -> Result<(), StorageError> {
    let raw = store.to_json()?;
    storage.set_item(STORAGE_KEY, &raw)
}
