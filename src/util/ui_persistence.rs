//! Browser `localStorage` backend for the board store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only web-sys glue behind `board::storage::Storage`
//! so the rest of the client never touches `localStorage` directly. Native
//! builds get an empty, write-discarding store.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use board::storage::{Storage, StorageError};

/// `localStorage` of the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Backend("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StorageError::Backend("localStorage is unavailable".to_owned()))
}

#[cfg(feature = "csr")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
