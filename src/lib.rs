//! # taskboard
//!
//! Leptos + WASM frontend for the kanban task board.
//!
//! The board model, validation, drag engine and storage codec live in the
//! `board` crate; this crate renders that model into columns and cards and
//! translates mouse, touch and keyboard input into store mutations. Build
//! with the `csr` feature for the browser; without it the browser glue is
//! compiled out and the crate builds and tests natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
