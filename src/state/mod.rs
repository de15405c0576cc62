//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The board store itself is a `board::store::BoardStore` held in one
//! `RwSignal` provided by `App`. This module adds the glue around it:
//! loading and persisting (`board`) and the transient interaction state of
//! the board page (`ui`).

pub mod board;
pub mod ui;
