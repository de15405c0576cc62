//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, DOM measurement, raw
//! input events) from component logic.

pub mod drag_input;
pub mod ui_persistence;
