//! Shared constants for the board crate.

// ── Persistence ─────────────────────────────────────────────────

/// The single `localStorage` key holding the serialized board list.
pub const STORAGE_KEY: &str = "boards";

// ── Column chrome ───────────────────────────────────────────────

/// Text shown in a column that has no cards.
pub const EMPTY_PLACEHOLDER: &str = "Empty category.";

/// Label of the per-column add button.
pub const ADD_CARD_LABEL: &str = "+ Add";

// ── Drag ────────────────────────────────────────────────────────

/// Pointer travel, in CSS pixels, before a press on a card becomes a drag.
pub const DRAG_THRESHOLD: f64 = 4.0;

// ── Card dialog ─────────────────────────────────────────────────

/// Dialog heading when creating a card.
pub const ADD_HEADING: &str = "Add";

/// Dialog heading when editing a card.
pub const EDIT_HEADING: &str = "Edit";

/// Placeholder of the title input in add mode.
pub const TITLE_PLACEHOLDER: &str = "Enter a title";

/// Placeholder of the description textarea in add mode.
pub const DESCRIPTION_PLACEHOLDER: &str = "Enter a description";
