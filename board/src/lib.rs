//! Board model and interaction core for the task board.
//!
//! This crate holds everything about the board that does not need a browser:
//! the ordered list of columns and their cards, the store that mutates them,
//! input validation for the card dialog, the drag/reorder gesture engine, and
//! the JSON layout written to local storage. The `taskboard` UI crate renders
//! from [`store::BoardStore`] and feeds DOM events into [`drag::DragSession`]
//! and [`dialog::CardDialog`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | `Board`, `Card`, `BoardId`, `CardRef` and the default seed |
//! | [`store`] | Authoritative in-memory board list and its mutations |
//! | [`validate`] | Title/description validation and user-facing messages |
//! | [`dialog`] | Add/edit dialog state and keyboard mapping |
//! | [`drag`] | Drag gesture state and the insertion-point algorithm |
//! | [`geometry`] | Points and rectangles in client (CSS pixel) space |
//! | [`storage`] | Storage backend trait and the persisted JSON codec |
//! | [`consts`] | Storage key and user-facing strings |

pub mod consts;
pub mod dialog;
pub mod drag;
pub mod geometry;
pub mod model;
pub mod storage;
pub mod store;
pub mod validate;
