//! Reusable UI components for the board page.

pub mod board_column;
pub mod card_dialog;
pub mod task_card;
