//! Board data model: columns, cards, and positional card references.
//!
//! A `Board` is one named column on screen. Cards carry no identity of their
//! own; a card is addressed by the board it sits in plus its top-to-bottom
//! index (`CardRef`). The serde layout of `Board` and `Card` is the persisted
//! layout, so field names here are part of the storage format.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable integer identifier of a board. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(pub i64);

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
}

impl Card {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}

/// A named column holding cards in visual top-to-bottom order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Board {
    #[must_use]
    pub fn new(id: BoardId, title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self { id, title: title.into(), cards }
    }
}

/// Positional reference to a card: the board it is in and its index there.
///
/// A `CardRef` is only valid until the next structural mutation of that
/// board; the store returns fresh references from every move or insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardRef {
    pub board: BoardId,
    pub index: usize,
}

impl CardRef {
    #[must_use]
    pub fn new(board: BoardId, index: usize) -> Self {
        Self { board, index }
    }
}

/// The seed shown on first launch, or whenever storage holds nothing usable.
#[must_use]
pub fn default_boards() -> Vec<Board> {
    vec![
        Board::new(
            BoardId(1),
            "To do",
            vec![
                Card::new(
                    "Cats",
                    "Don't forget to clean the litter box and feed them at 6:00 AM before leaving.",
                ),
                Card::new("Cook", "Prepare lunch for several workdays and freeze it."),
            ],
        ),
        Board::new(
            BoardId(2),
            "In progress",
            vec![Card::new("Programming", "Create a task planner to better organize my daily goals.")],
        ),
        Board::new(
            BoardId(3),
            "Completed",
            vec![
                Card::new("Laundry", "Wash and dry the clothes in the laundry basket."),
                Card::new(
                    "Fasting",
                    "Complete intermittent fasting for at least 16 hours. Break it with unsweetened plain yogurt and nuts.",
                ),
            ],
        ),
    ]
}
