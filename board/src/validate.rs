//! Card input validation.
//!
//! Both title and description are required after trimming. Exactly one message
//! is produced per failed save; the message text is what the dialog shows.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::model::Card;

/// Why a card could not be saved. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("You must enter both title and description.")]
    MissingBoth,
    #[error("You must enter a title.")]
    MissingTitle,
    #[error("You must enter a description.")]
    MissingDescription,
}

/// A dialog input field, used to place the inline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

impl ValidationError {
    /// The field the message is rendered next to.
    ///
    /// The combined message sits under the description, below both inputs.
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::MissingTitle => Field::Title,
            Self::MissingDescription | Self::MissingBoth => Field::Description,
        }
    }

    /// Whether `field` itself is missing and should be highlighted.
    #[must_use]
    pub fn marks(self, field: Field) -> bool {
        match self {
            Self::MissingBoth => true,
            Self::MissingTitle => field == Field::Title,
            Self::MissingDescription => field == Field::Description,
        }
    }
}

/// Trim both inputs and build a card, or report which input is missing.
pub fn validate_card(title: &str, description: &str) -> Result<Card, ValidationError> {
    let title = title.trim();
    let description = description.trim();
    match (title.is_empty(), description.is_empty()) {
        (true, true) => Err(ValidationError::MissingBoth),
        (true, false) => Err(ValidationError::MissingTitle),
        (false, true) => Err(ValidationError::MissingDescription),
        (false, false) => Ok(Card::new(title, description)),
    }
}
