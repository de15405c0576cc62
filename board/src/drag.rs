//! Drag gesture engine: live card reordering under a pointer or finger.
//!
//! A `DragSession` exists only between pointer/touch start on a card and the
//! matching release. Each move event brings a fresh measurement of the
//! columns (`ColumnLayout`); the session hit-tests the column under the
//! point, finds the insertion slot among the cards that are not being
//! dragged, and moves the card in the store right away so the view follows
//! the gesture.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::DRAG_THRESHOLD;
use crate::geometry::{Point, Rect};
use crate::model::{BoardId, CardRef};
use crate::store::{BoardStore, StoreError};

/// Which input device drives the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Mouse,
    Touch,
}

/// Client-space layout of one column, measured at event time.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub board: BoardId,
    /// Bounds of the whole column, used for hit-testing.
    pub rect: Rect,
    /// Bounds of each rendered card, in model order.
    pub cards: Vec<Rect>,
}

/// Index of the card the dragged card should be inserted before.
///
/// Picks the card whose vertical midpoint is below `pointer_y` and closest to
/// it (the smallest strictly negative `pointer_y - mid`). `None` means the
/// pointer is below every card and the dragged card goes last.
#[must_use]
pub fn insertion_index<I>(midpoints: I, pointer_y: f64) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut closest: Option<(usize, f64)> = None;
    for (index, mid) in midpoints.into_iter().enumerate() {
        let offset = pointer_y - mid;
        if offset < 0.0 && closest.map_or(true, |(_, best)| offset > best) {
            closest = Some((index, offset));
        }
    }
    closest.map(|(index, _)| index)
}

/// The column whose bounds contain `point`, if any.
#[must_use]
pub fn hit_column(columns: &[ColumnLayout], point: Point) -> Option<&ColumnLayout> {
    columns.iter().find(|column| column.rect.contains(point))
}

/// Result of a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    /// Where the card ended up.
    pub card: CardRef,
    /// Whether the store changed during the gesture and needs persisting.
    pub moved: bool,
}

/// State of one in-progress drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    card: CardRef,
    kind: InputKind,
    start: Point,
    current: Point,
    grab: Point,
    width: f64,
    engaged: bool,
    moved: bool,
}

impl DragSession {
    /// Start dragging `card`, grabbed at `start` while it occupies `card_rect`.
    #[must_use]
    pub fn begin(card: CardRef, kind: InputKind, start: Point, card_rect: Rect) -> Self {
        Self {
            card,
            kind,
            start,
            current: start,
            grab: start.delta_from(Point::new(card_rect.x, card_rect.y)),
            width: card_rect.width,
            engaged: false,
            moved: false,
        }
    }

    #[must_use]
    pub fn card(&self) -> CardRef {
        self.card
    }

    #[must_use]
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Whether `card` is the one under the gesture and the press has
    /// travelled far enough to count as a drag.
    #[must_use]
    pub fn is_dragging(&self, card: CardRef) -> bool {
        self.engaged && self.card == card
    }

    /// Whether the press has passed `DRAG_THRESHOLD`. A press that never
    /// engages is a click and never reorders anything.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Pointer travel since the gesture started.
    #[must_use]
    pub fn translation(&self) -> Point {
        self.current.delta_from(self.start)
    }

    /// Top-left corner that keeps the floating card under the pointer at the
    /// same spot it was grabbed.
    #[must_use]
    pub fn floating_origin(&self) -> Point {
        self.current.delta_from(self.grab)
    }

    /// Width the floating card keeps while detached from its column.
    #[must_use]
    pub fn floating_width(&self) -> f64 {
        self.width
    }

    /// Track the pointer without hit-testing. Engagement is sticky: once
    /// past the threshold the gesture stays a drag until it ends.
    pub fn track(&mut self, point: Point) {
        self.current = point;
        if !self.engaged {
            let travel = self.translation();
            self.engaged = travel.x.hypot(travel.y) > DRAG_THRESHOLD;
        }
    }

    /// Track the pointer and reorder into whichever column is under it.
    /// Nothing is reordered before the gesture engages.
    ///
    /// Returns whether the store changed.
    pub fn hover(&mut self, store: &mut BoardStore, columns: &[ColumnLayout], point: Point) -> Result<bool, StoreError> {
        self.track(point);
        if !self.engaged {
            return Ok(false);
        }
        match hit_column(columns, point) {
            Some(column) => self.reorder_into(store, column, point.y),
            None => Ok(false),
        }
    }

    /// End the gesture. Live moves stay applied.
    #[must_use]
    pub fn finish(self) -> DragOutcome {
        DragOutcome { card: self.card, moved: self.moved }
    }

    fn reorder_into(&mut self, store: &mut BoardStore, column: &ColumnLayout, pointer_y: f64) -> Result<bool, StoreError> {
        let same_column = column.board == self.card.board;
        let undragged: Vec<f64> = column
            .cards
            .iter()
            .enumerate()
            .filter(|(index, _)| !(same_column && *index == self.card.index))
            .map(|(_, rect)| rect.mid_y())
            .collect();
        let target = insertion_index(undragged.iter().copied(), pointer_y).unwrap_or(undragged.len());
        if same_column && target == self.card.index {
            return Ok(false);
        }
        self.card = store.move_card(self.card, column.board, target)?;
        self.moved = true;
        Ok(true)
    }
}
