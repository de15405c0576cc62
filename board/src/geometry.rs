//! Client-space geometry used by drag hit-testing.
//!
//! All coordinates are CSS pixels relative to the viewport, matching
//! `clientX`/`clientY` and `getBoundingClientRect()` in the browser.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in client space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }
}

/// An axis-aligned rectangle, shaped like a DOM bounding client rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Vertical midpoint, the pivot of the insertion algorithm.
    #[must_use]
    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Whether `point` lies inside the rectangle. Edges are inclusive, like
    /// `document.elementFromPoint` on a border pixel.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.x + self.width && point.y >= self.y && point.y <= self.bottom()
    }
}
