//! Geometric primitives: Point, Size, Rect.

use serde::{Deserialize, Serialize};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// X coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle.
    ///
    /// The left and top edges are inside; the right and bottom edges are not.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Move the left edge to `left`, keeping the right edge in place.
    ///
    /// The left edge may end up beyond the original one; the width grows to
    /// match.
    #[must_use]
    pub fn with_left(&self, left: f32) -> Self {
        Self::new(left, self.y, self.right() - left, self.height)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 300.0, 40.0);
        assert_eq!(r.right(), 310.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Point::new(160.0, 40.0));
    }

    #[test]
    fn test_rect_contains_point_half_open() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(r.contains_point(&Point::new(0.0, 0.0)));
        assert!(r.contains_point(&Point::new(99.9, 49.9)));
        assert!(!r.contains_point(&Point::new(100.0, 25.0)));
        assert!(!r.contains_point(&Point::new(50.0, 50.0)));
        assert!(!r.contains_point(&Point::new(100.1, 25.0)));
        assert!(!r.contains_point(&Point::new(50.0, -0.1)));
    }

    #[test]
    fn test_rect_with_left() {
        let r = Rect::new(0.0, 0.0, 300.0, 48.0);
        let zone = r.with_left(r.right() - 100.0);
        assert_eq!(zone, Rect::new(200.0, 0.0, 100.0, 48.0));
    }

    #[test]
    fn test_rect_with_left_past_origin() {
        let r = Rect::new(20.0, 0.0, 60.0, 48.0);
        let zone = r.with_left(r.right() - 100.0);
        assert_eq!(zone.x, -20.0);
        assert_eq!(zone.right(), r.right());
    }

    proptest! {
        #[test]
        fn prop_with_left_keeps_right_edge(x in -500.0f32..500.0, w in 0.0f32..1000.0, left in -500.0f32..500.0) {
            let r = Rect::new(x, 0.0, w, 10.0);
            let moved = r.with_left(left);
            prop_assert!((moved.right() - r.right()).abs() < 1e-3);
            prop_assert_eq!(moved.x, left);
        }
    }
}
