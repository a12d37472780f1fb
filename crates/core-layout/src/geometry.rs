//! Frame geometry shared by every layout strategy.
//!
//! Coordinates follow the host window's content view: origin at the
//! bottom-left corner, `y` growing upward, units in points. "Top of the
//! content area" therefore means `y == content_view_height`, and a frame
//! flush against the top edge has `max_y() == content_view_height`.
//!
//! Invariants:
//! * Values are never clamped. A negative width/height produced by
//!   oversubscribed inputs is returned as-is so callers can detect it.
//! * `Rect::ZERO` is the canonical "not laid out" frame.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned frame in content-view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Top edge (origin is bottom-left).
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Copy of `self` with the height reduced by `amount`, keeping the origin.
    /// The top edge moves down; the bottom edge stays put.
    pub fn shrunk_from_top(&self, amount: f64) -> Self {
        Self {
            origin: self.origin,
            size: Size::new(self.size.width, self.size.height - amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rect_is_empty() {
        assert!(Rect::ZERO.is_empty());
        assert_eq!(Rect::default(), Rect::ZERO);
    }

    #[test]
    fn edges_follow_bottom_left_origin() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_x(), 110.0);
        assert_eq!(r.max_y(), 70.0);
        assert!(!r.is_empty());
    }

    #[test]
    fn shrink_from_top_keeps_origin() {
        let r = Rect::new(0.0, 21.0, 800.0, 579.0).shrunk_from_top(28.0);
        assert_eq!(r.origin, Point::new(0.0, 21.0));
        assert_eq!(r.height(), 551.0);
        assert_eq!(r.max_y(), 572.0);
    }

    #[test]
    fn negative_sizes_are_not_clamped() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0).shrunk_from_top(8.0);
        assert_eq!(r.height(), -3.0);
        assert!(r.is_empty());
    }
}
