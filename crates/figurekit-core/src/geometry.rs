//! Integer pixel geometry.
//!
//! `Rect` follows the usual raster convention: `width` and `height` count
//! pixels, so `right()` and `bottom()` are inclusive and equal
//! `left + width - 1` and `top + height - 1`.

use serde::{Deserialize, Serialize};

/// Largest coordinate magnitude accepted from documents.
pub const COORD_LIMIT: i32 = 1 << 24;

/// A point on the canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by the given delta.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (x - self.x as f64).hypot(y - self.y as f64)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Canvas rectangle anchored at the origin.
    pub fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Rectangle spanning the inclusive pixel edges.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            left,
            top,
            right.saturating_sub(left).saturating_add(1),
            bottom.saturating_sub(top).saturating_add(1),
        )
    }

    /// Square of `2 * half + 1` pixels centred on `center`.
    pub fn around(center: Point, half: i32) -> Self {
        let side = half.saturating_mul(2).saturating_add(1);
        Self::new(
            center.x.saturating_sub(half),
            center.y.saturating_sub(half),
            side,
            side,
        )
    }

    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width.saturating_sub(1))
    }

    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height.saturating_sub(1))
    }

    /// A rectangle with no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn center(&self) -> Point {
        Point::new(
            midpoint(self.left, self.right()),
            midpoint(self.top, self.bottom()),
        )
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        !self.is_empty()
            && x >= self.left
            && x <= self.right()
            && y >= self.top
            && y <= self.bottom()
    }

    /// Returns true when `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left.saturating_add(dx),
            self.top.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Smallest rectangle covering both.
    pub fn united(&self, other: &Rect) -> Self {
        Self::from_edges(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Grows the rectangle by `margin` pixels on every side.
    pub fn inflated(&self, margin: i32) -> Self {
        let grow = margin.saturating_mul(2);
        Self::new(
            self.left.saturating_sub(margin),
            self.top.saturating_sub(margin),
            self.width.saturating_add(grow),
            self.height.saturating_add(grow),
        )
    }
}

fn midpoint(a: i32, b: i32) -> i32 {
    ((a as i64 + b as i64) / 2) as i32
}

/// Returns true when `rect` fits the optional container. No container means no constraint.
pub fn fits_within(rect: Option<Rect>, container: Option<&Rect>) -> bool {
    match (rect, container) {
        (Some(rect), Some(container)) => container.contains_rect(&rect),
        _ => true,
    }
}
