//! Style essentials shared by every figure.

use serde::{Deserialize, Serialize};

/// RGBA color serialized as a `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Default pen color: near-black.
pub const DEFAULT_PEN_COLOR: Rgba = Rgba::opaque(1, 1, 1);
/// Default brush color: translucent white.
pub const DEFAULT_BRUSH_COLOR: Rgba = Rgba::new(255, 255, 255, 100);
pub const DEFAULT_PEN_WIDTH: i32 = 2;
pub const DEFAULT_RADIUS: i32 = 5;

/// Pen and brush attributes attached to a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Essentials {
    pub pen_color: Rgba,
    pub brush_color: Rgba,
    pub pen_width: i32,
    pub radius: i32,
}

impl Default for Essentials {
    fn default() -> Self {
        Self {
            pen_color: DEFAULT_PEN_COLOR,
            brush_color: DEFAULT_BRUSH_COLOR,
            pen_width: DEFAULT_PEN_WIDTH,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl Essentials {
    /// Margin added around geometry when computing bounds.
    pub fn stroke_margin(&self) -> i32 {
        self.pen_width.max(crate::TOLERANCE)
    }

    /// Distance from the geometry that still counts as a hit.
    pub fn hit_margin(&self) -> f64 {
        (self.pen_width as f64 / 2.0).max(crate::TOLERANCE as f64)
    }
}
