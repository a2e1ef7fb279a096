use figurekit_core::{Essentials, Point, Rect, TOLERANCE};

use super::FigureShape;

/// A single dot. Always finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointShape {
    pub at: Point,
}

impl PointShape {
    pub fn new(at: Point) -> Self {
        Self { at }
    }
}

impl FigureShape for PointShape {
    fn bounds(&self, _ess: &Essentials) -> Option<Rect> {
        Some(Rect::around(self.at, TOLERANCE))
    }

    fn hit_test(&self, ess: &Essentials, x: i32, y: i32) -> bool {
        self.bounds(ess).is_some_and(|b| b.contains(x, y))
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.at = self.at.offset(dx, dy);
    }

    fn anchor(&self) -> Point {
        self.at
    }
}
