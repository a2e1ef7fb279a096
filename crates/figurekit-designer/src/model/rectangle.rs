use figurekit_core::{Essentials, Point, Rect};

use super::{padded_box, FigureShape};

/// Two-corner box. Squares share this geometry and differ only in how they are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleShape {
    pub corner: Point,
    pub opposite: Option<Point>,
}

impl RectangleShape {
    pub fn new(corner: Point) -> Self {
        Self {
            corner,
            opposite: None,
        }
    }

    pub fn spanning(corner: Point, opposite: Point) -> Self {
        Self {
            corner,
            opposite: Some(opposite),
        }
    }

    /// Normalised `(left, top, right, bottom)` of the two corners.
    pub fn edges(&self) -> Option<(i32, i32, i32, i32)> {
        let o = self.opposite?;
        Some((
            self.corner.x.min(o.x),
            self.corner.y.min(o.y),
            self.corner.x.max(o.x),
            self.corner.y.max(o.y),
        ))
    }
}

impl FigureShape for RectangleShape {
    fn bounds(&self, ess: &Essentials) -> Option<Rect> {
        let margin = ess.stroke_margin();
        match self.opposite {
            Some(opposite) => padded_box(&[self.corner, opposite], margin),
            None => Some(Rect::around(self.corner, margin)),
        }
    }

    fn hit_test(&self, ess: &Essentials, x: i32, y: i32) -> bool {
        let Some((left, top, right, bottom)) = self.edges() else {
            return false;
        };
        let t = ess.hit_margin();
        let zone = Rect::new(
            (left as f64 - t) as i32,
            (top as f64 - t) as i32,
            ((right - left) as f64 + 2.0 * t) as i32,
            ((bottom - top) as f64 + 2.0 * t) as i32,
        );
        zone.contains(x, y)
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.corner = self.corner.offset(dx, dy);
        self.opposite = self.opposite.map(|p| p.offset(dx, dy));
    }

    fn anchor(&self) -> Point {
        self.corner
    }

    fn is_finished(&self) -> bool {
        self.opposite.is_some()
    }

    fn continue_construction(&mut self, at: Point) -> bool {
        if self.opposite.is_some() {
            return false;
        }
        self.opposite = Some(at);
        true
    }

    fn retract_construction(&mut self) -> bool {
        self.opposite.take().is_some()
    }
}
