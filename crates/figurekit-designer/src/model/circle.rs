use figurekit_core::{Essentials, Point, Rect, TOLERANCE};

use super::FigureShape;

/// Circle given by its centre and a rim point.
///
/// The radius is the Chebyshev distance between the two points, so the rim
/// point marks a corner of the enclosing square rather than a point on the
/// curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub center: Point,
    pub rim: Option<Point>,
}

impl CircleShape {
    pub fn new(center: Point) -> Self {
        Self { center, rim: None }
    }

    pub fn with_rim(center: Point, rim: Point) -> Self {
        Self {
            center,
            rim: Some(rim),
        }
    }

    pub fn radius(&self) -> Option<i32> {
        self.rim.map(|p| {
            (p.x - self.center.x)
                .abs()
                .max((p.y - self.center.y).abs())
        })
    }

    /// Rewrites the rim point so the circle gets radius `r`.
    pub fn set_radius(&mut self, r: i32) {
        if self.rim.is_some() {
            self.rim = Some(self.center.offset(r, r));
        }
    }
}

impl FigureShape for CircleShape {
    fn bounds(&self, ess: &Essentials) -> Option<Rect> {
        let half = match self.radius() {
            Some(r) => r.max(ess.pen_width).max(TOLERANCE),
            None => ess.stroke_margin(),
        };
        Some(Rect::around(self.center, half))
    }

    fn hit_test(&self, ess: &Essentials, x: i32, y: i32) -> bool {
        let Some(r) = self.radius() else {
            return false;
        };
        self.center.distance_to(x as f64, y as f64) <= r as f64 + ess.hit_margin()
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.center = self.center.offset(dx, dy);
        self.rim = self.rim.map(|p| p.offset(dx, dy));
    }

    fn anchor(&self) -> Point {
        self.center
    }

    fn is_finished(&self) -> bool {
        self.rim.is_some()
    }

    fn continue_construction(&mut self, at: Point) -> bool {
        if self.rim.is_some() {
            return false;
        }
        self.rim = Some(at);
        true
    }

    fn retract_construction(&mut self) -> bool {
        self.rim.take().is_some()
    }
}
