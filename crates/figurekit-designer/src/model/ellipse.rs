use figurekit_core::{Essentials, Point, Rect};

use super::FigureShape;

/// Axis-aligned ellipse given by its centre and a corner of its bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseShape {
    pub center: Point,
    pub rim: Option<Point>,
}

impl EllipseShape {
    pub fn new(center: Point) -> Self {
        Self { center, rim: None }
    }

    pub fn with_rim(center: Point, rim: Point) -> Self {
        Self {
            center,
            rim: Some(rim),
        }
    }

    /// Horizontal and vertical semi-axes.
    pub fn semi_axes(&self) -> Option<(i32, i32)> {
        self.rim
            .map(|p| ((p.x - self.center.x).abs(), (p.y - self.center.y).abs()))
    }

    /// Scales both semi-axes so the larger one equals `r`, keeping the rim's quadrant.
    pub fn set_radius(&mut self, r: i32) {
        let (Some(rim), Some((rx0, ry0))) = (self.rim, self.semi_axes()) else {
            return;
        };
        if rx0 == 0 && ry0 == 0 {
            self.rim = Some(self.center.offset(r, r));
            return;
        }
        let k = r as f64 / rx0.max(ry0) as f64;
        let rx = (rx0 as f64 * k) as i32;
        let ry = (ry0 as f64 * k) as i32;
        let sign_x = if rim.x >= self.center.x { 1 } else { -1 };
        let sign_y = if rim.y >= self.center.y { 1 } else { -1 };
        self.rim = Some(self.center.offset(sign_x * rx, sign_y * ry));
    }
}

impl FigureShape for EllipseShape {
    fn bounds(&self, ess: &Essentials) -> Option<Rect> {
        let t = ess.stroke_margin();
        let Some((rx, ry)) = self.semi_axes() else {
            return Some(Rect::around(self.center, t));
        };
        Some(Rect::new(
            self.center.x - rx - t,
            self.center.y - ry - t,
            2 * rx + 2 * t + 1,
            2 * ry + 2 * t + 1,
        ))
    }

    fn hit_test(&self, ess: &Essentials, x: i32, y: i32) -> bool {
        let Some((rx, ry)) = self.semi_axes() else {
            return false;
        };
        if rx == 0 || ry == 0 {
            return false;
        }
        let nx = (x - self.center.x) as f64 / rx as f64;
        let ny = (y - self.center.y) as f64 / ry as f64;
        nx * nx + ny * ny <= 1.0 + ess.hit_margin() / rx.max(ry) as f64
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
