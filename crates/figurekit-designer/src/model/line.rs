use figurekit_core::{Essentials, Point, Rect, TOLERANCE};

use super::{padded_box, FigureShape};

/// Straight segment, finished once the second click lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineShape {
    pub start: Point,
    pub end: Option<Point>,
}

impl LineShape {
    pub fn new(start: Point) -> Self {
        Self { start, end: None }
    }

    pub fn between(start: Point, end: Point) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }
}

fn distance_to_segment(a: Point, b: Point, x: i32, y: i32) -> f64 {
    let (vx, vy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
    let (wx, wy) = ((x - a.x) as f64, (y - a.y) as f64);
    let len2 = vx * vx + vy * vy;
    if len2 == 0.0 {
        return a.distance_to(x as f64, y as f64);
    }
    let t = ((wx * vx + wy * vy) / len2).clamp(0.0, 1.0);
    let (px, py) = (a.x as f64 + t * vx, a.y as f64 + t * vy);
    (x as f64 - px).hypot(y as f64 - py)
}

impl FigureShape for LineShape {
    fn bounds(&self, ess: &Essentials) -> Option<Rect> {
        let margin = ess.stroke_margin();
        match self.end {
            Some(end) => padded_box(&[self.start, end], margin),
            None => Some(Rect::around(self.start, margin)),
        }
    }

    fn hit_test(&self, ess: &Essentials, x: i32, y: i32) -> bool {
        let Some(end) = self.end else {
            return false;
        };
        let reach = ess.pen_width as f64 / 2.0 + TOLERANCE as f64;
        distance_to_segment(self.start, end, x, y) <= reach
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.start = self.start.offset(dx, dy);
        self.end = self.end.map(|p| p.offset(dx, dy));
    }

    fn anchor(&self) -> Point {
        self.start
    }

    fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    fn continue_construction(&mut self, at: Point) -> bool {
        if self.end.is_some() {
            return false;
        }
        self.end = Some(at);
        true
    }

    fn retract_construction(&mut self) -> bool {
        self.end.take().is_some()
    }
}
