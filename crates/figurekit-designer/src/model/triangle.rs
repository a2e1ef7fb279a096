use figurekit_core::{Essentials, Point, Rect};

use super::{padded_box, FigureShape};

/// Slack applied to barycentric coordinates so edge clicks still hit.
const EDGE_SLACK: f64 = -0.02;

/// Three-click triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleShape {
    pub first: Point,
    pub second: Option<Point>,
    pub third: Option<Point>,
}

impl TriangleShape {
    pub fn new(first: Point) -> Self {
        Self {
            first,
            second: None,
            third: None,
        }
    }

    pub fn with_vertices(first: Point, second: Point, third: Point) -> Self {
        Self {
            first,
            second: Some(second),
            third: Some(third),
        }
    }

    /// The vertices placed so far.
    pub fn known_vertices(&self) -> Vec<Point> {
        std::iter::once(self.first)
            .chain(self.second)
            .chain(self.third)
            .collect()
    }
}

impl FigureShape for TriangleShape {
    fn bounds(&self, ess: &Essentials) -> Option<Rect> {
        padded_box(&self.known_vertices(), ess.stroke_margin())
    }

    fn hit_test(&self, _ess: &Essentials, x: i32, y: i32) -> bool {
        let (Some(b), Some(c)) = (self.second, self.third) else {
            return false;
        };
        let a = self.first;
        let denom = ((b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y)) as f64;
        if denom == 0.0 {
            return false;
        }
        let l1 = ((b.y - c.y) * (x - c.x) + (c.x - b.x) * (y - c.y)) as f64 / denom;
        let l2 = ((c.y - a.y) * (x - c.x) + (a.x - c.x) * (y - c.y)) as f64 / denom;
        let l3 = 1.0 - l1 - l2;
        l1 >= EDGE_SLACK && l2 >= EDGE_SLACK && l3 >= EDGE_SLACK
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.first = self.first.offset(dx, dy);
        self.second = self.second.map(|p| p.offset(dx, dy));
        self.third = self.third.map(|p| p.offset(dx, dy));
    }

    fn anchor(&self) -> Point {
        self.first
    }

    fn is_finished(&self) -> bool {
        self.second.is_some() && self.third.is_some()
    }

    fn continue_construction(&mut self, at: Point) -> bool {
        if self.second.is_none() {
            self.second = Some(at);
        } else if self.third.is_none() {
            self.third = Some(at);
        } else {
            return false;
        }
        true
    }

    fn retract_construction(&mut self) -> bool {
        self.third.take().or_else(|| self.second.take()).is_some()
    }
}
