//! Figure model.
//!
//! Every figure variant implements [`FigureShape`]; the [`Shape`] enum wraps
//! the variants and delegates to them, and [`Figure`] attaches identity,
//! style essentials, selection state and arrow links to a shape.

use figurekit_core::{Essentials, Point, Rect};

mod circle;
mod ellipse;
mod figure;
mod group;
mod line;
mod point;
mod rectangle;
mod triangle;

pub use circle::CircleShape;
pub use ellipse::EllipseShape;
pub use figure::Figure;
pub use group::FigureGroup;
pub use line::LineShape;
pub use point::PointShape;
pub use rectangle::RectangleShape;
pub use triangle::TriangleShape;

/// Stable identity of a figure inside one storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(pub u64);

impl std::fmt::Display for FigureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Geometry contract shared by every figure variant.
pub trait FigureShape {
    /// Box covering the figure including its stroke margin, `None` when empty.
    fn bounds(&self, ess: &Essentials) -> Option<Rect>;

    /// Geometry-specific containment test with the figure tolerance.
    fn hit_test(&self, ess: &Essentials, x: i32, y: i32) -> bool;

    /// Moves every known point by the delta, without any checks.
    fn translate(&mut self, dx: i32, dy: i32);

    /// First point placed when the figure was created.
    fn anchor(&self) -> Point;

    fn is_finished(&self) -> bool {
        true
    }

    /// Fills the next missing point. Returns false when nothing was missing.
    fn continue_construction(&mut self, _at: Point) -> bool {
        false
    }

    /// Clears the last filled point. Returns false when nothing can be cleared.
    fn retract_construction(&mut self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Point,
    Line,
    Rectangle,
    Square,
    Circle,
    Ellipse,
    Triangle,
    Group,
}

impl FigureKind {
    pub const ALL: [FigureKind; 8] = [
        FigureKind::Point,
        FigureKind::Line,
        FigureKind::Rectangle,
        FigureKind::Square,
        FigureKind::Circle,
        FigureKind::Ellipse,
        FigureKind::Triangle,
        FigureKind::Group,
    ];

    /// Discriminator written to the `_type` key of saved documents.
    pub fn type_name(&self) -> &'static str {
        match self {
            FigureKind::Point => "Point",
            FigureKind::Line => "Line",
            FigureKind::Rectangle => "Rectangle",
            FigureKind::Square => "Square",
            FigureKind::Circle => "Circle",
            FigureKind::Ellipse => "Ellipse",
            FigureKind::Triangle => "Triangle",
            FigureKind::Group => "FigureGroup",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.type_name() == name)
    }

    /// Human readable name used by the outline.
    pub fn label(&self) -> &'static str {
        match self {
            FigureKind::Group => "Group",
            other => other.type_name(),
        }
    }
}

impl std::fmt::Display for FigureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(PointShape),
    Line(LineShape),
    Rectangle(RectangleShape),
    Square(RectangleShape),
    Circle(CircleShape),
    Ellipse(EllipseShape),
    Triangle(TriangleShape),
    Group(FigureGroup),
}

impl Shape {
    pub fn kind(&self) -> FigureKind {
        match self {
            Shape::Point(_) => FigureKind::Point,
            Shape::Line(_) => FigureKind::Line,
            Shape::Rectangle(_) => FigureKind::Rectangle,
            Shape::Square(_) => FigureKind::Square,
            Shape::Circle(_) => FigureKind::Circle,
            Shape::Ellipse(_) => FigureKind::Ellipse,
            Shape::Triangle(_) => FigureKind::Triangle,
            Shape::Group(_) => FigureKind::Group,
        }
    }
}

impl FigureShape for Shape {
    fn bounds(&self, ess: &Essentials) -> Option<Rect> {
        match self {
            Shape::Point(s) => s.bounds(ess),
            Shape::Line(s) => s.bounds(ess),
            Shape::Rectangle(s) | Shape::Square(s) => s.bounds(ess),
            Shape::Circle(s) => s.bounds(ess),
            Shape::Ellipse(s) => s.bounds(ess),
            Shape::Triangle(s) => s.bounds(ess),
            Shape::Group(s) => s.bounds(ess),
        }
    }

    fn hit_test(&self, ess: &Essentials, x: i32, y: i32) -> bool {
        match self {
            Shape::Point(s) => s.hit_test(ess, x, y),
            Shape::Line(s) => s.hit_test(ess, x, y),
            Shape::Rectangle(s) | Shape::Square(s) => s.hit_test(ess, x, y),
            Shape::Circle(s) => s.hit_test(ess, x, y),
            Shape::Ellipse(s) => s.hit_test(ess, x, y),
            Shape::Triangle(s) => s.hit_test(ess, x, y),
            Shape::Group(s) => s.hit_test(ess, x, y),
        }
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Point(s) => s.translate(dx, dy),
            Shape::Line(s) => s.translate(dx, dy),
            Shape::Rectangle(s) | Shape::Square(s) => s.translate(dx, dy),
            Shape::Circle(s) => s.translate(dx, dy),
            Shape::Ellipse(s) => s.translate(dx, dy),
            Shape::Triangle(s) => s.translate(dx, dy),
            Shape::Group(s) => s.translate(dx, dy),
        }
    }

    fn anchor(&self) -> Point {
        match self {
            Shape::Point(s) => s.anchor(),
            Shape::Line(s) => s.anchor(),
            Shape::Rectangle(s) | Shape::Square(s) => s.anchor(),
            Shape::Circle(s) => s.anchor(),
            Shape::Ellipse(s) => s.anchor(),
            Shape::Triangle(s) => s.anchor(),
            Shape::Group(s) => s.anchor(),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Shape::Point(s) => s.is_finished(),
            Shape::Line(s) => s.is_finished(),
            Shape::Rectangle(s) | Shape::Square(s) => s.is_finished(),
            Shape::Circle(s) => s.is_finished(),
            Shape::Ellipse(s) => s.is_finished(),
            Shape::Triangle(s) => s.is_finished(),
            Shape::Group(s) => s.is_finished(),
        }
    }

    fn continue_construction(&mut self, at: Point) -> bool {
        match self {
            Shape::Point(s) => s.continue_construction(at),
            Shape::Line(s) => s.continue_construction(at),
            Shape::Rectangle(s) | Shape::Square(s) => s.continue_construction(at),
            Shape::Circle(s) => s.continue_construction(at),
            Shape::Ellipse(s) => s.continue_construction(at),
            Shape::Triangle(s) => s.continue_construction(at),
            Shape::Group(s) => s.continue_construction(at),
        }
    }

    fn retract_construction(&mut self) -> bool {
        match self {
            Shape::Point(s) => s.retract_construction(),
            Shape::Line(s) => s.retract_construction(),
            Shape::Rectangle(s) | Shape::Square(s) => s.retract_construction(),
            Shape::Circle(s) => s.retract_construction(),
            Shape::Ellipse(s) => s.retract_construction(),
            Shape::Triangle(s) => s.retract_construction(),
            Shape::Group(s) => s.retract_construction(),
        }
    }
}

/// Box spanning the given points, grown by `margin` on every side.
pub(crate) fn padded_box(points: &[Point], margin: i32) -> Option<Rect> {
    let first = points.first()?;
    let (mut left, mut top, mut right, mut bottom) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        left = left.min(p.x);
        top = top.min(p.y);
        right = right.max(p.x);
        bottom = bottom.max(p.y);
    }
    Some(Rect::from_edges(
        left.saturating_sub(margin),
        top.saturating_sub(margin),
        right.saturating_add(margin),
        bottom.saturating_add(margin),
    ))
}
