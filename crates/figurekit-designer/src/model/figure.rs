use std::collections::BTreeSet;

use figurekit_core::geometry::fits_within;
use figurekit_core::{Essentials, Point, Rect};

use super::{FigureGroup, FigureId, FigureKind, FigureShape, Shape};

/// A figure on the canvas: a shape plus identity, style and arrow links.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    id: FigureId,
    pub ess: Essentials,
    /// View state only, never persisted.
    pub selected: bool,
    pub shape: Shape,
    observers: BTreeSet<FigureId>,
    move_master: Option<FigureId>,
}

impl Figure {
    pub fn new(id: FigureId, shape: Shape, ess: Essentials) -> Self {
        Self {
            id,
            ess,
            selected: false,
            shape,
            observers: BTreeSet::new(),
            move_master: None,
        }
    }

    pub fn id(&self) -> FigureId {
        self.id
    }

    pub fn kind(&self) -> FigureKind {
        self.shape.kind()
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.shape.bounds(&self.ess)
    }

    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        self.shape.hit_test(&self.ess, x, y)
    }

    pub fn is_finished(&self) -> bool {
        self.shape.is_finished()
    }

    /// Centre of the bounds, used as the arrow endpoint.
    pub fn center(&self) -> Option<Point> {
        self.bounds().map(|b| b.center())
    }

    pub fn anchor(&self) -> Point {
        self.shape.anchor()
    }

    pub fn continue_construction(&mut self, at: Point) -> bool {
        self.shape.continue_construction(at)
    }

    pub fn retract_construction(&mut self) -> bool {
        self.shape.retract_construction()
    }

    /// Moves the figure when its bounds after the move fit `container`.
    ///
    /// Returns whether the move was applied. Observers are not notified here;
    /// see [`FigureStorage::move_figures`](crate::FigureStorage::move_figures).
    pub fn translate_within(&mut self, dx: i32, dy: i32, container: Option<&Rect>) -> bool {
        let Some(current) = self.bounds() else {
            return false;
        };
        if !fits_within(Some(current.translated(dx, dy)), container) {
            return false;
        }
        self.shape.translate(dx, dy);
        true
    }

    /// Moves the figure unconditionally, e.g. to replay a recorded move.
    pub(crate) fn shift(&mut self, dx: i32, dy: i32) {
        self.shape.translate(dx, dy);
    }

    /// Stores the radius and, for circles and ellipses, reshapes the figure.
    pub fn set_radius(&mut self, radius: i32) {
        self.ess.radius = radius;
        match &mut self.shape {
            Shape::Circle(c) => c.set_radius(radius),
            Shape::Ellipse(e) => e.set_radius(radius),
            _ => {}
        }
    }

    pub fn as_group(&self) -> Option<&FigureGroup> {
        match &self.shape {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut FigureGroup> {
        match &mut self.shape {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Figures that follow this one when it moves.
    pub fn observers(&self) -> &BTreeSet<FigureId> {
        &self.observers
    }

    pub fn has_observers(&self) -> bool {
        !self.observers.is_empty()
    }

    /// Returns false when the link already existed or would point at itself.
    pub fn add_observer(&mut self, observer: FigureId) -> bool {
        observer != self.id && self.observers.insert(observer)
    }

    pub fn remove_observer(&mut self, observer: FigureId) -> bool {
        self.observers.remove(&observer)
    }

    pub(crate) fn take_observers(&mut self) -> BTreeSet<FigureId> {
        std::mem::take(&mut self.observers)
    }

    pub(crate) fn restore_observers(&mut self, observers: BTreeSet<FigureId>) {
        self.observers = observers;
    }

    /// The figure whose movement this one currently follows.
    pub fn move_master(&self) -> Option<FigureId> {
        self.move_master
    }

    pub(crate) fn set_move_master(&mut self, master: Option<FigureId>) {
        self.move_master = master;
    }

    /// Finds `id` in this figure or, for groups, among its members.
    pub fn find(&self, id: FigureId) -> Option<&Figure> {
        if self.id == id {
            return Some(self);
        }
        self.as_group()?.figures().iter().find_map(|f| f.find(id))
    }

    pub fn find_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        if self.id == id {
            return Some(self);
        }
        self.as_group_mut()?
            .figures_mut()
            .iter_mut()
            .find_map(|f| f.find_mut(id))
    }

    /// Visits this figure and every nested group member, parents first.
    pub fn walk(&self, visit: &mut impl FnMut(&Figure)) {
        visit(self);
        if let Some(group) = self.as_group() {
            for member in group.figures() {
                member.walk(visit);
            }
        }
    }

    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Figure)) {
        visit(self);
        if let Some(group) = self.as_group_mut() {
            for member in group.figures_mut() {
                member.walk_mut(visit);
            }
        }
    }

    /// Ids of nested group members, not including this figure.
    pub fn member_ids(&self) -> Vec<FigureId> {
        let mut ids = Vec::new();
        self.walk(&mut |f| {
            if f.id != self.id {
                ids.push(f.id);
            }
        });
        ids
    }
}
