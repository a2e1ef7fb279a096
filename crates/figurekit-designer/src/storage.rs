//! Figure storage.
//!
//! Owns the ordered list of top-level figures and hands out figure ids.
//! Every mutation publishes `CanvasEvent::Updated` on the event bus.

use std::collections::BTreeSet;

use figurekit_core::{
    ArrowTool, CanvasEvent, DrawingEvent, EventBus, FigureError, Point, Rect, Rgba,
    SharedEventBus,
};

use crate::model::{Figure, FigureId};
use crate::observer::{self, MoveReport};

/// A figure taken out of storage together with the links that pointed at it.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedFigure {
    /// Position in the top-level list before removal.
    pub index: usize,
    pub figure: Figure,
    /// `(holder, removed)` pairs: `holder` listed `removed` as an observer.
    pub watchers: Vec<(FigureId, FigureId)>,
    /// `(holder, removed)` pairs: `holder` had `removed` as its move master.
    pub followers: Vec<(FigureId, FigureId)>,
}

/// What [`FigureStorage::add`] did with a figure.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Appended as a new figure. An unfinished figure of another kind may have
    /// been dropped to make room.
    Inserted {
        id: FigureId,
        discarded: Option<RemovedFigure>,
    },
    /// Merged into the unfinished figure `target` as its next point.
    Continued { target: FigureId, at: Point },
}

#[derive(Debug)]
pub struct FigureStorage {
    figures: Vec<Figure>,
    next_id: u64,
    bus: SharedEventBus,
}

impl Default for FigureStorage {
    fn default() -> Self {
        Self::new(EventBus::shared())
    }
}

impl FigureStorage {
    pub fn new(bus: SharedEventBus) -> Self {
        Self {
            figures: Vec::new(),
            next_id: 1,
            bus,
        }
    }

    pub fn bus(&self) -> &SharedEventBus {
        &self.bus
    }

    /// Issues a fresh id. Ids are never reused within one storage.
    pub fn generate_id(&mut self) -> FigureId {
        let id = FigureId(self.next_id);
        self.next_id += 1;
        id
    }

    fn notify(&self) {
        self.bus.publish(DrawingEvent::Canvas(CanvasEvent::Updated));
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Looks `id` up at top level and inside groups.
    pub fn find(&self, id: FigureId) -> Option<&Figure> {
        observer::find(&self.figures, id)
    }

    pub fn find_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        observer::find_mut(&mut self.figures, id)
    }

    /// Position of a top-level figure.
    pub fn index_of(&self, id: FigureId) -> Option<usize> {
        self.figures.iter().position(|f| f.id() == id)
    }

    /// Adds a freshly created figure.
    ///
    /// If an unfinished figure of the same kind exists, the new figure's first
    /// point continues that construction instead. An unfinished figure of
    /// another kind is dropped.
    pub fn add(&mut self, figure: Figure) -> AddOutcome {
        let mut discarded = None;
        if let Some(index) = self.figures.iter().position(|f| !f.is_finished()) {
            let target = self.figures[index].id();
            if self.figures[index].kind() == figure.kind() {
                let at = figure.anchor();
                self.figures[index].continue_construction(at);
                tracing::debug!("{} continued at ({}, {})", target, at.x, at.y);
                self.notify();
                return AddOutcome::Continued { target, at };
            }
            tracing::debug!("Dropping unfinished {}", target);
            discarded = self.delete(target);
        }
        let id = figure.id();
        self.figures.push(figure);
        self.notify();
        AddOutcome::Inserted { id, discarded }
    }

    /// Inserts a figure at `index`, clamped to the list length.
    pub fn insert_at(&mut self, index: usize, figure: Figure) {
        let index = index.min(self.figures.len());
        self.figures.insert(index, figure);
        self.notify();
    }

    /// Removes a top-level figure without touching any links.
    pub fn detach(&mut self, id: FigureId) -> Option<(usize, Figure)> {
        let index = self.index_of(id)?;
        let figure = self.figures.remove(index);
        self.notify();
        Some((index, figure))
    }

    /// Removes a top-level figure and prunes every link pointing into it.
    pub fn delete(&mut self, id: FigureId) -> Option<RemovedFigure> {
        let index = self.index_of(id)?;
        let figure = self.figures.remove(index);

        let mut gone = BTreeSet::new();
        figure.walk(&mut |f| {
            gone.insert(f.id());
        });

        let mut watchers = Vec::new();
        let mut followers = Vec::new();
        for remaining in &mut self.figures {
            remaining.walk_mut(&mut |holder| {
                for removed in &gone {
                    if holder.remove_observer(*removed) {
                        watchers.push((holder.id(), *removed));
                    }
                }
                if let Some(master) = holder.move_master().filter(|m| gone.contains(m)) {
                    holder.set_move_master(None);
                    followers.push((holder.id(), master));
                }
            });
        }

        tracing::debug!(
            "Deleted {} ({} links pruned)",
            id,
            watchers.len() + followers.len()
        );
        self.notify();
        Some(RemovedFigure {
            index,
            figure,
            watchers,
            followers,
        })
    }

    /// Puts a removed figure back where it was, links included.
    pub fn restore(&mut self, removed: RemovedFigure) {
        let index = removed.index.min(self.figures.len());
        self.figures.insert(index, removed.figure);
        for (holder, target) in removed.watchers {
            if let Some(f) = self.find_mut(holder) {
                f.add_observer(target);
            }
        }
        for (holder, master) in removed.followers {
            if let Some(f) = self.find_mut(holder) {
                f.set_move_master(Some(master));
            }
        }
        self.notify();
    }

    /// Deletes every selected figure. Records come back in removal order.
    pub fn delete_selected(&mut self) -> Vec<RemovedFigure> {
        let ids = self.selected_ids();
        ids.into_iter().filter_map(|id| self.delete(id)).collect()
    }

    pub fn clear_all(&mut self) -> Vec<Figure> {
        let figures = std::mem::take(&mut self.figures);
        self.notify();
        figures
    }

    pub fn continue_construction(&mut self, target: FigureId, at: Point) -> bool {
        let done = self
            .find_mut(target)
            .is_some_and(|f| f.continue_construction(at));
        self.notify();
        done
    }

    pub fn retract_construction(&mut self, target: FigureId) -> bool {
        let done = self
            .find_mut(target)
            .is_some_and(|f| f.retract_construction());
        self.notify();
        done
    }

    /// Sets the selection flag of a top-level figure.
    pub fn select_figure(&mut self, id: FigureId, state: bool) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.figures[index].selected = state;
        self.notify();
        true
    }

    pub fn deselect_all(&mut self) {
        let mut changed = false;
        for figure in self.figures.iter_mut().filter(|f| f.selected) {
            figure.selected = false;
            changed = true;
        }
        if changed {
            self.notify();
        }
    }

    pub fn get_selected(&self) -> Vec<&Figure> {
        self.figures.iter().filter(|f| f.selected).collect()
    }

    pub fn selected_ids(&self) -> Vec<FigureId> {
        self.figures
            .iter()
            .filter(|f| f.selected)
            .map(Figure::id)
            .collect()
    }

    /// The figure still waiting for construction clicks, if any.
    pub fn get_incomplete(&self) -> Option<&Figure> {
        self.figures.iter().find(|f| !f.is_finished())
    }

    /// Topmost top-level figure under the point.
    pub fn topmost_at(&self, x: i32, y: i32) -> Option<FigureId> {
        self.figures
            .iter()
            .rev()
            .find(|f| f.hit_test(x, y))
            .map(Figure::id)
    }

    /// Moves one figure and everything linked to it.
    pub fn change_position(
        &mut self,
        id: FigureId,
        dx: i32,
        dy: i32,
        bounds: Option<Rect>,
    ) -> MoveReport {
        let report = observer::propagate_move(&mut self.figures, id, dx, dy, bounds);
        self.notify();
        report
    }

    /// Moves each figure in turn, with propagation, then notifies once.
    pub fn move_figures(
        &mut self,
        ids: &[FigureId],
        dx: i32,
        dy: i32,
        bounds: Option<Rect>,
    ) -> MoveReport {
        let mut report = MoveReport::default();
        for id in ids {
            report.merge(observer::propagate_move(
                &mut self.figures,
                *id,
                dx,
                dy,
                bounds,
            ));
        }
        self.notify();
        report
    }

    /// Reverses a recorded move without propagating it: every shifted figure
    /// goes back and claimed move masters are released.
    pub fn revert_move(&mut self, report: &MoveReport) {
        for (id, dx, dy) in report.shifted.iter().rev() {
            if let Some(figure) = self.find_mut(*id) {
                figure.shift(-dx, -dy);
            }
        }
        for (follower, _) in report.claimed.iter().rev() {
            if let Some(figure) = self.find_mut(*follower) {
                figure.set_move_master(None);
            }
        }
        self.notify();
    }

    /// Applies a recorded move again exactly as it first happened.
    pub fn replay_move(&mut self, report: &MoveReport) {
        for (follower, master) in &report.claimed {
            if let Some(figure) = self.find_mut(*follower) {
                figure.set_move_master(Some(*master));
            }
        }
        for (id, dx, dy) in &report.shifted {
            if let Some(figure) = self.find_mut(*id) {
                figure.shift(*dx, *dy);
            }
        }
        self.notify();
    }

    /// Makes `observer` follow `subject`.
    pub fn link(&mut self, subject: FigureId, observer: FigureId) -> bool {
        if self.find(observer).is_none() {
            return false;
        }
        let linked = self
            .find_mut(subject)
            .is_some_and(|f| f.add_observer(observer));
        if linked {
            tracing::debug!("{} now follows {}", observer, subject);
            self.notify();
        }
        linked
    }

    /// Tears down the `subject` -> `observer` link and frees the observer's move master.
    pub fn unlink(&mut self, subject: FigureId, observer: FigureId) -> bool {
        let unlinked = self
            .find_mut(subject)
            .is_some_and(|f| f.remove_observer(observer));
        if let Some(f) = self.find_mut(observer) {
            if f.move_master() == Some(subject) {
                f.set_move_master(None);
            }
        }
        if unlinked {
            self.notify();
        }
        unlinked
    }

    /// Applies an arrow tool to the two selected figures.
    pub fn apply_arrow_tool(&mut self, tool: ArrowTool) -> Result<(), FigureError> {
        let selected = self.selected_ids();
        let &[first, second] = selected.as_slice() else {
            return Err(FigureError::ArrowNeedsPair {
                count: selected.len(),
            });
        };
        tracing::debug!("Applying {} to {} and {}", tool, first, second);
        match tool {
            ArrowTool::Single => {
                self.link(first, second);
                self.unlink(second, first);
            }
            ArrowTool::Double => {
                self.link(first, second);
                self.link(second, first);
            }
            ArrowTool::None => {
                self.unlink(first, second);
                self.unlink(second, first);
            }
        }
        self.notify();
        Ok(())
    }

    /// `(from, to)` centre pairs for every arrow between top-level figures.
    pub fn arrow_segments(&self) -> Vec<(Point, Point)> {
        let mut segments = Vec::new();
        for figure in self.figures.iter().filter(|f| f.has_observers()) {
            let Some(from) = figure.center() else {
                continue;
            };
            for observer in figure.observers() {
                if let Some(to) = self.find(*observer).and_then(Figure::center) {
                    if to != from {
                        segments.push((from, to));
                    }
                }
            }
        }
        segments
    }

    fn edit_selected(&mut self, mut edit: impl FnMut(&mut Figure)) -> usize {
        let mut count = 0;
        for figure in self.figures.iter_mut().filter(|f| f.selected) {
            edit(figure);
            count += 1;
        }
        self.notify();
        count
    }

    pub fn set_pen_width(&mut self, width: i32) -> usize {
        self.edit_selected(|f| f.ess.pen_width = width)
    }

    pub fn set_pen_color(&mut self, color: Rgba) -> usize {
        self.edit_selected(|f| f.ess.pen_color = color)
    }

    pub fn set_brush_color(&mut self, color: Rgba) -> usize {
        self.edit_selected(|f| f.ess.brush_color = color)
    }

    pub fn set_radius(&mut self, radius: i32) -> usize {
        self.edit_selected(|f| f.set_radius(radius))
    }

    /// Grows or shrinks pen width and radius of the selection, never below 1.
    pub fn adjust_size_selected(&mut self, delta: i32) -> usize {
        self.edit_selected(|f| {
            f.ess.pen_width = (f.ess.pen_width + delta).max(1);
            let radius = (f.ess.radius + delta).max(1);
            f.set_radius(radius);
        })
    }
}
