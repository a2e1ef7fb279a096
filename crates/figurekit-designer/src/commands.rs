//! Reversible drawing commands.
//!
//! Each command carries enough state to invert itself exactly: removed
//! figures with their former positions and links, group membership, or
//! everything a move touched.

use std::collections::BTreeSet;

use figurekit_core::{Essentials, FigureError, Point, Rect};

use crate::model::{Figure, FigureGroup, FigureId, Shape};
use crate::observer::MoveReport;
use crate::storage::{AddOutcome, FigureStorage, RemovedFigure};

#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum DrawingCommand {
    Add(AddFigure),
    Delete(DeleteFigures),
    Move(MoveFigures),
    Group(GroupFigures),
    Ungroup(UngroupFigure),
}

#[derive(Debug, Clone)]
pub struct AddFigure {
    /// The figure to add, until the first execution.
    pending: Option<Figure>,
    placed: Option<Placement>,
    /// The added figure while the command is undone.
    undone: Option<RemovedFigure>,
}

#[derive(Debug, Clone)]
enum Placement {
    Inserted {
        id: FigureId,
        discarded: Option<RemovedFigure>,
    },
    Continued {
        target: FigureId,
        at: Point,
    },
}

#[derive(Debug, Clone)]
pub struct DeleteFigures {
    ids: Vec<FigureId>,
    /// Removal records, in removal order, while executed.
    removed: Vec<RemovedFigure>,
}

#[derive(Debug, Clone)]
pub struct MoveFigures {
    moves: Vec<(FigureId, i32, i32)>,
    bounds: Option<Rect>,
    /// What the first execution did, linked followers included. Later
    /// executions replay it.
    record: Option<MoveReport>,
}

#[derive(Debug, Clone)]
pub struct GroupFigures {
    group_id: FigureId,
    ess: Essentials,
    /// Members with their original top-level index, ascending.
    members: Vec<(usize, FigureId)>,
    /// Observer lists and selection flags the members had before grouping.
    stripped: Vec<(FigureId, BTreeSet<FigureId>, bool)>,
}

#[derive(Debug, Clone)]
pub struct UngroupFigure {
    group_id: FigureId,
    index: usize,
    member_ids: Vec<FigureId>,
    /// The emptied group while the command is executed.
    shell: Option<Figure>,
}

impl AddFigure {
    pub fn new(figure: Figure) -> Self {
        Self {
            pending: Some(figure),
            placed: None,
            undone: None,
        }
    }

    /// Id of the figure this command created or extended.
    pub fn target(&self) -> Option<FigureId> {
        match (&self.pending, &self.placed) {
            (Some(figure), _) => Some(figure.id()),
            (_, Some(Placement::Inserted { id, .. })) => Some(*id),
            (_, Some(Placement::Continued { target, .. })) => Some(*target),
            _ => None,
        }
    }

    fn execute(&mut self, storage: &mut FigureStorage) {
        if let Some(figure) = self.pending.take() {
            self.placed = Some(match storage.add(figure) {
                AddOutcome::Inserted { id, discarded } => Placement::Inserted { id, discarded },
                AddOutcome::Continued { target, at } => Placement::Continued { target, at },
            });
            return;
        }
        match &mut self.placed {
            Some(Placement::Inserted { discarded, .. }) => {
                if let Some(old) = discarded.take() {
                    *discarded = storage.delete(old.figure.id());
                }
                if let Some(figure) = self.undone.take() {
                    storage.restore(figure);
                }
            }
            Some(Placement::Continued { target, at }) => {
                storage.continue_construction(*target, *at);
            }
            None => {}
        }
    }

    fn undo(&mut self, storage: &mut FigureStorage) {
        match &self.placed {
            Some(Placement::Inserted { id, discarded }) => {
                self.undone = storage.delete(*id);
                if let Some(old) = discarded {
                    storage.restore(old.clone());
                }
            }
            Some(Placement::Continued { target, .. }) => {
                storage.retract_construction(*target);
            }
            None => {}
        }
    }
}

impl DeleteFigures {
    pub fn new(ids: Vec<FigureId>) -> Self {
        Self {
            ids,
            removed: Vec::new(),
        }
    }

    fn execute(&mut self, storage: &mut FigureStorage) {
        self.removed = self.ids.iter().filter_map(|id| storage.delete(*id)).collect();
    }

    fn undo(&mut self, storage: &mut FigureStorage) {
        for removed in self.removed.drain(..).rev() {
            storage.restore(removed);
        }
    }
}

impl MoveFigures {
    /// Moves every figure in `ids` by the same delta.
    pub fn new(ids: &[FigureId], dx: i32, dy: i32, bounds: Option<Rect>) -> Self {
        Self {
            moves: ids.iter().map(|id| (*id, dx, dy)).collect(),
            bounds,
            record: None,
        }
    }

    /// A move that has already been carried out, e.g. by a drag.
    pub fn recorded(report: MoveReport) -> Self {
        Self {
            moves: Vec::new(),
            bounds: None,
            record: Some(report),
        }
    }

    fn execute(&mut self, storage: &mut FigureStorage) {
        if let Some(record) = &self.record {
            storage.replay_move(record);
            return;
        }
        let mut record = MoveReport::default();
        for (id, dx, dy) in &self.moves {
            record.merge(storage.change_position(*id, *dx, *dy, self.bounds));
        }
        self.record = Some(record);
    }

    fn undo(&mut self, storage: &mut FigureStorage) {
        if let Some(record) = &self.record {
            storage.revert_move(record);
        }
    }
}

impl GroupFigures {
    /// Prepares grouping of the given top-level figures.
    pub fn new(
        storage: &mut FigureStorage,
        ids: &[FigureId],
        ess: Essentials,
    ) -> Result<Self, FigureError> {
        let mut members = Vec::with_capacity(ids.len());
        for id in ids {
            let index = storage
                .index_of(*id)
                .ok_or(FigureError::NotFound { id: id.0 })?;
            members.push((index, *id));
        }
        members.sort_unstable();
        members.dedup();
        if members.len() < 2 {
            return Err(FigureError::GroupTooSmall {
                count: members.len(),
            });
        }
        Ok(Self {
            group_id: storage.generate_id(),
            ess,
            members,
            stripped: Vec::new(),
        })
    }

    pub fn group_id(&self) -> FigureId {
        self.group_id
    }

    fn execute(&mut self, storage: &mut FigureStorage) {
        self.stripped.clear();
        let mut figures = Vec::with_capacity(self.members.len());
        for (_, id) in &self.members {
            let Some((_, mut figure)) = storage.detach(*id) else {
                tracing::warn!("Group member {} vanished", id);
                continue;
            };
            let observers = figure.take_observers();
            self.stripped.push((*id, observers, figure.selected));
            figures.push(figure);
        }
        if figures.len() < 2 {
            tracing::warn!("Grouping failed: {} member(s) left", figures.len());
            self.put_back(storage, figures);
            return;
        }
        match FigureGroup::new(figures) {
            Ok(group) => {
                let group = Figure::new(self.group_id, Shape::Group(group), self.ess);
                storage.insert_at(storage.len(), group);
            }
            Err(e) => tracing::warn!("Grouping failed: {}", e),
        }
    }

    fn undo(&mut self, storage: &mut FigureStorage) {
        let Some((_, mut group)) = storage.detach(self.group_id) else {
            return;
        };
        let figures = group
            .as_group_mut()
            .map(FigureGroup::take_figures)
            .unwrap_or_default();
        self.put_back(storage, figures);
    }

    /// Returns detached members to the top level with their links and selection.
    fn put_back(&mut self, storage: &mut FigureStorage, mut figures: Vec<Figure>) {
        for (id, observers, selected) in self.stripped.drain(..) {
            if let Some(figure) = figures.iter_mut().find(|f| f.id() == id) {
                figure.restore_observers(observers);
                figure.selected = selected;
            }
        }
        for (index, id) in &self.members {
            if let Some(pos) = figures.iter().position(|f| f.id() == *id) {
                storage.insert_at(*index, figures.remove(pos));
            }
        }
    }
}

impl UngroupFigure {
    /// Prepares ungrouping of a top-level group.
    pub fn new(storage: &FigureStorage, group_id: FigureId) -> Result<Self, FigureError> {
        let index = storage.index_of(group_id).ok_or(FigureError::NotFound {
            id: group_id.0,
        })?;
        let group = storage.figures()[index]
            .as_group()
            .ok_or(FigureError::NotAGroup)?;
        Ok(Self {
            group_id,
            index,
            member_ids: group.figures().iter().map(Figure::id).collect(),
            shell: None,
        })
    }

    fn execute(&mut self, storage: &mut FigureStorage) {
        let Some((index, mut group)) = storage.detach(self.group_id) else {
            return;
        };
        self.index = index;
        let figures = group
            .as_group_mut()
            .map(FigureGroup::take_figures)
            .unwrap_or_default();
        for (offset, figure) in figures.into_iter().enumerate() {
            storage.insert_at(index + offset, figure);
        }
        self.shell = Some(group);
    }

    fn undo(&mut self, storage: &mut FigureStorage) {
        let Some(mut shell) = self.shell.take() else {
            return;
        };
        let figures: Vec<Figure> = self
            .member_ids
            .iter()
            .filter_map(|id| storage.detach(*id).map(|(_, f)| f))
            .collect();
        if let Some(group) = shell.as_group_mut() {
            group.put_figures(figures);
        }
        storage.insert_at(self.index, shell);
    }
}

impl DrawingCommand {
    pub fn add(figure: Figure) -> Self {
        DrawingCommand::Add(AddFigure::new(figure))
    }

    pub fn delete(ids: Vec<FigureId>) -> Self {
        DrawingCommand::Delete(DeleteFigures::new(ids))
    }

    pub fn move_by(ids: &[FigureId], dx: i32, dy: i32, bounds: Option<Rect>) -> Self {
        DrawingCommand::Move(MoveFigures::new(ids, dx, dy, bounds))
    }

    pub fn group(
        storage: &mut FigureStorage,
        ids: &[FigureId],
        ess: Essentials,
    ) -> Result<Self, FigureError> {
        GroupFigures::new(storage, ids, ess).map(DrawingCommand::Group)
    }

    pub fn ungroup(storage: &FigureStorage, group_id: FigureId) -> Result<Self, FigureError> {
        UngroupFigure::new(storage, group_id).map(DrawingCommand::Ungroup)
    }

    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            DrawingCommand::Add(_) => "Add Figure",
            DrawingCommand::Delete(_) => "Delete Figures",
            DrawingCommand::Move(_) => "Move Figures",
            DrawingCommand::Group(_) => "Group Figures",
            DrawingCommand::Ungroup(_) => "Ungroup Figure",
        }
    }

    pub fn execute(&mut self, storage: &mut FigureStorage) {
        tracing::debug!("Execute {}", self.name());
        match self {
            DrawingCommand::Add(cmd) => cmd.execute(storage),
            DrawingCommand::Delete(cmd) => cmd.execute(storage),
            DrawingCommand::Move(cmd) => cmd.execute(storage),
            DrawingCommand::Group(cmd) => cmd.execute(storage),
            DrawingCommand::Ungroup(cmd) => cmd.execute(storage),
        }
    }

    pub fn undo(&mut self, storage: &mut FigureStorage) {
        tracing::debug!("Undo {}", self.name());
        match self {
            DrawingCommand::Add(cmd) => cmd.undo(storage),
            DrawingCommand::Delete(cmd) => cmd.undo(storage),
            DrawingCommand::Move(cmd) => cmd.undo(storage),
            DrawingCommand::Group(cmd) => cmd.undo(storage),
            DrawingCommand::Ungroup(cmd) => cmd.undo(storage),
        }
    }
}
