//! Pointer and keyboard handling.

use figurekit_core::{FigureError, Point};

use super::{DesignerState, DragState};
use crate::commands::{DrawingCommand, MoveFigures};
use crate::factory::Tool;
use crate::model::FigureId;
use crate::observer::MoveReport;

/// What a pointer press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// A figure under the pointer was selected.
    Selected(FigureId),
    /// The current tool created a new figure.
    Created(FigureId),
    /// The press added a construction point to an unfinished figure.
    Continued(FigureId),
    Nothing,
}

/// Keyboard shortcuts understood by the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignerKey {
    Delete,
    Grow,
    Shrink,
    Escape,
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,
}

impl DesignerState {
    /// Handles a button press at `at`.
    ///
    /// A press on a figure selects it; with `ctrl` held the selection is
    /// extended. A press on empty canvas clears the selection (unless `ctrl`
    /// is held) and applies the current tool.
    pub fn pointer_press(&mut self, at: Point, ctrl: bool) -> Result<PressOutcome, FigureError> {
        self.pointer = Some(at);
        self.drag = Some(DragState {
            last: at,
            record: MoveReport::default(),
        });

        if let Some(hit) = self.storage.topmost_at(at.x, at.y) {
            if !ctrl {
                self.storage.deselect_all();
            }
            self.storage.select_figure(hit, true);
            return Ok(PressOutcome::Selected(hit));
        }

        if !ctrl {
            self.storage.deselect_all();
        }
        let Some(name) = self.settings.tool().map(str::to_owned) else {
            return Ok(PressOutcome::Nothing);
        };
        let storage = &mut self.storage;
        let created = self
            .tools
            .create(&name, at, self.settings.ess(), || storage.generate_id())?;
        let Tool::Figure(figure) = created else {
            return Ok(PressOutcome::Nothing);
        };

        let new_id = figure.id();
        let mut command = DrawingCommand::add(figure);
        command.execute(&mut self.storage);
        let target = match &command {
            DrawingCommand::Add(add) => add.target(),
            _ => None,
        };
        self.history.record(command);
        self.is_modified = true;

        Ok(match target {
            Some(id) if id == new_id => PressOutcome::Created(id),
            Some(id) => PressOutcome::Continued(id),
            None => PressOutcome::Nothing,
        })
    }

    /// Drags the selection to follow the pointer. Returns whether anything moved.
    pub fn pointer_drag(&mut self, at: Point) -> bool {
        self.pointer = Some(at);
        let canvas = self.settings.canvas();
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let (dx, dy) = (at.x - drag.last.x, at.y - drag.last.y);
        drag.last = at;
        if dx == 0 && dy == 0 {
            return false;
        }

        let mut any = false;
        for id in self.storage.selected_ids() {
            let report = self.storage.change_position(id, dx, dy, Some(canvas));
            any |= !report.shifted.is_empty();
            drag.record.merge(report);
        }
        any
    }

    /// Ends a drag, recording the accumulated moves as one undoable step.
    pub fn pointer_release(&mut self, at: Point) {
        self.pointer = Some(at);
        let Some(drag) = self.drag.take() else {
            return;
        };
        if drag.record.is_noop() {
            return;
        }
        tracing::debug!("Drag finished, {} shifts", drag.record.shifted.len());
        self.history
            .record(DrawingCommand::Move(MoveFigures::recorded(drag.record)));
        self.is_modified = true;
    }

    /// Tracks the pointer without a button held. Returns whether it is over a figure.
    pub fn pointer_hover(&mut self, at: Point) -> bool {
        self.pointer = Some(at);
        self.storage.topmost_at(at.x, at.y).is_some()
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Runs the action bound to `key`. Returns whether anything changed.
    pub fn handle_key(&mut self, key: DesignerKey) -> bool {
        match key {
            DesignerKey::Delete => self.delete_selected() > 0,
            DesignerKey::Grow => self.adjust_size(1) > 0,
            DesignerKey::Shrink => self.adjust_size(-1) > 0,
            DesignerKey::Escape => {
                let had_selection = !self.storage.selected_ids().is_empty();
                self.storage.deselect_all();
                had_selection
            }
            DesignerKey::Copy => self.copy_selected(),
            DesignerKey::Cut => self.cut_selected(),
            DesignerKey::Paste => self.paste().is_some(),
            DesignerKey::Undo => self.undo(),
            DesignerKey::Redo => self.redo(),
        }
    }
}
