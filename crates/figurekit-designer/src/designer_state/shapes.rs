//! Selection-wide edits: delete, group, ungroup, clipboard and size.

use figurekit_core::{FigureError, Point};

use super::DesignerState;
use crate::clipboard;
use crate::commands::DrawingCommand;
use crate::model::FigureId;

impl DesignerState {
    /// Deletes the selection as one undoable step. Returns how many figures went.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.storage.selected_ids();
        if ids.is_empty() {
            return 0;
        }
        let count = ids.len();
        self.run(DrawingCommand::delete(ids));
        count
    }

    /// Groups the selected top-level figures.
    pub fn group_selected(&mut self) -> Result<FigureId, FigureError> {
        let ids = self.storage.selected_ids();
        let command = DrawingCommand::group(&mut self.storage, &ids, self.settings.ess())?;
        let group_id = match &command {
            DrawingCommand::Group(group) => group.group_id(),
            _ => return Err(FigureError::NotAGroup),
        };
        self.run(command);
        Ok(group_id)
    }

    /// Dissolves the single selected group.
    pub fn ungroup_selected(&mut self) -> Result<Vec<FigureId>, FigureError> {
        let ids = self.storage.selected_ids();
        let &[group_id] = ids.as_slice() else {
            return Err(FigureError::NotAGroup);
        };
        let command = DrawingCommand::ungroup(&self.storage, group_id)?;
        let members = self
            .storage
            .find(group_id)
            .and_then(|g| g.as_group())
            .map(|g| g.figures().iter().map(|f| f.id()).collect())
            .unwrap_or_default();
        self.run(command);
        Ok(members)
    }

    /// Grows (positive) or shrinks the selected figures by `delta` pixels.
    pub fn adjust_size(&mut self, delta: i32) -> usize {
        let changed = self.storage.adjust_size_selected(delta);
        self.is_modified |= changed > 0;
        changed
    }

    /// Copies the selection to the clipboard. Failures are logged.
    pub fn copy_selected(&mut self) -> bool {
        match clipboard::copy(&self.storage, self.clipboard.as_mut()) {
            Ok(copied) => copied,
            Err(e) => {
                tracing::warn!("Copy failed: {}", e);
                false
            }
        }
    }

    /// Copies the selection, then deletes it as one undoable step.
    pub fn cut_selected(&mut self) -> bool {
        if !self.copy_selected() {
            return false;
        }
        self.delete_selected() > 0
    }

    /// Pastes at the last pointer position, or the canvas centre.
    pub fn paste(&mut self) -> Option<FigureId> {
        let target = self
            .pointer
            .unwrap_or_else(|| self.settings.canvas().center());
        self.paste_at(target)
    }

    /// Pastes the clipboard figure centred on `target`. Failures are logged.
    pub fn paste_at(&mut self, target: Point) -> Option<FigureId> {
        let canvas = self.settings.canvas();
        let storage = &mut self.storage;
        let pasted = clipboard::figure_from_clipboard(
            self.clipboard.as_mut(),
            target,
            Some(&canvas),
            &mut || storage.generate_id(),
        );
        match pasted {
            Ok(figure) => {
                let id = figure.id();
                self.run(DrawingCommand::add(figure));
                Some(id)
            }
            Err(e) => {
                tracing::warn!("Paste failed: {}", e);
                None
            }
        }
    }
}
