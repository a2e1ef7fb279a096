//! Undo/redo history.

use std::collections::VecDeque;

use figurekit_core::{DrawingEvent, EventBus, HistoryEvent, SharedEventBus};

use crate::commands::DrawingCommand;
use crate::storage::FigureStorage;

/// Default number of undo steps kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Bounded undo/redo stacks of [`DrawingCommand`]s.
///
/// Pushing a new command clears the redo stack; once the undo stack exceeds
/// its limit the oldest entry is dropped.
#[derive(Debug)]
pub struct CommandManager {
    undo_stack: VecDeque<DrawingCommand>,
    redo_stack: Vec<DrawingCommand>,
    limit: usize,
    bus: SharedEventBus,
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT, EventBus::shared())
    }
}

impl CommandManager {
    pub fn new(limit: usize, bus: SharedEventBus) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
            bus,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Changes the limit, dropping the oldest entries that no longer fit.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.truncate();
        self.broadcast();
    }

    /// Pushes a command, running it first when `execute` is set.
    ///
    /// Pass `execute = false` for changes that already happened, such as a
    /// drag that moved figures live.
    pub fn push_command(
        &mut self,
        mut command: DrawingCommand,
        storage: &mut FigureStorage,
        execute: bool,
    ) {
        if execute {
            command.execute(storage);
        }
        self.record(command);
    }

    /// Runs a command and records it.
    pub fn execute(&mut self, command: DrawingCommand, storage: &mut FigureStorage) {
        self.push_command(command, storage, true);
    }

    /// Records a command whose effect is already applied.
    pub fn record(&mut self, command: DrawingCommand) {
        self.undo_stack.push_back(command);
        self.redo_stack.clear();
        self.truncate();
        self.broadcast();
    }

    pub fn undo(&mut self, storage: &mut FigureStorage) -> bool {
        let Some(mut command) = self.undo_stack.pop_back() else {
            return false;
        };
        command.undo(storage);
        self.redo_stack.push(command);
        self.broadcast();
        true
    }

    pub fn redo(&mut self, storage: &mut FigureStorage) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        command.execute(storage);
        self.undo_stack.push_back(command);
        self.truncate();
        self.broadcast();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Names of undoable commands, oldest first.
    pub fn undo_names(&self) -> Vec<&'static str> {
        self.undo_stack.iter().map(DrawingCommand::name).collect()
    }

    /// Names of redoable commands, next redo last.
    pub fn redo_names(&self) -> Vec<&'static str> {
        self.redo_stack.iter().map(DrawingCommand::name).collect()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.broadcast();
    }

    /// Publishes the current stack depths.
    pub fn broadcast(&self) {
        self.bus
            .publish(DrawingEvent::History(HistoryEvent::CountsChanged {
                undo: self.undo_count(),
                redo: self.redo_count(),
            }));
    }

    fn truncate(&mut self) {
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
    }
}
