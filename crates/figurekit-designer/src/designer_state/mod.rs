//! Designer state manager for UI integration.
//!
//! Glues storage, history, drawing settings, the tool registry and the
//! clipboard together and exposes the operations a UI calls.
//!
//! This module is split into submodules:
//! - `interaction`: pointer and keyboard handling
//! - `shapes`: delete, group, ungroup, clipboard, size adjust
//! - `file_io`: save/load operations

mod file_io;
mod interaction;
mod shapes;

pub use interaction::{DesignerKey, PressOutcome};

use std::path::PathBuf;

use figurekit_core::{ArrowTool, EventBus, FigureError, Point, Rgba, SharedEventBus};

use crate::clipboard::{ClipboardBackend, MemoryClipboard};
use crate::commands::DrawingCommand;
use crate::drawing_settings::DrawSettings;
use crate::factory::ToolRegistry;
use crate::history::{CommandManager, DEFAULT_HISTORY_LIMIT};
use crate::observer::MoveReport;
use crate::storage::FigureStorage;

/// An in-progress drag of the selection.
#[derive(Debug, Clone)]
struct DragState {
    last: Point,
    /// Everything the drag moved since the press, followers included.
    record: MoveReport,
}

/// Designer state for UI integration
pub struct DesignerState {
    pub storage: FigureStorage,
    pub history: CommandManager,
    pub settings: DrawSettings,
    pub tools: ToolRegistry,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    clipboard: Box<dyn ClipboardBackend>,
    drag: Option<DragState>,
    pointer: Option<Point>,
    bus: SharedEventBus,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerState {
    /// Creates a new designer state with an in-memory clipboard.
    pub fn new() -> Self {
        Self::with_bus(EventBus::shared())
    }

    /// Creates a designer whose storage, history and settings publish on `bus`.
    pub fn with_bus(bus: SharedEventBus) -> Self {
        Self {
            storage: FigureStorage::new(bus.clone()),
            history: CommandManager::new(DEFAULT_HISTORY_LIMIT, bus.clone()),
            settings: DrawSettings::new(bus.clone()),
            tools: ToolRegistry::default(),
            current_file_path: None,
            is_modified: false,
            clipboard: Box::new(MemoryClipboard::new()),
            drag: None,
            pointer: None,
            bus,
        }
    }

    /// Replaces the clipboard backend, e.g. with the system clipboard.
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardBackend>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn bus(&self) -> &SharedEventBus {
        &self.bus
    }

    /// Executes a command through the history.
    pub fn run(&mut self, command: DrawingCommand) {
        self.history.execute(command, &mut self.storage);
        self.is_modified = true;
    }

    pub fn undo(&mut self) -> bool {
        let done = self.history.undo(&mut self.storage);
        self.is_modified |= done;
        done
    }

    pub fn redo(&mut self) -> bool {
        let done = self.history.redo(&mut self.storage);
        self.is_modified |= done;
        done
    }

    /// Selects the creation tool for subsequent presses.
    pub fn set_tool(&mut self, name: &str) -> Result<(), FigureError> {
        if !self.tools.contains(name) {
            return Err(FigureError::UnknownTool {
                name: name.to_string(),
            });
        }
        self.settings.set_tool(name);
        Ok(())
    }

    pub fn set_pen_width(&mut self, width: i32) {
        self.settings.set_pen_width(width);
        self.storage.set_pen_width(width);
    }

    pub fn set_pen_color(&mut self, color: Rgba) {
        self.settings.set_pen_color(color);
        self.storage.set_pen_color(color);
    }

    pub fn set_brush_color(&mut self, color: Rgba) {
        self.settings.set_brush_color(color);
        self.storage.set_brush_color(color);
    }

    pub fn set_radius(&mut self, radius: i32) {
        self.settings.set_radius(radius);
        self.storage.set_radius(radius);
    }

    /// Applies the named arrow tool to the two selected figures.
    ///
    /// Returns `Ok(false)` for names that are not arrow tools.
    pub fn apply_arrow_tool(&mut self, name: &str) -> Result<bool, FigureError> {
        let Some(tool) = self.settings.arrow_tool(name) else {
            return Ok(false);
        };
        self.link_selected(tool)?;
        Ok(true)
    }

    pub fn link_selected(&mut self, tool: ArrowTool) -> Result<(), FigureError> {
        self.storage.apply_arrow_tool(tool)?;
        self.is_modified = true;
        Ok(())
    }

    /// Resizes the canvas unless a finished figure would end up outside it.
    pub fn resize_canvas(&mut self, width: i32, height: i32) -> bool {
        let canvas = figurekit_core::Rect::from_size(width, height);
        let blocked = self
            .storage
            .figures()
            .iter()
            .filter(|f| f.is_finished())
            .find(|f| f.bounds().is_some_and(|b| !canvas.contains_rect(&b)));
        if let Some(figure) = blocked {
            tracing::warn!(
                "Canvas {}x{} refused: {} would not fit",
                width,
                height,
                figure.id()
            );
            return false;
        }
        self.settings.set_canvas_size(width, height);
        true
    }
}
