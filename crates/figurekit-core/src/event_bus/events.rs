//! Event type definitions for the event bus.

use serde::{Deserialize, Serialize};

use crate::arrows::ArrowTool;
use crate::geometry::Rect;
use crate::style::Rgba;

/// Root event enum for all drawing events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawingEvent {
    /// Figure list or figure state changed
    Canvas(CanvasEvent),
    /// Undo/redo stacks changed
    History(HistoryEvent),
    /// Drawing settings changed
    Settings(SettingsEvent),
}

impl DrawingEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            DrawingEvent::Canvas(_) => EventCategory::Canvas,
            DrawingEvent::History(_) => EventCategory::History,
            DrawingEvent::Settings(_) => EventCategory::Settings,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            DrawingEvent::Canvas(CanvasEvent::Updated) => "canvas updated".to_string(),
            DrawingEvent::History(HistoryEvent::CountsChanged { undo, redo }) => {
                format!("history undo={undo} redo={redo}")
            }
            DrawingEvent::Settings(e) => format!("settings {:?}", e),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Canvas,
    History,
    Settings,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Canvas => write!(f, "Canvas"),
            EventCategory::History => write!(f, "History"),
            EventCategory::Settings => write!(f, "Settings"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// Anything on the canvas changed; repaint and rebuild the outline
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEvent {
    /// Current depth of both stacks, for undo/redo counters
    CountsChanged { undo: usize, redo: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingsEvent {
    PenColorChanged(Rgba),
    BrushColorChanged(Rgba),
    PenWidthChanged(i32),
    RadiusChanged(i32),
    ToolChanged(String),
    CanvasResized(Rect),
    /// An arrow tool was triggered for the current selection
    ArrowToolTriggered(ArrowTool),
}
