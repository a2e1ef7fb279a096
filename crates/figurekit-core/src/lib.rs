//! # FigureKit Core
//!
//! Core types shared by every FigureKit crate.
//! Provides integer pixel geometry, style essentials, the arrow tool
//! vocabulary, error types and the synchronous event bus used to tell a UI
//! that the canvas, the history counters or the drawing settings changed.

pub mod arrows;
pub mod error;
pub mod event_bus;
pub mod geometry;
pub mod style;

pub use arrows::ArrowTool;
pub use error::{ClipboardError, Error, FigureError, PersistenceError, Result};
pub use event_bus::{
    CanvasEvent, DrawingEvent, EventBus, EventBusConfig, EventCategory, EventFilter, HistoryEvent,
    SettingsEvent, SharedEventBus, SubscriptionId,
};
pub use geometry::{Point, Rect, COORD_LIMIT};
pub use style::{Essentials, Rgba};

/// Pixel tolerance used by hit-tests and figure bounds.
pub const TOLERANCE: i32 = 5;
