//! # FigureKit Designer
//!
//! The drawing model behind a FigureKit canvas: figures, their storage,
//! arrow links that make figures follow each other, undoable commands and
//! JSON persistence.
//!
//! ## Core Components
//!
//! - **Model**: points, lines, rectangles, squares, circles, ellipses,
//!   triangles and groups of figures
//! - **Storage**: ordered top-level figures with selection and hit-testing
//! - **Observer**: move propagation along arrow links with cycle protection
//! - **Commands/History**: reversible add, delete, move, group and ungroup
//! - **Serialization**: `_type` tagged JSON documents, saved atomically
//! - **Clipboard**: copy and paste of figures as JSON text
//! - **Factory**: named creation tools
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (UI facade)
//!   ├── FigureStorage ── observer (arrow links)
//!   ├── CommandManager ── DrawingCommand
//!   ├── DrawSettings
//!   ├── ToolRegistry
//!   └── ClipboardBackend
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use figurekit_core::Point;
//! use figurekit_designer::DesignerState;
//!
//! let mut state = DesignerState::new();
//! state.set_tool("line").unwrap();
//! state.pointer_press(Point::new(10, 10), false).unwrap();
//! state.pointer_press(Point::new(90, 40), false).unwrap();
//! assert_eq!(state.storage.len(), 1);
//! assert!(state.undo());
//! ```

pub mod clipboard;
pub mod commands;
pub mod designer_state;
pub mod drawing_settings;
pub mod factory;
pub mod history;
pub mod model;
pub mod observer;
pub mod outline;
pub mod serialization;
pub mod storage;

pub use clipboard::{ClipboardBackend, MemoryClipboard};
pub use commands::DrawingCommand;
pub use designer_state::{DesignerKey, DesignerState, PressOutcome};
pub use drawing_settings::DrawSettings;
pub use factory::{Tool, ToolRegistry, HAND_TOOL};
pub use history::{CommandManager, DEFAULT_HISTORY_LIMIT};
pub use model::{
    CircleShape, EllipseShape, Figure, FigureGroup, FigureId, FigureKind, FigureShape, LineShape,
    PointShape, RectangleShape, Shape, TriangleShape,
};
pub use observer::MoveReport;
pub use outline::OutlineNode;
pub use storage::{AddOutcome, FigureStorage, RemovedFigure};
