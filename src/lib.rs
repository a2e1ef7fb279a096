//! # FigureKit
//!
//! A vector drawing engine: users create, select, move, group and connect
//! geometric figures on a canvas, with undo/redo, clipboard copy/paste, JSON
//! documents and a tree-structured object browser.
//!
//! ## Architecture
//!
//! FigureKit is organized as a workspace with multiple crates:
//!
//! 1. **figurekit-core** - Geometry, style essentials, errors, event bus
//! 2. **figurekit-designer** - Figures, storage, arrow links, commands, persistence
//! 3. **figurekit-settings** - Configuration files
//! 4. **figurekit** - Binary and glue that ties the crates together

pub mod clipboard;

pub use figurekit_designer as designer;
pub use figurekit_settings as settings;

pub use figurekit_core::{
    ArrowTool, ClipboardError, DrawingEvent, Error, Essentials, EventBus, FigureError,
    PersistenceError, Point, Rect, Result, Rgba,
};
pub use figurekit_designer::{
    CommandManager, DesignerKey, DesignerState, DrawingCommand, Figure, FigureId, FigureStorage,
    OutlineNode, PressOutcome, ToolRegistry,
};
pub use figurekit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Builds a designer with the defaults from `config`.
pub fn designer_from_config(config: &Config) -> DesignerState {
    let mut state = DesignerState::new();
    state.settings.set_ess(config.drawing.ess);
    state
        .settings
        .set_canvas_size(config.canvas.width, config.canvas.height);
    state.history.set_limit(config.history.limit);
    if let Some(tool) = &config.drawing.tool {
        if let Err(e) = state.set_tool(tool) {
            tracing::warn!("Ignoring configured tool: {}", e);
        }
    }
    state
}

/// Indented text rendering of the object browser tree.
pub fn format_outline(nodes: &[OutlineNode]) -> String {
    fn walk(node: &OutlineNode, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{} {}", node.label, node.id));
        if node.selected {
            out.push_str(" *");
        }
        out.push('\n');
        for child in &node.children {
            walk(child, depth + 1, out);
        }
    }

    let mut out = String::new();
    for node in nodes {
        walk(node, 0, &mut out);
    }
    out
}
