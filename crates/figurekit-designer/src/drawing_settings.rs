//! Current drawing settings: tool, default style and canvas size.

use figurekit_core::{
    ArrowTool, DrawingEvent, Essentials, EventBus, Rect, Rgba, SettingsEvent, SharedEventBus,
};

/// Default canvas size in pixels.
pub const DEFAULT_CANVAS_WIDTH: i32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: i32 = 600;

/// Settings a toolbar edits. Setters publish a `SettingsEvent` only when the
/// value actually changes.
#[derive(Debug)]
pub struct DrawSettings {
    ess: Essentials,
    tool: Option<String>,
    canvas: Rect,
    bus: SharedEventBus,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self::new(EventBus::shared())
    }
}

impl DrawSettings {
    pub fn new(bus: SharedEventBus) -> Self {
        Self {
            ess: Essentials::default(),
            tool: None,
            canvas: Rect::from_size(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            bus,
        }
    }

    fn publish(&self, event: SettingsEvent) {
        self.bus.publish(DrawingEvent::Settings(event));
    }

    /// Style applied to newly created figures.
    pub fn ess(&self) -> Essentials {
        self.ess
    }

    pub fn set_ess(&mut self, ess: Essentials) {
        self.set_pen_color(ess.pen_color);
        self.set_brush_color(ess.brush_color);
        self.set_pen_width(ess.pen_width);
        self.set_radius(ess.radius);
    }

    pub fn tool(&self) -> Option<&str> {
        self.tool.as_deref()
    }

    pub fn canvas(&self) -> Rect {
        self.canvas
    }

    pub fn set_pen_color(&mut self, color: Rgba) -> bool {
        if self.ess.pen_color == color {
            return false;
        }
        self.ess.pen_color = color;
        self.publish(SettingsEvent::PenColorChanged(color));
        true
    }

    pub fn set_brush_color(&mut self, color: Rgba) -> bool {
        if self.ess.brush_color == color {
            return false;
        }
        self.ess.brush_color = color;
        self.publish(SettingsEvent::BrushColorChanged(color));
        true
    }

    pub fn set_pen_width(&mut self, width: i32) -> bool {
        if self.ess.pen_width == width {
            return false;
        }
        self.ess.pen_width = width;
        self.publish(SettingsEvent::PenWidthChanged(width));
        true
    }

    pub fn set_radius(&mut self, radius: i32) -> bool {
        if self.ess.radius == radius {
            return false;
        }
        self.ess.radius = radius;
        self.publish(SettingsEvent::RadiusChanged(radius));
        true
    }

    pub fn set_tool(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.tool.as_deref() == Some(name.as_str()) {
            return false;
        }
        self.tool = Some(name.clone());
        self.publish(SettingsEvent::ToolChanged(name));
        true
    }

    pub fn set_canvas_size(&mut self, width: i32, height: i32) -> bool {
        let canvas = Rect::from_size(width, height);
        if self.canvas == canvas {
            return false;
        }
        self.canvas = canvas;
        self.publish(SettingsEvent::CanvasResized(canvas));
        true
    }

    /// Parses an arrow tool name and announces it. Unknown names are ignored.
    pub fn arrow_tool(&self, name: &str) -> Option<ArrowTool> {
        let tool = name.parse::<ArrowTool>().ok()?;
        self.publish(SettingsEvent::ArrowToolTriggered(tool));
        Some(tool)
    }
}
