//! Tool registry: maps toolbar tool names to figure constructors.

use std::collections::BTreeMap;

use figurekit_core::{Essentials, FigureError, Point};

use crate::model::{
    CircleShape, EllipseShape, Figure, FigureId, LineShape, PointShape, RectangleShape, Shape,
    TriangleShape,
};

/// Builds the initial shape of a figure from the first click.
pub type ShapeConstructor = fn(Point) -> Shape;

/// Name of the tool that only selects and drags.
pub const HAND_TOOL: &str = "hand";

#[derive(Debug, Clone, Copy)]
enum ToolEntry {
    Shape(ShapeConstructor),
    Hand,
}

/// Result of pressing the canvas with a tool.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Figure(Figure),
    Hand,
}

#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolEntry>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("point", |at| Shape::Point(PointShape::new(at)));
        registry.register("line", |at| Shape::Line(LineShape::new(at)));
        registry.register("rectangle", |at| {
            Shape::Rectangle(RectangleShape::new(at))
        });
        registry.register("square", |at| Shape::Square(RectangleShape::new(at)));
        registry.register("circle", |at| Shape::Circle(CircleShape::new(at)));
        registry.register("ellipse", |at| Shape::Ellipse(EllipseShape::new(at)));
        registry.register("triangle", |at| Shape::Triangle(TriangleShape::new(at)));
        registry
            .tools
            .insert(HAND_TOOL.to_string(), ToolEntry::Hand);
        registry
    }
}

impl ToolRegistry {
    /// A registry with no tools at all.
    pub fn empty() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Registers or replaces a figure tool.
    pub fn register(&mut self, name: impl Into<String>, constructor: ShapeConstructor) {
        self.tools
            .insert(name.into(), ToolEntry::Shape(constructor));
    }

    pub fn unregister(&mut self, name: &str) -> bool {
        self.tools.remove(name).is_some()
    }

    /// Registered tool names in alphabetical order.
    pub fn list_tools(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Creates whatever `name` produces at `at`. `next_id` is only called for figure tools.
    pub fn create(
        &self,
        name: &str,
        at: Point,
        ess: Essentials,
        next_id: impl FnOnce() -> FigureId,
    ) -> Result<Tool, FigureError> {
        match self.tools.get(name) {
            Some(ToolEntry::Shape(constructor)) => {
                Ok(Tool::Figure(Figure::new(next_id(), constructor(at), ess)))
            }
            Some(ToolEntry::Hand) => Ok(Tool::Hand),
            None => Err(FigureError::UnknownTool {
                name: name.to_string(),
            }),
        }
    }
}
