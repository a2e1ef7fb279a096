//! Copy and paste of figures as JSON text.

use figurekit_core::{ClipboardError, Essentials, Point, Rect};

use crate::model::{Figure, FigureGroup, FigureId, Shape};
use crate::serialization;
use crate::storage::FigureStorage;

/// Somewhere to put clipboard text.
pub trait ClipboardBackend {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
    fn get_text(&mut self) -> Result<String, ClipboardError>;
}

/// Process-local clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        self.text = Some(text);
        Ok(())
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.text.clone().ok_or(ClipboardError::Empty)
    }
}

/// JSON for the current selection: one figure as is, several wrapped in a group.
///
/// Returns `Ok(None)` when nothing is selected.
pub fn selection_to_json(storage: &FigureStorage) -> Result<Option<String>, ClipboardError> {
    let selected: Vec<Figure> = storage.get_selected().into_iter().cloned().collect();
    let figure = match selected.len() {
        0 => return Ok(None),
        1 => selected.into_iter().next(),
        _ => FigureGroup::new(selected)
            .ok()
            .map(|g| Figure::new(FigureId(0), Shape::Group(g), Essentials::default())),
    };
    let Some(figure) = figure else {
        return Ok(None);
    };
    serialization::to_json(std::slice::from_ref(&figure))
        .map(Some)
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

/// Copies the selection. Returns whether anything was copied.
pub fn copy(
    storage: &FigureStorage,
    backend: &mut dyn ClipboardBackend,
) -> Result<bool, ClipboardError> {
    let Some(text) = selection_to_json(storage)? else {
        return Ok(false);
    };
    backend.set_text(text)?;
    tracing::debug!("Copied {} figures", storage.get_selected().len());
    Ok(true)
}

/// Reads the first figure from clipboard text and centres it on `target`.
///
/// The centring move is checked against `canvas`; if the figure would not
/// fit it keeps its original position.
pub fn figure_from_clipboard(
    backend: &mut dyn ClipboardBackend,
    target: Point,
    canvas: Option<&Rect>,
    next_id: &mut dyn FnMut() -> FigureId,
) -> Result<Figure, ClipboardError> {
    let text = backend.get_text()?;
    if text.trim().is_empty() {
        return Err(ClipboardError::Empty);
    }
    let figures = serialization::from_json(&text, next_id).map_err(|e| {
        tracing::debug!("Clipboard text is not a figure list: {}", e);
        ClipboardError::NoFigure
    })?;
    let mut figure = figures.into_iter().next().ok_or(ClipboardError::NoFigure)?;
    if let Some(center) = figure.center() {
        let (dx, dy) = (target.x - center.x, target.y - center.y);
        if !figure.translate_within(dx, dy, canvas) {
            tracing::debug!("Pasted figure does not fit at ({}, {})", target.x, target.y);
        }
    }
    Ok(figure)
}
