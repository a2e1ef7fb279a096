use std::sync::{Arc, Mutex};

use figurekit_core::{
    ClipboardError, DrawingEvent, EventFilter, FigureError, HistoryEvent, Point, Rgba,
};
use figurekit_designer::{ClipboardBackend, DesignerKey, DesignerState, FigureKind, PressOutcome};

fn click(state: &mut DesignerState, x: i32, y: i32) -> PressOutcome {
    let outcome = state.pointer_press(Point::new(x, y), false).unwrap();
    state.pointer_release(Point::new(x, y));
    outcome
}

#[test]
fn test_designer_state_new() {
    let state = DesignerState::new();
    assert!(state.storage.is_empty());
    assert!(!state.history.can_undo());
    assert!(state.settings.tool().is_none());
    assert!(!state.is_modified);
}

#[test]
fn test_rectangle_takes_two_clicks() {
    let mut state = DesignerState::new();
    state.set_tool("rectangle").unwrap();
    let PressOutcome::Created(id) = click(&mut state, 100, 100) else {
        panic!("first click creates");
    };
    assert!(!state.storage.find(id).unwrap().is_finished());
    assert_eq!(click(&mut state, 180, 150), PressOutcome::Continued(id));
    assert!(state.storage.find(id).unwrap().is_finished());

    // undoing the second click leaves the first corner
    assert!(state.undo());
    assert!(!state.storage.find(id).unwrap().is_finished());
    assert!(state.redo());
    assert!(state.storage.find(id).unwrap().is_finished());
}

#[test]
fn test_switching_tool_drops_unfinished_figure() {
    let mut state = DesignerState::new();
    state.set_tool("triangle").unwrap();
    click(&mut state, 100, 100);
    state.set_tool("point").unwrap();
    click(&mut state, 300, 300);

    assert_eq!(state.storage.len(), 1);
    assert_eq!(state.storage.figures()[0].kind(), FigureKind::Point);
    assert!(state.undo());
    assert_eq!(state.storage.len(), 1);
    assert_eq!(state.storage.figures()[0].kind(), FigureKind::Triangle);
}

#[test]
fn test_unknown_tool_is_reported() {
    let mut state = DesignerState::new();
    state.tools.register("blob", |at| {
        figurekit_designer::Shape::Point(figurekit_designer::PointShape::new(at))
    });
    state.set_tool("blob").unwrap();
    state.tools.unregister("blob");

    let err = state.pointer_press(Point::new(10, 10), false).unwrap_err();
    assert_eq!(
        err,
        FigureError::UnknownTool {
            name: "blob".to_string()
        }
    );
    assert!(state.storage.is_empty());
}

#[test]
fn test_ctrl_click_extends_selection() {
    let mut state = DesignerState::new();
    state.set_tool("point").unwrap();
    click(&mut state, 50, 50);
    click(&mut state, 150, 50);

    state.pointer_press(Point::new(50, 50), false).unwrap();
    state.pointer_press(Point::new(150, 50), true).unwrap();
    assert_eq!(state.storage.selected_ids().len(), 2);

    state.pointer_press(Point::new(150, 50), false).unwrap();
    assert_eq!(state.storage.selected_ids().len(), 1);
}

#[test]
fn test_style_setters_reach_selection() {
    let mut state = DesignerState::new();
    state.set_tool("circle").unwrap();
    click(&mut state, 100, 100);
    click(&mut state, 120, 100);
    let id = state.storage.figures()[0].id();
    state.storage.select_figure(id, true);

    state.set_pen_width(7);
    state.set_brush_color(Rgba::opaque(10, 20, 30));
    let figure = state.storage.find(id).unwrap();
    assert_eq!(figure.ess.pen_width, 7);
    assert_eq!(figure.ess.brush_color, Rgba::opaque(10, 20, 30));
    assert_eq!(state.settings.ess().pen_width, 7);

    assert!(state.handle_key(DesignerKey::Grow));
    assert_eq!(state.storage.find(id).unwrap().ess.pen_width, 8);
}

#[test]
fn test_arrow_tool_links_selected_pair() {
    let mut state = DesignerState::new();
    state.set_tool("point").unwrap();
    click(&mut state, 50, 50);
    click(&mut state, 150, 50);
    for id in state.storage.figures().iter().map(|f| f.id()).collect::<Vec<_>>() {
        state.storage.select_figure(id, true);
    }
    assert!(state.apply_arrow_tool("single_arrow").unwrap());
    assert!(!state.apply_arrow_tool("wiggly_arrow").unwrap());
    assert_eq!(state.storage.arrow_segments().len(), 1);
}

#[test]
fn test_history_counters_are_published() {
    let state = DesignerState::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    state.bus().subscribe(EventFilter::All, move |event| {
        if let DrawingEvent::History(HistoryEvent::CountsChanged { undo, redo }) = event {
            sink.lock().unwrap().push((*undo, *redo));
        }
    });

    let mut state = state;
    state.set_tool("point").unwrap();
    click(&mut state, 50, 50);
    state.undo();
    assert_eq!(*seen.lock().unwrap(), vec![(1, 0), (0, 1)]);
}

struct BrokenClipboard;

impl ClipboardBackend for BrokenClipboard {
    fn set_text(&mut self, _text: String) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no display".to_string()))
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        Err(ClipboardError::Unavailable("no display".to_string()))
    }
}

#[test]
fn test_clipboard_failures_are_swallowed() {
    let mut state = DesignerState::new().with_clipboard(Box::new(BrokenClipboard));
    state.set_tool("point").unwrap();
    click(&mut state, 50, 50);
    click(&mut state, 50, 50);

    assert!(!state.handle_key(DesignerKey::Copy));
    // cut must not delete what it failed to copy
    assert!(!state.handle_key(DesignerKey::Cut));
    assert_eq!(state.storage.len(), 1);
    assert!(!state.handle_key(DesignerKey::Paste));
}

#[test]
fn test_paste_uses_last_pointer_position() {
    let mut state = DesignerState::new();
    state.set_tool("point").unwrap();
    click(&mut state, 50, 50);
    click(&mut state, 50, 50);
    assert!(state.handle_key(DesignerKey::Copy));

    state.pointer_hover(Point::new(300, 200));
    assert!(state.handle_key(DesignerKey::Paste));
    let pasted = state.storage.figures().last().unwrap();
    assert_eq!(pasted.anchor(), Point::new(300, 200));
    assert_eq!(state.storage.len(), 2);
}
