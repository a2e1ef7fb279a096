use figurekit_core::{ClipboardError, Essentials, Point, Rect};
use figurekit_designer::clipboard::{copy, figure_from_clipboard, selection_to_json};
use figurekit_designer::model::{CircleShape, Figure, FigureId, Shape};
use figurekit_designer::{ClipboardBackend, FigureStorage, MemoryClipboard};

fn storage_with_circle(x: i32, y: i32, r: i32) -> (FigureStorage, FigureId) {
    let mut storage = FigureStorage::default();
    let id = storage.generate_id();
    storage.add(Figure::new(
        id,
        Shape::Circle(CircleShape::with_rim(Point::new(x, y), Point::new(x + r, y))),
        Essentials::default(),
    ));
    (storage, id)
}

#[test]
fn test_nothing_selected_copies_nothing() {
    let (storage, _) = storage_with_circle(100, 100, 20);
    assert_eq!(selection_to_json(&storage).unwrap(), None);

    let mut clip = MemoryClipboard::new();
    assert!(!copy(&storage, &mut clip).unwrap());
    assert_eq!(clip.get_text(), Err(ClipboardError::Empty));
}

#[test]
fn test_copy_paste_gets_a_new_id() {
    let (mut storage, id) = storage_with_circle(100, 100, 20);
    storage.select_figure(id, true);
    let mut clip = MemoryClipboard::new();
    assert!(copy(&storage, &mut clip).unwrap());

    let pasted = figure_from_clipboard(&mut clip, Point::new(200, 150), None, &mut || {
        storage.generate_id()
    })
    .unwrap();
    assert_ne!(pasted.id(), id);
    assert_eq!(pasted.anchor(), Point::new(200, 150));
}

#[test]
fn test_paste_that_does_not_fit_stays_put() {
    let (mut storage, id) = storage_with_circle(100, 100, 20);
    storage.select_figure(id, true);
    let mut clip = MemoryClipboard::new();
    copy(&storage, &mut clip).unwrap();

    let canvas = Rect::from_size(400, 300);
    let pasted = figure_from_clipboard(&mut clip, Point::new(395, 150), Some(&canvas), &mut || {
        FigureId(99)
    })
    .unwrap();
    assert_eq!(pasted.anchor(), Point::new(100, 100));
}
