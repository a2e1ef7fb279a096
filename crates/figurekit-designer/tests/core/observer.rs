use figurekit_core::{ArrowTool, Essentials, Point, Rect};
use figurekit_designer::model::{CircleShape, Figure, FigureId, PointShape, Shape};
use figurekit_designer::FigureStorage;

fn add_point(storage: &mut FigureStorage, x: i32, y: i32) -> FigureId {
    let id = storage.generate_id();
    storage.add(Figure::new(
        id,
        Shape::Point(PointShape::new(Point::new(x, y))),
        Essentials::default(),
    ));
    id
}

fn anchor(storage: &FigureStorage, id: FigureId) -> Point {
    storage.find(id).unwrap().anchor()
}

#[test]
fn test_mutual_link_moves_partner_once() {
    let mut storage = FigureStorage::default();
    let a = add_point(&mut storage, 100, 100);
    let b = add_point(&mut storage, 200, 100);
    storage.select_figure(a, true);
    storage.select_figure(b, true);
    storage.apply_arrow_tool(ArrowTool::Double).unwrap();

    let report = storage.change_position(a, 10, 5, None);
    assert_eq!(report.times_moved(a), 1);
    assert_eq!(report.times_moved(b), 1);
    assert_eq!(anchor(&storage, a), Point::new(110, 105));
    assert_eq!(anchor(&storage, b), Point::new(210, 105));
}

#[test]
fn test_single_arrow_is_one_way() {
    let mut storage = FigureStorage::default();
    let a = add_point(&mut storage, 100, 100);
    let b = add_point(&mut storage, 200, 100);
    storage.select_figure(a, true);
    storage.select_figure(b, true);
    storage.apply_arrow_tool(ArrowTool::Single).unwrap();

    storage.change_position(b, 0, 20, None);
    assert_eq!(anchor(&storage, a), Point::new(100, 100));
    storage.change_position(a, 0, 20, None);
    assert_eq!(anchor(&storage, b), Point::new(200, 140));
}

#[test]
fn test_cycle_of_three_terminates() {
    let mut storage = FigureStorage::default();
    let a = add_point(&mut storage, 50, 50);
    let b = add_point(&mut storage, 150, 50);
    let c = add_point(&mut storage, 250, 50);
    storage.link(a, b);
    storage.link(b, c);
    storage.link(c, a);

    let report = storage.change_position(a, 5, 0, None);
    for id in [a, b, c] {
        assert_eq!(report.times_moved(id), 1, "{} moved more than once", id);
    }
}

#[test]
fn test_blocked_mover_still_drags_followers() {
    let mut storage = FigureStorage::default();
    let canvas = Rect::from_size(300, 300);
    let a = add_point(&mut storage, 290, 100);
    let b = add_point(&mut storage, 100, 100);
    storage.link(a, b);

    let report = storage.change_position(a, 20, 0, Some(canvas));
    assert_eq!(report.blocked, vec![a]);
    assert_eq!(anchor(&storage, a), Point::new(290, 100));
    assert_eq!(anchor(&storage, b), Point::new(120, 100));
}

#[test]
fn test_none_arrow_removes_links_and_segments() {
    let mut storage = FigureStorage::default();
    let a = add_point(&mut storage, 10, 10);
    let id = storage.generate_id();
    storage.add(Figure::new(
        id,
        Shape::Circle(CircleShape::with_rim(Point::new(100, 100), Point::new(120, 100))),
        Essentials::default(),
    ));
    storage.select_figure(a, true);
    storage.select_figure(id, true);

    storage.apply_arrow_tool(ArrowTool::Double).unwrap();
    assert_eq!(storage.arrow_segments().len(), 2);

    storage.apply_arrow_tool(ArrowTool::None).unwrap();
    assert!(storage.arrow_segments().is_empty());
    assert!(storage.find(a).unwrap().move_master().is_none());
}

#[test]
fn test_arrow_needs_exactly_two() {
    let mut storage = FigureStorage::default();
    let a = add_point(&mut storage, 10, 10);
    storage.select_figure(a, true);
    assert!(storage.apply_arrow_tool(ArrowTool::Single).is_err());
}
