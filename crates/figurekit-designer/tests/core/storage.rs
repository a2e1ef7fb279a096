use figurekit_core::{Essentials, Point, Rect};
use figurekit_designer::model::{
    CircleShape, EllipseShape, Figure, FigureGroup, LineShape, RectangleShape, Shape,
    TriangleShape,
};
use figurekit_designer::FigureStorage;
use proptest::prelude::*;

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let p = || (20..380i32, 20..280i32).prop_map(|(x, y)| Point::new(x, y));
    prop_oneof![
        (p(), p()).prop_map(|(a, b)| Shape::Line(LineShape::between(a, b))),
        (p(), p()).prop_map(|(a, b)| Shape::Rectangle(RectangleShape::spanning(a, b))),
        (p(), 1..60i32).prop_map(|(c, r)| Shape::Circle(CircleShape::with_rim(
            c,
            Point::new(c.x + r, c.y)
        ))),
        (p(), 1..60i32, 1..40i32).prop_map(|(c, rx, ry)| Shape::Ellipse(EllipseShape::with_rim(
            c,
            Point::new(c.x + rx, c.y + ry)
        ))),
        (p(), p(), p()).prop_map(|(a, b, c)| Shape::Triangle(TriangleShape::with_vertices(a, b, c))),
    ]
}

proptest! {
    #[test]
    fn prop_moves_never_leave_container(
        shape in shape_strategy(),
        steps in prop::collection::vec((-150..150i32, -150..150i32), 1..15),
    ) {
        let canvas = Rect::from_size(400, 300);
        let mut storage = FigureStorage::default();
        let id = storage.generate_id();
        storage.add(Figure::new(id, shape, Essentials::default()));

        for (dx, dy) in steps {
            let before = storage.find(id).unwrap().bounds().unwrap();
            let report = storage.change_position(id, dx, dy, Some(canvas));
            let after = storage.find(id).unwrap().bounds().unwrap();
            if report.moved.contains(&id) {
                prop_assert!(canvas.contains_rect(&after));
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }
}

#[test]
fn test_group_moves_children_together() {
    let mut storage = FigureStorage::default();
    let a = Figure::new(
        storage.generate_id(),
        Shape::Line(LineShape::between(Point::new(10, 10), Point::new(50, 10))),
        Essentials::default(),
    );
    let b = Figure::new(
        storage.generate_id(),
        Shape::Rectangle(RectangleShape::spanning(Point::new(60, 60), Point::new(90, 80))),
        Essentials::default(),
    );
    let group_id = storage.generate_id();
    let group = Figure::new(
        group_id,
        Shape::Group(FigureGroup::new(vec![a, b]).unwrap()),
        Essentials::default(),
    );
    storage.add(group);

    let before = storage.find(group_id).unwrap().bounds().unwrap();
    let report = storage.change_position(group_id, 7, -3, Some(Rect::from_size(400, 300)));
    assert_eq!(report.moved.len(), 3);
    assert_eq!(
        storage.find(group_id).unwrap().bounds().unwrap(),
        before.translated(7, -3)
    );
}

#[test]
fn test_delete_selected_and_restore_order() {
    let mut storage = FigureStorage::default();
    let ids: Vec<_> = (0..4)
        .map(|i| {
            let id = storage.generate_id();
            storage.add(Figure::new(
                id,
                Shape::Circle(CircleShape::with_rim(
                    Point::new(50 + i * 60, 50),
                    Point::new(60 + i * 60, 50),
                )),
                Essentials::default(),
            ));
            id
        })
        .collect();
    storage.select_figure(ids[1], true);
    storage.select_figure(ids[3], true);

    let removed = storage.delete_selected();
    assert_eq!(storage.len(), 2);
    for figure in removed.into_iter().rev() {
        storage.restore(figure);
    }
    let order: Vec<_> = storage.figures().iter().map(|f| f.id()).collect();
    assert_eq!(order, ids);
}

#[test]
fn test_ids_are_never_reused() {
    let mut storage = FigureStorage::default();
    let first = storage.generate_id();
    storage.clear_all();
    assert!(storage.generate_id() > first);
}
