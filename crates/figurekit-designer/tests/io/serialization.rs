use figurekit_core::{Essentials, PersistenceError, Point, Rgba};
use figurekit_designer::model::{
    CircleShape, EllipseShape, Figure, FigureGroup, FigureId, LineShape, PointShape,
    RectangleShape, Shape, TriangleShape,
};
use figurekit_designer::serialization::{from_json, load, save, to_json};
use proptest::prelude::*;

fn counter() -> impl FnMut() -> FigureId {
    let mut next = 0;
    move || {
        next += 1;
        FigureId(next)
    }
}

fn ess_strategy() -> impl Strategy<Value = Essentials> {
    (any::<[u8; 4]>(), any::<[u8; 4]>(), 1..20i32, 1..50i32).prop_map(|(pen, brush, w, r)| {
        Essentials {
            pen_color: Rgba::new(pen[0], pen[1], pen[2], pen[3]),
            brush_color: Rgba::new(brush[0], brush[1], brush[2], brush[3]),
            pen_width: w,
            radius: r,
        }
    })
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let p = || (-500..500i32, -500..500i32).prop_map(|(x, y)| Point::new(x, y));
    prop_oneof![
        p().prop_map(|a| Shape::Point(PointShape::new(a))),
        (p(), p()).prop_map(|(a, b)| Shape::Line(LineShape::between(a, b))),
        (p(), p()).prop_map(|(a, b)| Shape::Rectangle(RectangleShape::spanning(a, b))),
        (p(), p()).prop_map(|(a, b)| Shape::Square(RectangleShape::spanning(a, b))),
        (p(), p()).prop_map(|(a, b)| Shape::Circle(CircleShape::with_rim(a, b))),
        (p(), p()).prop_map(|(a, b)| Shape::Ellipse(EllipseShape::with_rim(a, b))),
        (p(), p(), p()).prop_map(|(a, b, c)| Shape::Triangle(TriangleShape::with_vertices(a, b, c))),
    ]
}

fn figure_strategy() -> impl Strategy<Value = Figure> {
    let leaf = (shape_strategy(), ess_strategy())
        .prop_map(|(shape, ess)| Figure::new(FigureId(0), shape, ess));
    leaf.prop_recursive(2, 12, 4, |inner| {
        (prop::collection::vec(inner, 2..4), ess_strategy()).prop_map(|(members, ess)| {
            let group = FigureGroup::new(members).expect("at least two members");
            Figure::new(FigureId(0), Shape::Group(group), ess)
        })
    })
}

/// Shape and style, recursively, ignoring ids and selection.
fn assert_same_drawing(a: &Figure, b: &Figure) {
    assert_eq!(a.ess, b.ess);
    match (a.as_group(), b.as_group()) {
        (Some(ga), Some(gb)) => {
            assert_eq!(ga.figures().len(), gb.figures().len());
            for (x, y) in ga.figures().iter().zip(gb.figures()) {
                assert_same_drawing(x, y);
            }
        }
        (None, None) => assert_eq!(a.shape, b.shape),
        _ => panic!("{} became {}", a.type_name(), b.type_name()),
    }
}

proptest! {
    #[test]
    fn prop_json_keeps_geometry_and_style(figures in prop::collection::vec(figure_strategy(), 1..5)) {
        let text = to_json(&figures).unwrap();
        let loaded = from_json(&text, &mut counter()).unwrap();
        prop_assert_eq!(loaded.len(), figures.len());
        for (original, restored) in figures.iter().zip(&loaded) {
            assert_same_drawing(original, restored);
        }
    }
}

#[test]
fn test_document_shape() {
    let figures = vec![Figure::new(
        FigureId(3),
        Shape::Line(LineShape::between(Point::new(1, 2), Point::new(3, 4))),
        Essentials::default(),
    )];
    let text = to_json(&figures).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let item = &value[0];
    assert_eq!(item["_type"], "Line");
    assert_eq!(item["x1"], 1);
    assert_eq!(item["y2"], 4);
    // four-space indentation
    assert!(text.contains("\n    {"));
}

#[test]
fn test_unknown_type_fails_load() {
    let err = from_json(r#"[{"_type": "Hexagon", "x": 1}]"#, &mut counter()).unwrap_err();
    assert!(matches!(err, PersistenceError::UnknownType { ref type_name } if type_name == "Hexagon"));
}

#[test]
fn test_missing_field_fails_load() {
    let err = from_json(r#"[{"_type": "Circle", "y": 1}]"#, &mut counter()).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidFigure { .. }));
    assert!(err.to_string().contains("Circle"));
}

#[test]
fn test_missing_type_and_non_array() {
    assert!(matches!(
        from_json(r#"[{"x": 1, "y": 2}]"#, &mut counter()),
        Err(PersistenceError::MissingType)
    ));
    assert!(matches!(
        from_json(r#"{"_type": "Point"}"#, &mut counter()),
        Err(PersistenceError::NotAnArray)
    ));
}

#[test]
fn test_nested_groups_load_with_fresh_ids() {
    let text = r#"[
        {"_type": "FigureGroup", "figures": [
            {"_type": "Point", "x": 10, "y": 10},
            {"_type": "FigureGroup", "figures": [
                {"_type": "Point", "x": 20, "y": 20},
                {"_type": "Line", "x1": 0, "y1": 0, "x2": 5, "y2": 5}
            ]}
        ]}
    ]"#;
    let loaded = from_json(text, &mut counter()).unwrap();
    assert_eq!(loaded.len(), 1);
    let group = &loaded[0];
    assert_eq!(group.member_ids().len(), 4);
    let mut ids = group.member_ids();
    ids.push(group.id());
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("doc.json");
    let figures = vec![
        Figure::new(
            FigureId(1),
            Shape::Triangle(TriangleShape::with_vertices(
                Point::new(0, 0),
                Point::new(40, 0),
                Point::new(20, 30),
            )),
            Essentials::default(),
        ),
        // unfinished figures are not written
        Figure::new(
            FigureId(2),
            Shape::Rectangle(RectangleShape::new(Point::new(5, 5))),
            Essentials::default(),
        ),
    ];
    save(&figures, &path).unwrap();
    let loaded = load(&path, &mut counter()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_same_drawing(&figures[0], &loaded[0]);

    // no temp files are left next to the document
    let entries = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("absent.json"), &mut counter()).unwrap_err();
    assert!(matches!(err, PersistenceError::Io(_)));
}
