//! JSON documents.
//!
//! A document is a JSON array. Each item holds the figure's attributes plus
//! a `_type` discriminator naming its variant; groups nest their members the
//! same way under `figures`. Ids and arrow links are not stored, so loaded
//! figures get fresh ids from the caller.

use std::io::Write;
use std::path::Path;

use figurekit_core::{Essentials, PersistenceError, Point, COORD_LIMIT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{
    CircleShape, EllipseShape, Figure, FigureGroup, FigureId, FigureKind, LineShape, PointShape,
    RectangleShape, Shape, TriangleShape,
};

/// Key holding the variant name of each item.
pub const TYPE_KEY: &str = "_type";

#[derive(Debug, Serialize, Deserialize)]
struct PointData {
    #[serde(default)]
    ess: Essentials,
    x: i32,
    y: i32,
}

/// Lines, rectangles and squares.
#[derive(Debug, Serialize, Deserialize)]
struct SegmentData {
    #[serde(default)]
    ess: Essentials,
    x1: i32,
    y1: i32,
    #[serde(default)]
    x2: Option<i32>,
    #[serde(default)]
    y2: Option<i32>,
}

/// Circles and ellipses: centre plus rim point.
#[derive(Debug, Serialize, Deserialize)]
struct CenteredData {
    #[serde(default)]
    ess: Essentials,
    x: i32,
    y: i32,
    #[serde(default)]
    rx: Option<i32>,
    #[serde(default)]
    ry: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TriangleData {
    #[serde(default)]
    ess: Essentials,
    x1: i32,
    y1: i32,
    #[serde(default)]
    x2: Option<i32>,
    #[serde(default)]
    y2: Option<i32>,
    #[serde(default)]
    x3: Option<i32>,
    #[serde(default)]
    y3: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GroupData {
    #[serde(default)]
    ess: Essentials,
    figures: Vec<Value>,
}

fn split(p: Option<Point>) -> (Option<i32>, Option<i32>) {
    (p.map(|p| p.x), p.map(|p| p.y))
}

fn join(x: Option<i32>, y: Option<i32>) -> Option<Point> {
    Some(Point::new(x?, y?))
}

fn invalid(kind: FigureKind, source: serde_json::Error) -> PersistenceError {
    PersistenceError::InvalidFigure {
        type_name: kind.type_name().to_string(),
        source,
    }
}

fn rejected(kind: FigureKind, reason: impl std::fmt::Display) -> PersistenceError {
    invalid(kind, <serde_json::Error as serde::de::Error>::custom(reason))
}

/// Fails the item when a coordinate or size is beyond [`COORD_LIMIT`].
fn check_range(
    kind: FigureKind,
    ess: &Essentials,
    coords: &[Option<i32>],
) -> Result<(), PersistenceError> {
    let sizes = [Some(ess.pen_width), Some(ess.radius)];
    match coords
        .iter()
        .chain(&sizes)
        .flatten()
        .find(|v| v.unsigned_abs() > COORD_LIMIT.unsigned_abs())
    {
        Some(v) => Err(rejected(kind, format!("value {} out of range", v))),
        None => Ok(()),
    }
}

fn decode<T: DeserializeOwned>(kind: FigureKind, value: Value) -> Result<T, PersistenceError> {
    serde_json::from_value(value).map_err(|e| invalid(kind, e))
}

/// Attribute dictionary of one figure, `_type` included.
pub fn figure_to_value(figure: &Figure) -> Result<Value, PersistenceError> {
    let ess = figure.ess;
    let mut value = match &figure.shape {
        Shape::Point(p) => serde_json::to_value(PointData {
            ess,
            x: p.at.x,
            y: p.at.y,
        })?,
        Shape::Line(LineShape { start, end }) => {
            let (x2, y2) = split(*end);
            serde_json::to_value(SegmentData {
                ess,
                x1: start.x,
                y1: start.y,
                x2,
                y2,
            })?
        }
        Shape::Rectangle(r) | Shape::Square(r) => {
            let (x2, y2) = split(r.opposite);
            serde_json::to_value(SegmentData {
                ess,
                x1: r.corner.x,
                y1: r.corner.y,
                x2,
                y2,
            })?
        }
        Shape::Circle(CircleShape { center, rim }) | Shape::Ellipse(EllipseShape { center, rim }) => {
            let (rx, ry) = split(*rim);
            serde_json::to_value(CenteredData {
                ess,
                x: center.x,
                y: center.y,
                rx,
                ry,
            })?
        }
        Shape::Triangle(t) => {
            let (x2, y2) = split(t.second);
            let (x3, y3) = split(t.third);
            serde_json::to_value(TriangleData {
                ess,
                x1: t.first.x,
                y1: t.first.y,
                x2,
                y2,
                x3,
                y3,
            })?
        }
        Shape::Group(g) => {
            let figures = g
                .figures()
                .iter()
                .map(figure_to_value)
                .collect::<Result<Vec<_>, _>>()?;
            serde_json::to_value(GroupData { ess, figures })?
        }
    };
    if let Value::Object(map) = &mut value {
        map.insert(
            TYPE_KEY.to_string(),
            Value::String(figure.type_name().to_string()),
        );
    }
    Ok(value)
}

/// Rebuilds a figure from its attribute dictionary.
///
/// Any missing discriminator, unknown variant or missing required field fails
/// the whole item.
pub fn figure_from_value(
    value: Value,
    next_id: &mut dyn FnMut() -> FigureId,
) -> Result<Figure, PersistenceError> {
    let Value::Object(mut map) = value else {
        return Err(PersistenceError::MissingType);
    };
    let type_name = match map.remove(TYPE_KEY) {
        Some(Value::String(name)) => name,
        _ => return Err(PersistenceError::MissingType),
    };
    let kind = FigureKind::from_type_name(&type_name)
        .ok_or(PersistenceError::UnknownType { type_name })?;
    let body = Value::Object(map);

    let (shape, ess) = match kind {
        FigureKind::Point => {
            let d: PointData = decode(kind, body)?;
            check_range(kind, &d.ess, &[Some(d.x), Some(d.y)])?;
            (Shape::Point(PointShape::new(Point::new(d.x, d.y))), d.ess)
        }
        FigureKind::Line => {
            let d: SegmentData = decode(kind, body)?;
            check_range(kind, &d.ess, &[Some(d.x1), Some(d.y1), d.x2, d.y2])?;
            let shape = LineShape {
                start: Point::new(d.x1, d.y1),
                end: join(d.x2, d.y2),
            };
            (Shape::Line(shape), d.ess)
        }
        FigureKind::Rectangle | FigureKind::Square => {
            let d: SegmentData = decode(kind, body)?;
            check_range(kind, &d.ess, &[Some(d.x1), Some(d.y1), d.x2, d.y2])?;
            let shape = RectangleShape {
                corner: Point::new(d.x1, d.y1),
                opposite: join(d.x2, d.y2),
            };
            if kind == FigureKind::Square {
                (Shape::Square(shape), d.ess)
            } else {
                (Shape::Rectangle(shape), d.ess)
            }
        }
        FigureKind::Circle => {
            let d: CenteredData = decode(kind, body)?;
            check_range(kind, &d.ess, &[Some(d.x), Some(d.y), d.rx, d.ry])?;
            let shape = CircleShape {
                center: Point::new(d.x, d.y),
                rim: join(d.rx, d.ry),
            };
            (Shape::Circle(shape), d.ess)
        }
        FigureKind::Ellipse => {
            let d: CenteredData = decode(kind, body)?;
            check_range(kind, &d.ess, &[Some(d.x), Some(d.y), d.rx, d.ry])?;
            let shape = EllipseShape {
                center: Point::new(d.x, d.y),
                rim: join(d.rx, d.ry),
            };
            (Shape::Ellipse(shape), d.ess)
        }
        FigureKind::Triangle => {
            let d: TriangleData = decode(kind, body)?;
            let coords = [Some(d.x1), Some(d.y1), d.x2, d.y2, d.x3, d.y3];
            check_range(kind, &d.ess, &coords)?;
            let shape = TriangleShape {
                first: Point::new(d.x1, d.y1),
                second: join(d.x2, d.y2),
                third: join(d.x3, d.y3),
            };
            (Shape::Triangle(shape), d.ess)
        }
        FigureKind::Group => {
            let d: GroupData = decode(kind, body)?;
            check_range(kind, &d.ess, &[])?;
            let members = d
                .figures
                .into_iter()
                .map(|item| figure_from_value(item, next_id))
                .collect::<Result<Vec<_>, _>>()?;
            let group = FigureGroup::new(members).map_err(|e| rejected(kind, e))?;
            (Shape::Group(group), d.ess)
        }
    };
    Ok(Figure::new(next_id(), shape, ess))
}

/// Serialises finished figures to a pretty-printed JSON array.
pub fn to_json(figures: &[Figure]) -> Result<String, PersistenceError> {
    let items = figures
        .iter()
        .filter(|f| f.is_finished())
        .map(figure_to_value)
        .collect::<Result<Vec<_>, _>>()?;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    Value::Array(items).serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| {
        PersistenceError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Parses a JSON array of figures. The first bad item fails the whole call.
pub fn from_json(
    text: &str,
    next_id: &mut dyn FnMut() -> FigureId,
) -> Result<Vec<Figure>, PersistenceError> {
    let Value::Array(items) = serde_json::from_str(text)? else {
        return Err(PersistenceError::NotAnArray);
    };
    items
        .into_iter()
        .map(|item| figure_from_value(item, next_id))
        .collect()
}

/// Writes the document atomically: a temp file next to `path` is renamed over it.
pub fn save(figures: &[Figure], path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let text = to_json(figures)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| PersistenceError::Io(e.error))?;

    tracing::info!("Saved {} figures to {}", figures.len(), path.display());
    Ok(())
}

pub fn load(
    path: impl AsRef<Path>,
    next_id: &mut dyn FnMut() -> FigureId,
) -> Result<Vec<Figure>, PersistenceError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let figures = from_json(&text, next_id)?;
    tracing::info!("Loaded {} figures from {}", figures.len(), path.display());
    Ok(figures)
}
