use figurekit_core::{Essentials, Point, Rect};
use figurekit_designer::model::{Figure, FigureId, PointShape, RectangleShape, Shape};
use figurekit_designer::{CommandManager, DrawingCommand, FigureStorage};
use proptest::prelude::*;

fn point(storage: &mut FigureStorage, x: i32, y: i32) -> Figure {
    let id = storage.generate_id();
    Figure::new(
        id,
        Shape::Point(PointShape::new(Point::new(x, y))),
        Essentials::default(),
    )
}

fn rectangle(storage: &mut FigureStorage, x: i32, y: i32, w: i32, h: i32) -> Figure {
    let id = storage.generate_id();
    Figure::new(
        id,
        Shape::Rectangle(RectangleShape::spanning(
            Point::new(x, y),
            Point::new(x + w, y + h),
        )),
        Essentials::default(),
    )
}

#[test]
fn test_new_command_discards_redo() {
    let mut storage = FigureStorage::default();
    let mut history = CommandManager::default();

    let a = point(&mut storage, 10, 10);
    history.execute(DrawingCommand::add(a), &mut storage);
    let b = point(&mut storage, 20, 20);
    history.execute(DrawingCommand::add(b), &mut storage);

    assert!(history.undo(&mut storage));
    assert_eq!(history.redo_count(), 1);

    let c = point(&mut storage, 30, 30);
    history.execute(DrawingCommand::add(c), &mut storage);
    assert_eq!(history.redo_count(), 0);
    assert!(!history.redo(&mut storage));
    assert_eq!(storage.len(), 2);
}

#[test]
fn test_capacity_evicts_oldest() {
    let mut storage = FigureStorage::default();
    let mut history = CommandManager::new(3, storage.bus().clone());
    for i in 0..5 {
        let fig = point(&mut storage, 10 + i, 10);
        history.execute(DrawingCommand::add(fig), &mut storage);
    }
    assert_eq!(history.undo_count(), 3);
    while history.undo(&mut storage) {}
    // the first two additions can no longer be undone
    assert_eq!(storage.len(), 2);
}

#[test]
fn test_push_without_execute_for_live_changes() {
    let mut storage = FigureStorage::default();
    let mut history = CommandManager::default();
    let fig = point(&mut storage, 50, 50);
    let id = fig.id();
    history.execute(DrawingCommand::add(fig), &mut storage);

    // the drag already moved the figure
    storage.change_position(id, 15, 0, None);
    history.push_command(DrawingCommand::move_by(&[id], 15, 0, None), &mut storage, false);
    assert_eq!(storage.find(id).unwrap().anchor(), Point::new(65, 50));

    history.undo(&mut storage);
    assert_eq!(storage.find(id).unwrap().anchor(), Point::new(50, 50));
    history.redo(&mut storage);
    assert_eq!(storage.find(id).unwrap().anchor(), Point::new(65, 50));
}

#[test]
fn test_undo_on_empty_stacks_is_noop() {
    let mut storage = FigureStorage::default();
    let mut history = CommandManager::default();
    assert!(!history.undo(&mut storage));
    assert!(!history.redo(&mut storage));
}

#[derive(Debug, Clone)]
enum Op {
    AddPoint(i32, i32),
    AddRect(i32, i32, i32, i32),
    Move(usize, i32, i32),
    Delete(usize),
    Group(usize, usize),
    Ungroup(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..400i32, 0..300i32).prop_map(|(x, y)| Op::AddPoint(x, y)),
        (0..300i32, 0..200i32, 1..80i32, 1..80i32).prop_map(|(x, y, w, h)| Op::AddRect(x, y, w, h)),
        (0..8usize, -60..60i32, -60..60i32).prop_map(|(i, dx, dy)| Op::Move(i, dx, dy)),
        (0..8usize).prop_map(Op::Delete),
        (0..8usize, 0..8usize).prop_map(|(a, b)| Op::Group(a, b)),
        (0..8usize).prop_map(Op::Ungroup),
    ]
}

/// Turns an op into a command against the current storage, if it applies.
fn command_for(op: &Op, storage: &mut FigureStorage) -> Option<DrawingCommand> {
    let canvas = Rect::from_size(400, 300);
    let id_at = |storage: &FigureStorage, i: usize| -> Option<FigureId> {
        let len = storage.len();
        (len > 0).then(|| storage.figures()[i % len].id())
    };
    match *op {
        Op::AddPoint(x, y) => Some(DrawingCommand::add(point(storage, x, y))),
        Op::AddRect(x, y, w, h) => Some(DrawingCommand::add(rectangle(storage, x, y, w, h))),
        Op::Move(i, dx, dy) => {
            id_at(storage, i).map(|id| DrawingCommand::move_by(&[id], dx, dy, Some(canvas)))
        }
        Op::Delete(i) => id_at(storage, i).map(|id| DrawingCommand::delete(vec![id])),
        Op::Group(a, b) => {
            let (a, b) = (id_at(storage, a)?, id_at(storage, b)?);
            DrawingCommand::group(storage, &[a, b], Essentials::default()).ok()
        }
        Op::Ungroup(i) => {
            let id = id_at(storage, i)?;
            DrawingCommand::ungroup(storage, id).ok()
        }
    }
}

proptest! {
    #[test]
    fn prop_undo_all_restores_figures(ops in prop::collection::vec(op(), 1..20)) {
        let mut storage = FigureStorage::default();
        let mut history = CommandManager::default();
        let mut snapshots = vec![storage.figures().to_vec()];

        for op in &ops {
            if let Some(command) = command_for(op, &mut storage) {
                history.execute(command, &mut storage);
                snapshots.push(storage.figures().to_vec());
            }
        }

        snapshots.pop();
        while let Some(expected) = snapshots.pop() {
            prop_assert!(history.undo(&mut storage));
            prop_assert_eq!(storage.figures(), expected.as_slice());
        }
        prop_assert!(!history.can_undo());
    }

    #[test]
    fn prop_redo_after_undo_round_trips(ops in prop::collection::vec(op(), 1..12)) {
        let mut storage = FigureStorage::default();
        let mut history = CommandManager::default();
        for op in &ops {
            if let Some(command) = command_for(op, &mut storage) {
                history.execute(command, &mut storage);
            }
        }
        let after = storage.figures().to_vec();
        if history.undo(&mut storage) {
            prop_assert!(history.redo(&mut storage));
        }
        prop_assert_eq!(storage.figures(), after.as_slice());
    }
}

/// Two points with `a` leading `b`, on a 400x300 canvas.
fn linked_pair(
    storage: &mut FigureStorage,
    a: (i32, i32),
    b: (i32, i32),
) -> (FigureId, FigureId) {
    let a = point(storage, a.0, a.1);
    let b = point(storage, b.0, b.1);
    let (a_id, b_id) = (a.id(), b.id());
    storage.add(a);
    storage.add(b);
    assert!(storage.link(a_id, b_id));
    (a_id, b_id)
}

#[test]
fn test_undo_move_keeps_blocked_follower() {
    let mut storage = FigureStorage::default();
    let mut history = CommandManager::default();
    let (a, b) = linked_pair(&mut storage, (50, 50), (8, 50));
    let before = storage.figures().to_vec();

    let canvas = Rect::from_size(400, 300);
    history.execute(
        DrawingCommand::move_by(&[a], -10, 0, Some(canvas)),
        &mut storage,
    );
    assert_eq!(storage.find(a).unwrap().anchor(), Point::new(40, 50));
    assert_eq!(storage.find(b).unwrap().anchor(), Point::new(8, 50));

    assert!(history.undo(&mut storage));
    assert_eq!(storage.figures(), before.as_slice());
}

#[test]
fn test_undo_move_returns_follower_of_blocked_mover() {
    let mut storage = FigureStorage::default();
    let mut history = CommandManager::default();
    let (a, b) = linked_pair(&mut storage, (8, 50), (50, 50));
    let before = storage.figures().to_vec();

    let canvas = Rect::from_size(400, 300);
    history.execute(
        DrawingCommand::move_by(&[a], -10, 0, Some(canvas)),
        &mut storage,
    );
    assert_eq!(storage.find(a).unwrap().anchor(), Point::new(8, 50));
    assert_eq!(storage.find(b).unwrap().anchor(), Point::new(40, 50));
    assert_eq!(storage.find(b).unwrap().move_master(), Some(a));

    assert!(history.undo(&mut storage));
    assert_eq!(storage.figures(), before.as_slice());
    assert_eq!(storage.find(b).unwrap().move_master(), None);

    assert!(history.redo(&mut storage));
    assert_eq!(storage.find(b).unwrap().anchor(), Point::new(40, 50));
    assert_eq!(storage.find(b).unwrap().move_master(), Some(a));
}

/// Point positions, arrow links between them, then moves to apply.
type LinkedMoves = (Vec<(i32, i32)>, Vec<(usize, usize)>, Vec<(usize, i32, i32)>);

fn linked_moves() -> impl Strategy<Value = LinkedMoves> {
    (
        prop::collection::vec((0..400i32, 0..300i32), 2..6),
        prop::collection::vec((0..6usize, 0..6usize), 0..8),
        prop::collection::vec((0..6usize, -80..80i32, -80..80i32), 1..12),
    )
}

proptest! {
    #[test]
    fn prop_undo_linked_moves_restores_figures((points, links, moves) in linked_moves()) {
        let mut storage = FigureStorage::default();
        let mut history = CommandManager::default();
        let canvas = Rect::from_size(400, 300);

        let mut ids = Vec::new();
        for (x, y) in points {
            let figure = point(&mut storage, x, y);
            ids.push(figure.id());
            storage.add(figure);
        }
        for (s, o) in links {
            let (s, o) = (ids[s % ids.len()], ids[o % ids.len()]);
            if s != o {
                storage.link(s, o);
            }
        }

        let mut snapshots = vec![storage.figures().to_vec()];
        for (i, dx, dy) in moves {
            let id = ids[i % ids.len()];
            history.execute(DrawingCommand::move_by(&[id], dx, dy, Some(canvas)), &mut storage);
            snapshots.push(storage.figures().to_vec());
        }

        let last = snapshots.pop();
        while let Some(expected) = snapshots.pop() {
            prop_assert!(history.undo(&mut storage));
            prop_assert_eq!(storage.figures(), expected.as_slice());
        }
        while history.redo(&mut storage) {}
        prop_assert_eq!(Some(storage.figures().to_vec()), last);
    }
}
