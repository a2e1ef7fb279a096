//! Arrow linkage: movement propagation between linked figures.
//!
//! A figure's observers follow it when it moves. Each hop carries the set of
//! figures the move has already passed through; a figure found in that set
//! drops the event. A follower also remembers the first figure that moved it
//! (its move master) and ignores moves coming from anyone else until the
//! link is torn down.

use std::collections::{BTreeSet, VecDeque};

use figurekit_core::Rect;

use crate::model::{Figure, FigureId};

/// A pending move notification.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveEvent {
    pub dx: i32,
    pub dy: i32,
    /// Container the receiver must stay within, if any.
    pub bounds: Option<Rect>,
    /// The figure that just moved and is notifying its observers.
    pub subject: FigureId,
    /// Figures this move already went through.
    pub visited: BTreeSet<FigureId>,
}

/// Outcome of one propagated move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    /// Figures that actually moved, in the order they moved.
    pub moved: Vec<FigureId>,
    /// Figures that received the move but did not fit their container.
    pub blocked: Vec<FigureId>,
    /// Figures translated by the move and by how much. Group members ride
    /// along with their group and are not listed.
    pub shifted: Vec<(FigureId, i32, i32)>,
    /// Followers that took a move master during the move, with that master.
    pub claimed: Vec<(FigureId, FigureId)>,
}

impl MoveReport {
    pub fn times_moved(&self, id: FigureId) -> usize {
        self.moved.iter().filter(|m| **m == id).count()
    }

    /// Whether the move left every figure as it was.
    pub fn is_noop(&self) -> bool {
        self.shifted.is_empty() && self.claimed.is_empty()
    }

    /// Appends a later move to this one.
    pub fn merge(&mut self, other: MoveReport) {
        self.moved.extend(other.moved);
        self.blocked.extend(other.blocked);
        self.shifted.extend(other.shifted);
        self.claimed.extend(other.claimed);
    }
}

pub(crate) fn find_mut(figures: &mut [Figure], id: FigureId) -> Option<&mut Figure> {
    figures.iter_mut().find_map(|f| f.find_mut(id))
}

pub(crate) fn find(figures: &[Figure], id: FigureId) -> Option<&Figure> {
    figures.iter().find_map(|f| f.find(id))
}

/// Moves `mover` and everything that follows it.
///
/// The mover is checked against `bounds`; observers are notified whether or
/// not the mover itself fit. Members of a group that moved notify their own
/// observers with no container.
pub(crate) fn propagate_move(
    figures: &mut [Figure],
    mover: FigureId,
    dx: i32,
    dy: i32,
    bounds: Option<Rect>,
) -> MoveReport {
    let mut report = MoveReport::default();
    let mut queue = VecDeque::new();

    let Some(figure) = find_mut(figures, mover) else {
        return report;
    };
    let members = apply(figure, dx, dy, bounds.as_ref(), &mut report);
    let observers: Vec<_> = figure.observers().iter().copied().collect();
    let visited = BTreeSet::from([mover]);
    enqueue(&mut queue, &observers, mover, dx, dy, bounds, &visited);
    report.merge(notify_members(figures, &members, dx, dy, &visited, &mut queue));

    while let Some((target, event)) = queue.pop_front() {
        if event.visited.contains(&target) || target == event.subject {
            continue;
        }
        let Some(figure) = find_mut(figures, target) else {
            tracing::debug!("Observer {} is gone, skipping", target);
            continue;
        };
        match figure.move_master() {
            None => {
                figure.set_move_master(Some(event.subject));
                report.claimed.push((target, event.subject));
            }
            Some(master) if master != event.subject => {
                tracing::debug!(
                    "{} follows {}, ignoring move from {}",
                    target,
                    master,
                    event.subject
                );
                continue;
            }
            Some(_) => {}
        }
        tracing::debug!("{} follows {} by ({}, {})", target, event.subject, dx, dy);

        let members = apply(figure, dx, dy, event.bounds.as_ref(), &mut report);
        let observers: Vec<_> = figure.observers().iter().copied().collect();
        let mut visited = event.visited;
        visited.insert(target);
        enqueue(&mut queue, &observers, target, dx, dy, event.bounds, &visited);
        report.merge(notify_members(figures, &members, dx, dy, &visited, &mut queue));
    }
    report
}

/// Applies the move and returns the group members that moved along.
fn apply(
    figure: &mut Figure,
    dx: i32,
    dy: i32,
    bounds: Option<&Rect>,
    report: &mut MoveReport,
) -> Vec<FigureId> {
    if figure.translate_within(dx, dy, bounds) {
        report.moved.push(figure.id());
        report.shifted.push((figure.id(), dx, dy));
        figure.member_ids()
    } else {
        report.blocked.push(figure.id());
        Vec::new()
    }
}

fn notify_members(
    figures: &[Figure],
    members: &[FigureId],
    dx: i32,
    dy: i32,
    visited: &BTreeSet<FigureId>,
    queue: &mut VecDeque<(FigureId, MoveEvent)>,
) -> MoveReport {
    let mut report = MoveReport::default();
    for member in members {
        report.moved.push(*member);
        let Some(figure) = find(figures, *member) else {
            continue;
        };
        let observers: Vec<_> = figure.observers().iter().copied().collect();
        let mut visited = visited.clone();
        visited.insert(*member);
        enqueue(queue, &observers, *member, dx, dy, None, &visited);
    }
    report
}

fn enqueue(
    queue: &mut VecDeque<(FigureId, MoveEvent)>,
    observers: &[FigureId],
    subject: FigureId,
    dx: i32,
    dy: i32,
    bounds: Option<Rect>,
    visited: &BTreeSet<FigureId>,
) {
    for observer in observers {
        queue.push_back((
            *observer,
            MoveEvent {
                dx,
                dy,
                bounds,
                subject,
                visited: visited.clone(),
            },
        ));
    }
}
