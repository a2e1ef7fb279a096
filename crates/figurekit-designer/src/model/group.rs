use figurekit_core::{Essentials, FigureError, Point, Rect};

use super::{Figure, FigureShape};

/// A group of at least two figures that move together.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureGroup {
    figures: Vec<Figure>,
}

impl FigureGroup {
    /// Builds a group. Members lose their own selection flag.
    pub fn new(mut figures: Vec<Figure>) -> Result<Self, FigureError> {
        if figures.len() < 2 {
            return Err(FigureError::GroupTooSmall {
                count: figures.len(),
            });
        }
        for figure in &mut figures {
            figure.selected = false;
        }
        Ok(Self { figures })
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn figures_mut(&mut self) -> &mut [Figure] {
        &mut self.figures
    }

    /// Hands the members back, leaving the group empty.
    pub(crate) fn take_figures(&mut self) -> Vec<Figure> {
        std::mem::take(&mut self.figures)
    }

    pub(crate) fn put_figures(&mut self, figures: Vec<Figure>) {
        self.figures = figures;
    }
}

impl FigureShape for FigureGroup {
    fn bounds(&self, _ess: &Essentials) -> Option<Rect> {
        self.figures
            .iter()
            .filter_map(Figure::bounds)
            .filter(|b| !b.is_empty())
            .reduce(|acc, b| acc.united(&b))
    }

    fn hit_test(&self, ess: &Essentials, x: i32, y: i32) -> bool {
        self.bounds(ess).is_some_and(|b| b.contains(x, y))
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        for figure in &mut self.figures {
            figure.shape.translate(dx, dy);
        }
    }

    fn anchor(&self) -> Point {
        self.bounds(&Essentials::default())
            .map(|b| b.center())
            .unwrap_or_default()
    }
}
