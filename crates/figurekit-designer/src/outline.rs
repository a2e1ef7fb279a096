//! Object browser model: a tree of the figures on the canvas.

use crate::model::{Figure, FigureId};
use crate::storage::FigureStorage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    pub id: FigureId,
    pub label: String,
    /// Only top-level figures can be picked from the outline.
    pub selectable: bool,
    pub selected: bool,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    fn from_figure(figure: &Figure, top_level: bool) -> Self {
        let children = figure
            .as_group()
            .map(|g| {
                g.figures()
                    .iter()
                    .map(|member| OutlineNode::from_figure(member, false))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            id: figure.id(),
            label: figure.kind().label().to_string(),
            selectable: top_level,
            selected: top_level && figure.selected,
            children,
        }
    }

    /// Number of nodes in this subtree, including itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::count).sum::<usize>()
    }
}

/// One node per finished top-level figure, in drawing order.
pub fn build(storage: &FigureStorage) -> Vec<OutlineNode> {
    storage
        .figures()
        .iter()
        .filter(|f| f.is_finished())
        .map(|f| OutlineNode::from_figure(f, true))
        .collect()
}

/// Replaces the canvas selection with the figures picked in the outline.
///
/// Ids that are not top-level figures are ignored. Returns how many figures
/// ended up selected.
pub fn apply_selection(storage: &mut FigureStorage, ids: &[FigureId]) -> usize {
    storage.deselect_all();
    ids.iter()
        .filter(|id| storage.select_figure(**id, true))
        .count()
}
