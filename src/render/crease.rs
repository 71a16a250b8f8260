//! Crease-pattern overlay: one straight segment per fold, independent of
//! the nested fold tree.

use crate::fold::line::fold_line;
use crate::fold::model::{Fold, FoldDirection};
use crate::foundation::core::Point;

/// One crease line for overlay display, tagged by fold direction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CreaseSegment {
    /// Segment start point.
    pub start: Point,
    /// Segment end point.
    pub end: Point,
    /// Mountain or valley, for direction-coded styling.
    pub direction: FoldDirection,
}

/// Compute the crease segment for every fold in sequence order.
pub fn crease_segments(folds: &[Fold], paper_size: f64) -> Vec<CreaseSegment> {
    folds
        .iter()
        .map(|fold| {
            let line = fold_line(fold.kind, paper_size, fold.position, None);
            CreaseSegment {
                start: line.start,
                end: line.end,
                direction: fold.direction,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/crease.rs"]
mod tests;
