use crate::fold::line::{FoldLine, RotationAxis, fold_line};
use crate::fold::model::Fold;
use crate::geometry::clip::{clip_path, mirrored_clip_path};
use crate::geometry::polygon::Polygon;

/// One node of the rendered fold tree.
///
/// The tree is rebuilt from scratch on every render; nodes carry no
/// cross-render identity. It serializes cleanly for inspection and
/// snapshotting.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum RenderNode {
    /// A terminal, unsplit piece of paper.
    Leaf(Leaf),
    /// A fold: an optional static branch plus a rotated moving branch.
    Group(FoldGroup),
}

/// A paper face pair: front clipped to its polygon, back clipped to the
/// mirrored polygon. The back face renders first so it shows through
/// correctly once the leaf rotates past 90 degrees.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Leaf {
    /// Clip-path descriptor for the front face.
    pub front_clip: String,
    /// Mirrored clip-path descriptor for the back face.
    pub back_clip: String,
}

/// A fold's visible structure: the part that stays put and the part that
/// rotates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FoldGroup {
    /// Unrotated branch; absent when the whole polygon moves.
    pub static_child: Option<Box<RenderNode>>,
    /// Rotating branch.
    pub moving: MovingWrapper,
}

/// Rotation wrapper around the moving branch of a fold.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MovingWrapper {
    /// Axis of rotation.
    pub axis: RotationAxis,
    /// CSS transform-origin anchoring the rotation to the fold line.
    pub origin: String,
    /// Signed rotation written into `transform`, in degrees.
    pub angle_deg: f64,
    /// Full CSS transform, `rotate3d(ax, ay, az, <angle>deg)`.
    pub transform: String,
    /// Subtree being rotated.
    pub child: Box<RenderNode>,
}

/// Build the complete fold tree for a sequence, starting from the
/// full-paper square.
#[tracing::instrument(skip(folds), fields(folds = folds.len()))]
pub fn build_tree(folds: &[Fold], paper_size: f64) -> RenderNode {
    build_node(folds, 0, Some(Polygon::square(paper_size)), paper_size)
}

/// Recursive step: apply fold `index` to `geometry`.
///
/// Terminal when no folds remain or the geometry is absent. A split that
/// leaves everything on one side contributes no group for that branch
/// (entirely static) or only a moving wrapper (entirely moving); a true
/// split produces both branches.
fn build_node(
    folds: &[Fold],
    index: usize,
    geometry: Option<Polygon>,
    paper_size: f64,
) -> RenderNode {
    let Some(geometry) = geometry else {
        return RenderNode::Leaf(leaf(None, paper_size));
    };
    let Some(fold) = folds.get(index) else {
        return RenderNode::Leaf(leaf(Some(&geometry), paper_size));
    };

    let line = fold_line(fold.kind, paper_size, fold.position, None);
    let split = geometry.split(&line.plane);

    match (split.static_part, split.moving_part) {
        // Entirely static: this fold adds no structure on this branch.
        (static_part, None) => build_node(folds, index + 1, static_part, paper_size),
        // Entirely moving: rotation wrapper without a static sibling.
        (None, moving_part) => RenderNode::Group(FoldGroup {
            static_child: None,
            moving: moving_wrapper(
                fold,
                &line,
                build_node(folds, index + 1, moving_part, paper_size),
            ),
        }),
        // True split: static branch plus rotated moving branch.
        (static_part @ Some(_), moving_part) => RenderNode::Group(FoldGroup {
            static_child: Some(Box::new(build_node(
                folds,
                index + 1,
                static_part,
                paper_size,
            ))),
            moving: moving_wrapper(
                fold,
                &line,
                build_node(folds, index + 1, moving_part, paper_size),
            ),
        }),
    }
}

fn moving_wrapper(fold: &Fold, line: &FoldLine, child: RenderNode) -> MovingWrapper {
    let angle_deg = -fold.effective_angle();
    MovingWrapper {
        axis: line.axis,
        origin: line.origin.clone(),
        angle_deg,
        transform: format!("rotate3d({}, {angle_deg}deg)", line.axis.rotate3d()),
        child: Box::new(child),
    }
}

fn leaf(geometry: Option<&Polygon>, paper_size: f64) -> Leaf {
    Leaf {
        front_clip: clip_path(geometry),
        back_clip: mirrored_clip_path(geometry, paper_size),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/tree.rs"]
mod tests;
