//! Pleat is a deterministic origami fold engine.
//!
//! Pleat turns an ordered list of fold operations plus a square sheet of
//! paper into a nested tree of render nodes: polygon faces carrying CSS
//! clip-paths, wrapped in 3D rotation transforms anchored on their fold
//! lines. A host (DOM, SVG, anything) receives whole frames through a sink
//! trait and owns all presentation concerns.
//!
//! # Pipeline overview
//!
//! 1. **Model**: a [`Fold`] sequence (kind, target angle, position,
//!    direction), editable and serializable as a pattern JSON document.
//! 2. **Lines**: [`fold_line`] maps each fold onto a concrete half-plane,
//!    rotation axis, and transform origin.
//! 3. **Split**: [`Polygon::split`] divides the current geometry into a
//!    static and a moving part along the line.
//! 4. **Tree**: [`build_tree`] recurses over the sequence, emitting leaf
//!    face pairs and rotation wrappers; the tree is rebuilt wholesale per
//!    render.
//! 5. **Session**: [`FoldSession`] drives config editing and sequential
//!    playback, re-rendering through its injected [`RenderSink`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: geometry and tree building are pure and
//!   stable for a given input.
//! - **No IO in the engine**: pattern files and scheduling belong to the
//!   host; the only suspension point is the host-driven animation tick.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod fold;
mod foundation;
mod geometry;
mod render;
mod session;

/// Shared transform helpers.
pub mod transform;

pub use animation::ease::Ease;
pub use animation::timeline::{Glide, GlideSample};
pub use fold::line::{FoldKind, FoldLine, RotationAxis, Segment, fold_line};
pub use fold::model::{Fold, FoldDirection, default_folds};
pub use fold::pattern::{PATTERN_VERSION, Pattern, PatternFold, export_folds, import_folds};
pub use fold::presets::{PRESETS, Preset, preset, preset_names};
pub use foundation::core::{FoldId, MAX_FOLD_ANGLE, Paper, Point, Vec2};
pub use foundation::error::{PleatError, PleatResult};
pub use geometry::clip::{CLIP_NONE, clip_path, mirrored_clip_path};
pub use geometry::polygon::{FoldPlane, Polygon, PolygonSplit};
pub use render::crease::{CreaseSegment, crease_segments};
pub use render::sink::{LastFrameSink, RenderSink, SceneFrame};
pub use render::tree::{FoldGroup, Leaf, MovingWrapper, RenderNode, build_tree};
pub use session::controller::{
    FoldSession, FoldsChanged, Mode, PlaybackTarget, SessionOptions, apply_sequential_progress,
};
