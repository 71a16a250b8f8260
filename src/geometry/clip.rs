//! CSS clip-path formatting for polygon faces.

use crate::geometry::polygon::Polygon;

/// Sentinel clip value emitted for an absent polygon.
pub const CLIP_NONE: &str = "none";

/// Format a polygon as a CSS `polygon(...)` clip-path descriptor.
///
/// An absent polygon formats as [`CLIP_NONE`].
pub fn clip_path(poly: Option<&Polygon>) -> String {
    match poly {
        None => CLIP_NONE.to_string(),
        Some(p) => format_clip(p.points().iter().map(|v| (v.x, v.y))),
    }
}

/// Format a polygon with x-coordinates reflected about `paper_size / 2`.
///
/// The back face of a leaf is rotated 180 degrees about the Y axis, so its
/// clip must mirror each `x` as `paper_size - x` to line up with the front.
pub fn mirrored_clip_path(poly: Option<&Polygon>, paper_size: f64) -> String {
    match poly {
        None => CLIP_NONE.to_string(),
        Some(p) => format_clip(p.points().iter().map(|v| (paper_size - v.x, v.y))),
    }
}

fn format_clip(coords: impl Iterator<Item = (f64, f64)>) -> String {
    let parts: Vec<String> = coords.map(|(x, y)| format!("{x}px {y}px")).collect();
    format!("polygon({})", parts.join(", "))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/clip.rs"]
mod tests;
