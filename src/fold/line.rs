use std::f64::consts::FRAC_1_SQRT_2;

use crate::foundation::core::Point;
use crate::geometry::polygon::FoldPlane;

/// Segments shorter than this fall back to a horizontal fold line.
const DEGENERATE_SEGMENT_EPSILON: f64 = 0.001;

/// Half-width of the angle windows used to bucket custom lines onto an axis.
const AXIS_BUCKET_DEG: f64 = 22.5;

/// The family a fold line belongs to.
///
/// The wire tag (`"horizontal"`, `"diag1"`, ...) is handled by the manual
/// serde impls below; unrecognized tags decode as [`FoldKind::Horizontal`],
/// matching the original importer's silent fallback. Rust call sites cannot
/// hit that fallback since the enum is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FoldKind {
    /// Axis-aligned line at `position% * paper_size` on the y axis.
    Horizontal,
    /// Axis-aligned line at `position% * paper_size` on the x axis.
    Vertical,
    /// `\` diagonal, offset from the corner-to-corner diagonal by position.
    Diag1,
    /// `/` diagonal, offset from the corner-to-corner diagonal by position.
    Diag2,
    /// User-supplied two-point segment.
    Custom,
}

impl FoldKind {
    /// Stable wire/display tag.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Diag1 => "diag1",
            Self::Diag2 => "diag2",
            Self::Custom => "custom",
        }
    }

    /// Decode a wire tag; unknown tags collapse to [`FoldKind::Horizontal`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "vertical" => Self::Vertical,
            "diag1" => Self::Diag1,
            "diag2" => Self::Diag2,
            "custom" => Self::Custom,
            _ => Self::Horizontal,
        }
    }
}

impl serde::Serialize for FoldKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> serde::Deserialize<'de> for FoldKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// 3D rotation axis a moving fold branch turns about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RotationAxis {
    /// Horizontal fold axis.
    X,
    /// Vertical fold axis.
    Y,
    /// `\` diagonal axis.
    D1,
    /// `/` diagonal axis.
    D2,
}

impl RotationAxis {
    /// Axis vector in CSS `rotate3d` argument form.
    pub fn rotate3d(self) -> &'static str {
        match self {
            Self::X => "1, 0, 0",
            Self::Y => "0, 1, 0",
            Self::D1 => "1, 1, 0",
            Self::D2 => "-1, 1, 0",
        }
    }
}

/// A user-supplied fold segment for [`FoldKind::Custom`] lines.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// First endpoint.
    pub p1: Point,
    /// Second endpoint.
    pub p2: Point,
}

/// A concrete fold line: splitting plane, rotation axis, transform origin,
/// and the two endpoints used for crease-pattern display.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FoldLine {
    /// Half-plane boundary; the positive side moves.
    pub plane: FoldPlane,
    /// Axis the moving side rotates about.
    pub axis: RotationAxis,
    /// CSS transform-origin descriptor, e.g. `"50% 25%"`.
    pub origin: String,
    /// Line endpoint where it enters the paper region.
    pub start: Point,
    /// Line endpoint where it leaves the paper region.
    pub end: Point,
}

/// Map a fold kind and position percentage onto a concrete fold line.
///
/// `position` is in percent: 50 is centered, 0/100 hug the paper edges.
/// [`FoldKind::Custom`] derives the line from `custom`; a missing or
/// near-zero-length segment silently falls back to a horizontal line at the
/// given position.
pub fn fold_line(
    kind: FoldKind,
    paper_size: f64,
    position: f64,
    custom: Option<Segment>,
) -> FoldLine {
    let pos = (position / 100.0) * paper_size;
    match kind {
        FoldKind::Horizontal => FoldLine {
            plane: FoldPlane {
                nx: 0.0,
                ny: 1.0,
                c: -pos,
            },
            axis: RotationAxis::X,
            origin: format!("50% {position}%"),
            start: Point::new(0.0, pos),
            end: Point::new(paper_size, pos),
        },
        FoldKind::Vertical => FoldLine {
            plane: FoldPlane {
                nx: 1.0,
                ny: 0.0,
                c: -pos,
            },
            axis: RotationAxis::Y,
            origin: format!("{position}% 50%"),
            start: Point::new(pos, 0.0),
            end: Point::new(pos, paper_size),
        },
        FoldKind::Diag1 => {
            // Offset from the true top-left/bottom-right diagonal; at
            // position 50 the line is x - y = 0.
            let offset = pos - (paper_size / 2.0);
            FoldLine {
                plane: FoldPlane {
                    nx: FRAC_1_SQRT_2,
                    ny: -FRAC_1_SQRT_2,
                    c: offset * FRAC_1_SQRT_2,
                },
                axis: RotationAxis::D1,
                origin: "50% 50%".to_string(),
                start: Point::new(0.0, -offset),
                end: Point::new(paper_size, paper_size - offset),
            }
        }
        FoldKind::Diag2 => {
            // At position 50 the line is x + y = paper_size.
            let target_sum = (position / 50.0) * paper_size;
            FoldLine {
                plane: FoldPlane {
                    nx: FRAC_1_SQRT_2,
                    ny: FRAC_1_SQRT_2,
                    c: -target_sum * FRAC_1_SQRT_2,
                },
                axis: RotationAxis::D2,
                origin: "50% 50%".to_string(),
                start: Point::new(0.0, target_sum),
                end: Point::new(target_sum, 0.0),
            }
        }
        FoldKind::Custom => match custom {
            Some(seg) => custom_line(seg, paper_size, position),
            None => fold_line(FoldKind::Horizontal, paper_size, position, None),
        },
    }
}

fn custom_line(seg: Segment, paper_size: f64, position: f64) -> FoldLine {
    let dx = seg.p2.x - seg.p1.x;
    let dy = seg.p2.y - seg.p1.y;
    let len = ((dx * dx) + (dy * dy)).sqrt();
    if len < DEGENERATE_SEGMENT_EPSILON {
        return fold_line(FoldKind::Horizontal, paper_size, position, None);
    }

    // Normal perpendicular to the segment direction.
    let nx = -dy / len;
    let ny = dx / len;
    let c = -((nx * seg.p1.x) + (ny * seg.p1.y));

    let angle = dy.atan2(dx).to_degrees();
    let axis = if angle.abs() < AXIS_BUCKET_DEG || angle.abs() > 180.0 - AXIS_BUCKET_DEG {
        RotationAxis::X
    } else if (angle - 90.0).abs() < AXIS_BUCKET_DEG || (angle + 90.0).abs() < AXIS_BUCKET_DEG {
        RotationAxis::Y
    } else if angle > 0.0 {
        RotationAxis::D1
    } else {
        RotationAxis::D2
    };

    FoldLine {
        plane: FoldPlane { nx, ny, c },
        axis,
        origin: "50% 50%".to_string(),
        start: seg.p1,
        end: seg.p2,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fold/line.rs"]
mod tests;
