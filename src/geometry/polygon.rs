use crate::foundation::core::Point;
use crate::transform::lerp_point;

/// Vertex classification tolerance against a fold plane, in pixels.
///
/// Vertices within this distance of the line are kept on both sides so that
/// near-collinear geometry does not produce slivers or dropped vertices.
pub(crate) const SPLIT_EPSILON: f64 = 0.001;

/// An ordered, implicitly closed polygon in paper-local pixel space.
///
/// Construction enforces the minimum vertex count; winding order is whatever
/// the caller supplies and is preserved by [`Polygon::split`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Fewest vertices a polygon may carry.
    pub const MIN_VERTICES: usize = 3;

    /// Build a polygon from vertices, or `None` when fewer than
    /// [`Polygon::MIN_VERTICES`] are supplied.
    pub fn from_points(points: Vec<Point>) -> Option<Self> {
        (points.len() >= Self::MIN_VERTICES).then_some(Self { points })
    }

    /// The full-paper square with corners at `(0,0)` and `(size_px, size_px)`.
    pub fn square(size_px: f64) -> Self {
        Self {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(size_px, 0.0),
                Point::new(size_px, size_px),
                Point::new(0.0, size_px),
            ],
        }
    }

    /// Vertices in edge order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: polygons carry at least three vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Split this polygon by a fold plane into a static and a moving part.
    ///
    /// Vertices with signed distance `>= -ε` land in the moving part, those
    /// with distance `<= ε` in the static part. Every edge whose endpoints
    /// sit strictly on opposite sides contributes one interpolated
    /// intersection vertex to both parts, in edge traversal order. A side
    /// that ends up with fewer than three vertices is reported as absent,
    /// meaning the polygon lies entirely on the other side. Never fails.
    pub fn split(&self, plane: &FoldPlane) -> PolygonSplit {
        let n = self.points.len();
        let mut moving: Vec<Point> = Vec::with_capacity(n + 2);
        let mut static_: Vec<Point> = Vec::with_capacity(n + 2);

        for i in 0..n {
            let current = self.points[i];
            let next = self.points[(i + 1) % n];
            let d_current = plane.signed_distance(current);
            let d_next = plane.signed_distance(next);

            if d_current >= -SPLIT_EPSILON {
                moving.push(current);
            }
            if d_current <= SPLIT_EPSILON {
                static_.push(current);
            }

            if (d_current > 0.0 && d_next < 0.0) || (d_current < 0.0 && d_next > 0.0) {
                let t = d_current / (d_current - d_next);
                let hit = lerp_point(current, next, t);
                moving.push(hit);
                static_.push(hit);
            }
        }

        PolygonSplit {
            static_part: Self::from_points(static_),
            moving_part: Self::from_points(moving),
        }
    }
}

/// A directed half-plane boundary `nx*x + ny*y + c = 0`.
///
/// Points with `nx*x + ny*y + c >= 0` are on the moving side of the fold.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FoldPlane {
    /// Unit normal x component.
    pub nx: f64,
    /// Unit normal y component.
    pub ny: f64,
    /// Offset from the origin along the normal.
    pub c: f64,
}

impl FoldPlane {
    /// Signed distance of a point from the line; positive on the moving side.
    pub fn signed_distance(&self, p: Point) -> f64 {
        (self.nx * p.x) + (self.ny * p.y) + self.c
    }
}

/// Outcome of [`Polygon::split`]; either side may be absent.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonSplit {
    /// Part on the non-moving side of the fold plane.
    pub static_part: Option<Polygon>,
    /// Part on the moving side of the fold plane.
    pub moving_part: Option<Polygon>,
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/polygon.rs"]
mod tests;
