//! Linear transform helpers.

use crate::foundation::core::Point;

#[inline]
/// Linearly interpolate between two points with clamped parameter `t`.
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    let t = t.clamp(0.0, 1.0);
    Point::new(a.x + ((b.x - a.x) * t), a.y + ((b.y - a.y) * t))
}
