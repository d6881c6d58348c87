//! Geometric queries: projection, closest points, plane construction

use crate::shapes::{Plane, Segment};
use affine3d_math::Vec3;

/// Vector projection of `v1` onto `v2`: `dot(v1, v2) / |v2|² · v2`
///
/// Projecting onto a zero vector gives the zero vector.
pub fn project(v1: Vec3, v2: Vec3) -> Vec3 {
    let len_sq = v2.length_squared();
    if len_sq == 0.0 {
        return Vec3::ZERO;
    }
    v2 * (v1.dot(v2) / len_sq)
}

/// Closest point to `point` on `segment`
///
/// The projection parameter is clamped to `[0, 1]`. A zero-length segment
/// divides zero by zero and yields NaN components.
pub fn closest_point(point: Vec3, segment: &Segment) -> Vec3 {
    let dir = segment.direction();
    let t = (point - segment.start).dot(dir) / dir.dot(dir);

    if t < 0.0 {
        segment.start
    } else if t > 1.0 {
        segment.end
    } else {
        segment.start + dir * t
    }
}

/// A vector perpendicular to `v` (not normalized)
///
/// Zero only when `v` is zero.
pub fn perpendicular(v: Vec3) -> Vec3 {
    if v.x != 0.0 || v.y != 0.0 {
        Vec3::new(-v.y, v.x, 0.0)
    } else {
        Vec3::new(0.0, -v.z, v.y)
    }
}

/// Plane through `a`, `b`, `c`
///
/// The normal is `normalize(cross(b - a, c - b))` and the plane constant is
/// `-dot(normal, a)`. Collinear points give a zero normal.
pub fn plane_from_three_points(a: Vec3, b: Vec3, c: Vec3) -> Plane {
    let normal = (b - a).cross(c - b).normalized();
    Plane {
        normal,
        distance: normal.dot(a),
    }
}
