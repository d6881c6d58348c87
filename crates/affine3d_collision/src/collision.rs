//! Collision predicates
//!
//! Boolean overlap tests between pairs of shapes. Every predicate is a pure
//! function of its inputs; degenerate input never panics, it reports a value.

use crate::shapes::{Plane, Segment, Shape, Sphere, Triangle, AABB, OBB};
use affine3d_math::Vec3;

/// Stand-in for a zero direction component in the slab test
pub const SLAB_EPSILON: f32 = 1e-6;

/// Test sphere vs sphere collision
///
/// Strict: spheres that only touch do not collide.
pub fn sphere_vs_sphere(a: &Sphere, b: &Sphere) -> bool {
    let radius_sum = a.radius + b.radius;
    (b.center - a.center).length_squared() < radius_sum * radius_sum
}

/// Test sphere vs plane collision
///
/// Inclusive: a sphere tangent to the plane collides.
pub fn sphere_vs_plane(sphere: &Sphere, plane: &Plane) -> bool {
    plane.signed_distance(sphere.center).abs() <= sphere.radius
}

/// Test segment vs plane collision
///
/// The endpoints must be on opposite sides, or at least one on the plane.
pub fn segment_vs_plane(segment: &Segment, plane: &Plane) -> bool {
    let dist_start = plane.signed_distance(segment.start);
    let dist_end = plane.signed_distance(segment.end);
    dist_start * dist_end <= 0.0
}

/// Barycentric `(u, v)` of `point` relative to `a + u·(b - a) + v·(c - a)`
///
/// `None` when the triangle is degenerate.
fn barycentric(point: Vec3, [a, b, c]: [Vec3; 3]) -> Option<(f32, f32)> {
    let e0 = b - a;
    let e1 = c - a;
    let ep = point - a;

    let d00 = e0.dot(e0);
    let d01 = e0.dot(e1);
    let d11 = e1.dot(e1);
    let dp0 = ep.dot(e0);
    let dp1 = ep.dot(e1);

    let denom = d00 * d11 - d01 * d01;
    if denom == 0.0 {
        return None;
    }

    let u = (d11 * dp0 - d01 * dp1) / denom;
    let v = (d00 * dp1 - d01 * dp0) / denom;
    Some((u, v))
}

/// Point where `segment` crosses `triangle`, if it does
///
/// A segment lying in (or parallel to) the triangle's plane has no single
/// crossing point and is reported as a miss.
pub fn triangle_segment_intersection(triangle: &Triangle, segment: &Segment) -> Option<Vec3> {
    let plane = triangle.plane();
    let dist_start = plane.signed_distance(segment.start);
    let dist_end = plane.signed_distance(segment.end);

    if dist_start * dist_end > 0.0 {
        return None;
    }
    let denom = dist_start - dist_end;
    if denom == 0.0 {
        return None;
    }

    let t = dist_start / denom;
    let point = segment.point_at(t);

    let (u, v) = barycentric(point, triangle.vertices)?;
    if u >= 0.0 && v >= 0.0 && u + v <= 1.0 {
        Some(point)
    } else {
        None
    }
}

/// Test triangle vs segment collision
pub fn triangle_vs_segment(triangle: &Triangle, segment: &Segment) -> bool {
    triangle_segment_intersection(triangle, segment).is_some()
}

/// Test AABB vs AABB collision
///
/// Bounds are inclusive: boxes sharing a face collide.
pub fn aabb_vs_aabb(a: &AABB, b: &AABB) -> bool {
    a.min.x <= b.max.x
        && a.max.x >= b.min.x
        && a.min.y <= b.max.y
        && a.max.y >= b.min.y
        && a.min.z <= b.max.z
        && a.max.z >= b.min.z
}

/// Test AABB vs sphere collision (simplified)
///
/// Compares the squared distance between the box center and the sphere
/// center against the squared sphere radius. The box extents are not taken
/// into account, so a sphere overlapping only the box's outer region is
/// missed. Use [`aabb_vs_sphere_closest_point`] for the exact test.
pub fn aabb_vs_sphere(aabb: &AABB, sphere: &Sphere) -> bool {
    (aabb.center() - sphere.center).length_squared() <= sphere.radius * sphere.radius
}

/// Test AABB vs sphere collision against the box's closest point
pub fn aabb_vs_sphere_closest_point(aabb: &AABB, sphere: &Sphere) -> bool {
    let closest = aabb.closest_point(sphere.center);
    (closest - sphere.center).length_squared() <= sphere.radius * sphere.radius
}

/// Parametric `(t_near, t_far)` of the line through `segment` clipped by `aabb`
///
/// Zero direction components are replaced by [`SLAB_EPSILON`].
pub fn segment_slab_interval(aabb: &AABB, segment: &Segment) -> (f32, f32) {
    let origin = segment.start.to_array();
    let dir = segment.direction().to_array();
    let min = aabb.min.to_array();
    let max = aabb.max.to_array();

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let d = if dir[axis] == 0.0 { SLAB_EPSILON } else { dir[axis] };
        let inv = 1.0 / d;
        let t1 = (min[axis] - origin[axis]) * inv;
        let t2 = (max[axis] - origin[axis]) * inv;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
    }
    (t_near, t_far)
}

/// Test AABB vs segment collision (slab method)
pub fn aabb_vs_segment(aabb: &AABB, segment: &Segment) -> bool {
    let (t_near, t_far) = segment_slab_interval(aabb, segment);
    t_near <= t_far && t_far >= 0.0 && t_near <= 1.0
}

/// Test OBB vs segment collision
///
/// Moves the segment into the box's local frame and runs the slab test there.
pub fn obb_vs_segment(obb: &OBB, segment: &Segment) -> bool {
    let local = Segment::new(obb.to_local(segment.start), obb.to_local(segment.end));
    aabb_vs_segment(&obb.local_aabb(), &local)
}

/// Test any two shapes, in either order
///
/// `None` for pairs without a predicate.
pub fn shapes_collide(a: &Shape, b: &Shape) -> Option<bool> {
    let hit = match (a, b) {
        (Shape::Sphere(a), Shape::Sphere(b)) => sphere_vs_sphere(a, b),
        (Shape::Sphere(s), Shape::Plane(p)) | (Shape::Plane(p), Shape::Sphere(s)) => sphere_vs_plane(s, p),
        (Shape::Segment(s), Shape::Plane(p)) | (Shape::Plane(p), Shape::Segment(s)) => segment_vs_plane(s, p),
        (Shape::Triangle(t), Shape::Segment(s)) | (Shape::Segment(s), Shape::Triangle(t)) => {
            triangle_vs_segment(t, s)
        }
        (Shape::AABB(a), Shape::AABB(b)) => aabb_vs_aabb(a, b),
        (Shape::AABB(b), Shape::Sphere(s)) | (Shape::Sphere(s), Shape::AABB(b)) => aabb_vs_sphere(b, s),
        (Shape::AABB(b), Shape::Segment(s)) | (Shape::Segment(s), Shape::AABB(b)) => aabb_vs_segment(b, s),
        (Shape::OBB(o), Shape::Segment(s)) | (Shape::Segment(s), Shape::OBB(o)) => obb_vs_segment(o, s),
        _ => return None,
    };
    Some(hit)
}
