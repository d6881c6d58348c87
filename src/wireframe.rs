//! Screen-space line lists for the ground grid and collision shapes
//!
//! The drawing layer is external: it receives flat [`ScreenLine`] records
//! (castable to bytes with `bytemuck`) and rasterizes them however it likes.

use std::f32::consts::PI;

use affine3d_collision::{query::perpendicular, Shape, Sphere, AABB, OBB};
use affine3d_math::{ScreenProjector, Vec3};
use bytemuck::{Pod, Zeroable};

/// Grid lines off the center
pub const GRID_COLOR: u32 = 0xAAAA_AAFF;
/// Grid lines through the origin
pub const GRID_AXIS_COLOR: u32 = 0x0000_00FF;
/// Shapes not touching anything
pub const IDLE_COLOR: u32 = 0xFFFF_FFFF;
/// Shapes that collide with something
pub const HIT_COLOR: u32 = 0xFF00_00FF;

/// Half the side of the ground grid, in world units
pub const GRID_HALF_WIDTH: f32 = 2.0;

/// Upper bound for grid and sphere subdivision counts
pub const MAX_SUBDIVISION: u32 = 256;

/// Edges of a box as index pairs into its corners (bit 0 = x, bit 1 = y, bit 2 = z)
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1), (2, 3), (4, 5), (6, 7),
    (0, 2), (1, 3), (4, 6), (5, 7),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// A projected line, ready to rasterize
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ScreenLine {
    /// Raster position of the first end (z = depth)
    pub start: Vec3,
    /// Raster position of the second end (z = depth)
    pub end: Vec3,
    /// RGBA, 8 bits per channel, red in the high byte
    pub color: u32,
}

/// Collects world-space lines and projects them
struct LineSink<'a> {
    projector: &'a ScreenProjector,
    color: u32,
    lines: Vec<ScreenLine>,
}

impl<'a> LineSink<'a> {
    fn new(projector: &'a ScreenProjector, color: u32) -> Self {
        Self {
            projector,
            color,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, a: Vec3, b: Vec3) {
        let (start, end) = self.projector.project_line(a, b);
        self.lines.push(ScreenLine {
            start,
            end,
            color: self.color,
        });
    }

    fn push_loop(&mut self, points: &[Vec3]) {
        for (i, &p) in points.iter().enumerate() {
            self.push(p, points[(i + 1) % points.len()]);
        }
    }

    fn push_box(&mut self, corners: &[Vec3; 8]) {
        for (a, b) in BOX_EDGES {
            self.push(corners[a], corners[b]);
        }
    }
}

/// Clamp a configured subdivision count to `1..=MAX_SUBDIVISION`
fn clamp_subdivision(subdivision: u32) -> u32 {
    if subdivision > MAX_SUBDIVISION {
        log::warn!("Subdivision {} exceeds {}; clamping", subdivision, MAX_SUBDIVISION);
    }
    subdivision.clamp(1, MAX_SUBDIVISION)
}

/// Square grid on the y = 0 plane
///
/// `subdivision + 1` lines run along Z and as many along X; the two through
/// the origin use [`GRID_AXIS_COLOR`] when `subdivision` is even. Counts
/// above [`MAX_SUBDIVISION`] are clamped.
pub fn grid_lines(projector: &ScreenProjector, subdivision: u32) -> Vec<ScreenLine> {
    let subdivision = clamp_subdivision(subdivision);
    let every = (GRID_HALF_WIDTH * 2.0) / subdivision as f32;
    let mut lines = Vec::with_capacity(2 * (subdivision as usize + 1));

    for index in 0..=subdivision {
        let offset = -GRID_HALF_WIDTH + every * index as f32;
        let color = if index * 2 == subdivision { GRID_AXIS_COLOR } else { GRID_COLOR };
        let mut sink = LineSink::new(projector, color);
        sink.push(Vec3::new(offset, 0.0, -GRID_HALF_WIDTH), Vec3::new(offset, 0.0, GRID_HALF_WIDTH));
        sink.push(Vec3::new(-GRID_HALF_WIDTH, 0.0, offset), Vec3::new(GRID_HALF_WIDTH, 0.0, offset));
        lines.append(&mut sink.lines);
    }
    lines
}

/// Latitude/longitude wireframe of a sphere
///
/// For every band corner, one line toward the next latitude and one toward
/// the next longitude: `2 * subdivision²` lines.
pub fn sphere_lines(sphere: &Sphere, projector: &ScreenProjector, subdivision: u32, color: u32) -> Vec<ScreenLine> {
    let subdivision = clamp_subdivision(subdivision);
    let lon_every = 2.0 * PI / subdivision as f32;
    let lat_every = PI / subdivision as f32;
    let point = |lat: f32, lon: f32| {
        sphere.center
            + Vec3::new(lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin()) * sphere.radius
    };

    let mut sink = LineSink::new(projector, color);
    for lat_index in 0..subdivision {
        let lat = -PI / 2.0 + lat_every * lat_index as f32;
        for lon_index in 0..subdivision {
            let lon = lon_every * lon_index as f32;
            let a = point(lat, lon);
            sink.push(a, point(lat + lat_every, lon));
            sink.push(a, point(lat, lon + lon_every));
        }
    }
    sink.lines
}

/// Wireframe for any shape
///
/// Planes are drawn as a square of side `2 * sqrt(2)` around their center.
pub fn shape_lines(shape: &Shape, projector: &ScreenProjector, sphere_subdivision: u32, color: u32) -> Vec<ScreenLine> {
    let mut sink = LineSink::new(projector, color);
    match shape {
        Shape::Sphere(sphere) => return sphere_lines(sphere, projector, sphere_subdivision, color),
        Shape::Segment(segment) => sink.push(segment.start, segment.end),
        Shape::Triangle(triangle) => sink.push_loop(&triangle.vertices),
        Shape::Plane(plane) => {
            let center = plane.center();
            let u = perpendicular(plane.normal).normalized() * 2.0;
            let v = plane.normal.cross(u);
            sink.push_loop(&[center + u, center + v, center - u, center - v]);
        }
        Shape::AABB(aabb) => sink.push_box(&AABB::corners(aabb)),
        Shape::OBB(obb) => sink.push_box(&OBB::corners(obb)),
    }
    sink.lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Camera, Viewport};
    use affine3d_collision::{Plane, Segment, Triangle};

    fn projector() -> ScreenProjector {
        Camera::default().projector(&Viewport::window(1280.0, 720.0))
    }

    #[test]
    fn test_grid_line_count_and_colors() {
        let lines = grid_lines(&projector(), 10);
        assert_eq!(lines.len(), 22);
        let axis_lines = lines.iter().filter(|l| l.color == GRID_AXIS_COLOR).count();
        assert_eq!(axis_lines, 2);
        assert!(lines.iter().all(|l| l.start.x.is_finite() && l.end.y.is_finite()));
    }

    #[test]
    fn test_sphere_line_count() {
        let lines = sphere_lines(&Sphere::unit(), &projector(), 16, IDLE_COLOR);
        assert_eq!(lines.len(), 2 * 16 * 16);
        assert!(lines.iter().all(|l| l.color == IDLE_COLOR));
    }

    #[test]
    fn test_shape_line_counts() {
        let p = projector();
        let count = |shape: Shape| shape_lines(&shape, &p, 8, HIT_COLOR).len();
        assert_eq!(count(Shape::Segment(Segment::new(Vec3::ZERO, Vec3::X))), 1);
        assert_eq!(count(Shape::Triangle(Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y))), 3);
        assert_eq!(count(Shape::Plane(Plane::new(Vec3::Y, 0.0))), 4);
        assert_eq!(count(Shape::AABB(AABB::unit())), 12);
        assert_eq!(count(Shape::OBB(OBB::default())), 12);
        assert_eq!(count(Shape::Sphere(Sphere::unit())), 2 * 8 * 8);
    }

    #[test]
    fn test_segment_line_matches_projection() {
        let p = projector();
        let lines = shape_lines(&Shape::Segment(Segment::new(Vec3::ZERO, Vec3::Y)), &p, 8, IDLE_COLOR);
        assert_eq!(lines[0].start, p.project(Vec3::ZERO));
        assert_eq!(lines[0].end, p.project(Vec3::Y));
    }

    #[test]
    fn test_subdivision_is_clamped() {
        let p = projector();
        assert_eq!(grid_lines(&p, u32::MAX).len(), 2 * (MAX_SUBDIVISION as usize + 1));
        assert_eq!(grid_lines(&p, 0).len(), 4);
        let sphere = sphere_lines(&Sphere::unit(), &p, MAX_SUBDIVISION + 1, IDLE_COLOR);
        assert_eq!(sphere.len(), 2 * (MAX_SUBDIVISION * MAX_SUBDIVISION) as usize);
    }

    #[test]
    fn test_screen_lines_cast_to_floats() {
        let lines = grid_lines(&projector(), 2);
        let bytes: &[u8] = bytemuck::cast_slice(&lines);
        assert_eq!(bytes.len(), lines.len() * std::mem::size_of::<ScreenLine>());
        assert_eq!(std::mem::size_of::<ScreenLine>(), 28);
    }
}
