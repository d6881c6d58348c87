//! 3D collision detection for affine3d
//!
//! This crate provides:
//! - Collision shapes (segments, planes, triangles, spheres, AABBs, OBBs)
//! - Geometric queries (projection, closest point, plane construction)
//! - Pairwise collision predicates

pub mod collision;
pub mod query;
pub mod shapes;

// Re-export commonly used types
pub use collision::{
    aabb_vs_aabb, aabb_vs_segment, aabb_vs_sphere, aabb_vs_sphere_closest_point, obb_vs_segment,
    segment_vs_plane, shapes_collide, sphere_vs_plane, sphere_vs_sphere, triangle_vs_segment,
};
pub use query::{closest_point, plane_from_three_points, project};
pub use shapes::{Plane, Segment, Shape, Sphere, Triangle, AABB, OBB};
