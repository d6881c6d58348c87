//! Collision shapes
//!
//! Plain value types. The predicates in [`crate::collision`] operate on them;
//! the helpers here only derive quantities (centers, signed distances, axes).

use affine3d_math::{mat4, transform::make_rotate_xyz, Vec3};
use serde::{Deserialize, Serialize};

/// A directed line segment from `start` to `end`
///
/// Zero-length segments are allowed; their direction is the zero vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Segment starting at `origin` and spanning `diff`
    pub fn from_origin_diff(origin: Vec3, diff: Vec3) -> Self {
        Self::new(origin, origin + diff)
    }

    /// `end - start`
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    /// Point at parameter `t` (0 = start, 1 = end)
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.start + self.direction() * t
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }
}

/// An infinite plane
///
/// The plane equation is: normal · point = distance
/// Points with normal · point > distance are on the positive side.
/// Deserialized planes go through [`Plane::new`], so their normal is unit length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlaneDef")]
pub struct Plane {
    /// Unit normal pointing to the positive side
    pub normal: Vec3,
    /// Signed distance from origin along the normal
    pub distance: f32,
}

/// Plane fields as written in a file, before normalization
#[derive(Deserialize)]
struct PlaneDef {
    normal: Vec3,
    distance: f32,
}

impl From<PlaneDef> for Plane {
    fn from(def: PlaneDef) -> Self {
        Plane::new(def.normal, def.distance)
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal: Vec3::Y,
            distance: 0.0,
        }
    }
}

impl Plane {
    /// Create a new plane from a normal and distance
    ///
    /// The normal will be normalized automatically.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self {
            normal: normal.normalized(),
            distance,
        }
    }

    /// Create a plane from a point on the plane and a normal
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let n = normal.normalized();
        Self {
            normal: n,
            distance: n.dot(point),
        }
    }

    /// Plane through three points, see [`crate::query::plane_from_three_points`]
    pub fn from_three_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        crate::query::plane_from_three_points(a, b, c)
    }

    /// Signed distance from `point` to the plane
    ///
    /// Positive = on normal side, negative = opposite side, zero = on plane.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// The `D` of `normal · p + D = 0`
    #[inline]
    pub fn plane_constant(&self) -> f32 {
        -self.distance
    }

    /// The point of the plane closest to the origin
    pub fn center(&self) -> Vec3 {
        self.normal * self.distance
    }

    /// Three points on the plane, one unit from its center
    ///
    /// Ordered so that [`Plane::from_three_points`] on them gives back this
    /// plane's normal.
    pub fn representative_points(&self) -> [Vec3; 3] {
        let center = self.center();
        let u = crate::query::perpendicular(self.normal).normalized();
        let v = self.normal.cross(u);
        [center + u, center + v, center - u]
    }
}

/// A triangle with ordered vertices
///
/// The winding decides the normal: `cross(v1 - v0, v2 - v0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Unit normal from the winding order (zero for degenerate triangles)
    pub fn normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0).normalized()
    }

    /// The plane the triangle lies in
    pub fn plane(&self) -> Plane {
        let [v0, v1, v2] = self.vertices;
        Plane::from_three_points(v0, v1, v2)
    }

    pub fn centroid(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v0 + v1 + v2) / 3.0
    }
}

/// A sphere defined by center and radius
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Default for Sphere {
    fn default() -> Self {
        Self::unit()
    }
}

impl Sphere {
    /// Create a new sphere at the given center with the given radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Create a unit sphere at the origin
    pub fn unit() -> Self {
        Self::new(Vec3::ZERO, 1.0)
    }

    /// Check if a point is inside or on the sphere
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

/// An axis-aligned bounding box
///
/// `min <= max` on every axis is the caller's responsibility; see [`AABB::sorted`].
/// Deserialized boxes are sorted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "AabbDef")]
pub struct AABB {
    /// Minimum corner (all components are minimums)
    pub min: Vec3,
    /// Maximum corner (all components are maximums)
    pub max: Vec3,
}

#[derive(Deserialize)]
struct AabbDef {
    min: Vec3,
    max: Vec3,
}

impl From<AabbDef> for AABB {
    fn from(def: AabbDef) -> Self {
        AABB::new(def.min, def.max).sorted()
    }
}

impl Default for AABB {
    fn default() -> Self {
        Self::unit()
    }
}

impl AABB {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Create a unit cube centered at the origin
    pub fn unit() -> Self {
        Self::from_center_half_extents(Vec3::ZERO, Vec3::new(0.5, 0.5, 0.5))
    }

    /// Copy with `min` and `max` swapped per axis where they were inverted
    ///
    /// Hand-written corners can put `min` past `max`; call this before testing.
    pub fn sorted(&self) -> Self {
        Self {
            min: self.min.min_components(self.max),
            max: self.min.max_components(self.max),
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents (half the size in each dimension)
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if a point is inside or on the AABB
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Get the closest point inside or on the AABB to a given point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp_components(self.min, self.max)
    }

    /// The eight corners, min corner first
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }
}

/// An oriented bounding box
///
/// `axes` is an orthonormal basis; `half_extents` are measured along it.
/// Deserialized boxes are passed through [`OBB::orthonormalized`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ObbDef")]
pub struct OBB {
    pub center: Vec3,
    pub axes: [Vec3; 3],
    pub half_extents: Vec3,
}

#[derive(Deserialize)]
struct ObbDef {
    center: Vec3,
    axes: [Vec3; 3],
    half_extents: Vec3,
}

impl From<ObbDef> for OBB {
    fn from(def: ObbDef) -> Self {
        OBB::new(def.center, def.axes, def.half_extents).orthonormalized()
    }
}

impl Default for OBB {
    fn default() -> Self {
        Self::new(Vec3::ZERO, [Vec3::X, Vec3::Y, Vec3::Z], Vec3::new(0.5, 0.5, 0.5))
    }
}

impl OBB {
    pub fn new(center: Vec3, axes: [Vec3; 3], half_extents: Vec3) -> Self {
        Self {
            center,
            axes,
            half_extents,
        }
    }

    /// Box whose axes are the rows of `make_rotate_xyz(rotate)`
    pub fn from_rotation(center: Vec3, rotate: Vec3, half_extents: Vec3) -> Self {
        let m = make_rotate_xyz(rotate);
        let axes = [mat4::get_row(m, 0), mat4::get_row(m, 1), mat4::get_row(m, 2)];
        Self::new(center, axes, half_extents)
    }

    /// Copy with the axes made orthonormal (Gram-Schmidt)
    ///
    /// The first axis keeps its direction and the second stays in the plane
    /// of the first two. The third becomes their cross product, flipped to
    /// point the way the given third axis did. Zero or parallel input axes
    /// give zero axes.
    pub fn orthonormalized(&self) -> Self {
        let [a0, a1, a2] = self.axes;
        let x = a0.normalized();
        let y = (a1 - x * a1.dot(x)).normalized();
        let z = x.cross(y);
        let z = if z.dot(a2) < 0.0 { -z } else { z };
        Self::new(self.center, [x, y, z], self.half_extents)
    }

    /// Express a world point in the box's local frame
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        let d = point - self.center;
        Vec3::new(d.dot(self.axes[0]), d.dot(self.axes[1]), d.dot(self.axes[2]))
    }

    /// Express a local point in world space
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.center + self.axes[0] * local.x + self.axes[1] * local.y + self.axes[2] * local.z
    }

    /// The box in its own frame: an AABB centered at the origin
    pub fn local_aabb(&self) -> AABB {
        AABB::from_center_half_extents(Vec3::ZERO, self.half_extents)
    }

    /// The eight corners in world space
    pub fn corners(&self) -> [Vec3; 8] {
        self.local_aabb().corners().map(|c| self.to_world(c))
    }
}

/// Any of the collision shapes, for heterogeneous collections
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Segment(Segment),
    Triangle(Triangle),
    #[serde(rename = "aabb")]
    AABB(AABB),
    #[serde(rename = "obb")]
    OBB(OBB),
}

impl Shape {
    /// Short lowercase name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
            Shape::Segment(_) => "segment",
            Shape::Triangle(_) => "triangle",
            Shape::AABB(_) => "aabb",
            Shape::OBB(_) => "obb",
        }
    }
}
