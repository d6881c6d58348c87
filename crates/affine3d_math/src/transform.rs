//! Transform matrix builders
//!
//! All builders produce row-major matrices for the row-vector convention used
//! by [`crate::mat4`], so composite transforms read left to right in the order
//! they are applied.

use crate::mat4::{self, Mat4, IDENTITY, ZERO};
use crate::Vec3;

/// Identity with the translation row set to `t`
pub fn make_translate(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t.x;
    m[3][1] = t.y;
    m[3][2] = t.z;
    m
}

/// Identity with the diagonal set to `s`
pub fn make_scale(s: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = s.x;
    m[1][1] = s.y;
    m[2][2] = s.z;
    m
}

/// Rotation about the X axis (right-handed)
pub fn make_rotate_x(radian: f32) -> Mat4 {
    let (sn, cs) = radian.sin_cos();
    let mut m = IDENTITY;
    m[1][1] = cs;
    m[1][2] = sn;
    m[2][1] = -sn;
    m[2][2] = cs;
    m
}

/// Rotation about the Y axis (right-handed)
pub fn make_rotate_y(radian: f32) -> Mat4 {
    let (sn, cs) = radian.sin_cos();
    let mut m = IDENTITY;
    m[0][0] = cs;
    m[0][2] = -sn;
    m[2][0] = sn;
    m[2][2] = cs;
    m
}

/// Rotation about the Z axis (right-handed)
pub fn make_rotate_z(radian: f32) -> Mat4 {
    let (sn, cs) = radian.sin_cos();
    let mut m = IDENTITY;
    m[0][0] = cs;
    m[0][1] = sn;
    m[1][0] = -sn;
    m[1][1] = cs;
    m
}

/// Composed rotation `X(r.x) · Y(r.y) · Z(r.z)`
///
/// The order is fixed; rotations do not commute.
pub fn make_rotate_xyz(r: Vec3) -> Mat4 {
    mat4::mul(mat4::mul(make_rotate_x(r.x), make_rotate_y(r.y)), make_rotate_z(r.z))
}

/// Affine matrix `Scale · Rotate · Translate`
///
/// Applies scale first, then rotation, then translation.
///
/// # Example
/// ```
/// use affine3d_math::{Vec3, mat4, transform::make_affine};
/// let m = make_affine(Vec3::ONE, Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(mat4::transform_point(Vec3::ZERO, m), Vec3::new(1.0, 2.0, 3.0));
/// ```
pub fn make_affine(scale: Vec3, rotate: Vec3, translate: Vec3) -> Mat4 {
    mat4::mul(
        mat4::mul(make_scale(scale), make_rotate_xyz(rotate)),
        make_translate(translate),
    )
}

/// Perspective projection for a symmetric frustum
///
/// Maps view-space depth `[near, far]` to `[0, 1]` after the w-divide, with
/// `w = z`. `near == far` divides by zero and is not guarded.
pub fn make_perspective_fov(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let tan_half_fov_y = (fov_y / 2.0).tan();

    let mut m = ZERO;
    m[0][0] = 1.0 / (aspect * tan_half_fov_y);
    m[1][1] = 1.0 / tan_half_fov_y;
    m[2][2] = far / (far - near);
    m[2][3] = 1.0;
    m[3][2] = -(far * near) / (far - near);
    m
}

/// Orthographic projection mapping the given box to NDC with depth `[0, 1]`
pub fn make_orthographic(left: f32, top: f32, right: f32, bottom: f32, near: f32, far: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = 2.0 / (right - left);
    m[1][1] = 2.0 / (top - bottom);
    m[2][2] = 1.0 / (far - near);
    m[3][0] = (left + right) / (left - right);
    m[3][1] = (top + bottom) / (bottom - top);
    m[3][2] = near / (near - far);
    m
}

/// NDC to screen mapping for a top-left origin raster
///
/// Y is flipped (`m[1][1] = -height / 2`); depth maps to `[min_depth, max_depth]`.
pub fn make_viewport(left: f32, top: f32, width: f32, height: f32, min_depth: f32, max_depth: f32) -> Mat4 {
    let mut m = ZERO;
    m[0][0] = width / 2.0;
    m[1][1] = -height / 2.0;
    m[2][2] = max_depth - min_depth;
    m[3][0] = left + width / 2.0;
    m[3][1] = top + height / 2.0;
    m[3][2] = min_depth;
    m[3][3] = 1.0;
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat4::{inverse, mul, transform_point};
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    #[test]
    fn test_translate() {
        let m = make_translate(Vec3::new(4.1, 2.6, 0.8));
        assert_eq!(m[3], [4.1, 2.6, 0.8, 1.0]);
        let p = transform_point(Vec3::ONE, m);
        assert!(vec_approx_eq(p, Vec3::new(5.1, 3.6, 1.8)));
    }

    #[test]
    fn test_scale() {
        let m = make_scale(Vec3::new(1.5, 5.2, 7.3));
        let p = transform_point(Vec3::ONE, m);
        assert!(vec_approx_eq(p, Vec3::new(1.5, 5.2, 7.3)));
    }

    #[test]
    fn test_rotate_x() {
        // Y goes to Z under a quarter turn about X
        let p = transform_point(Vec3::Y, make_rotate_x(FRAC_PI_2));
        assert!(vec_approx_eq(p, Vec3::Z), "got {:?}", p);
    }

    #[test]
    fn test_rotate_y() {
        // Z goes to X under a quarter turn about Y
        let p = transform_point(Vec3::Z, make_rotate_y(FRAC_PI_2));
        assert!(vec_approx_eq(p, Vec3::X), "got {:?}", p);
    }

    #[test]
    fn test_rotate_z() {
        // X goes to Y under a quarter turn about Z
        let p = transform_point(Vec3::X, make_rotate_z(FRAC_PI_2));
        assert!(vec_approx_eq(p, Vec3::Y), "got {:?}", p);
    }

    #[test]
    fn test_rotate_xyz_order() {
        let r = Vec3::new(0.4, 1.43, -0.8);
        let expected = mul(mul(make_rotate_x(r.x), make_rotate_y(r.y)), make_rotate_z(r.z));
        assert_eq!(make_rotate_xyz(r), expected);

        // Reversed composition gives a different matrix
        let reversed = mul(mul(make_rotate_z(r.z), make_rotate_y(r.y)), make_rotate_x(r.x));
        assert_ne!(make_rotate_xyz(r), reversed);
    }

    #[test]
    fn test_affine_identity_parts_yield_translation() {
        let t = Vec3::new(2.7, -4.15, 1.57);
        let m = make_affine(Vec3::ONE, Vec3::ZERO, t);
        assert!(vec_approx_eq(transform_point(Vec3::ZERO, m), t));
    }

    #[test]
    fn test_affine_scales_before_rotating() {
        // Scale X by 2 then rotate a half turn about Z, then translate
        let m = make_affine(Vec3::new(2.0, 1.0, 1.0), Vec3::new(0.0, 0.0, PI), Vec3::new(0.0, 0.0, 5.0));
        let p = transform_point(Vec3::X, m);
        assert!(vec_approx_eq(p, Vec3::new(-2.0, 0.0, 5.0)), "got {:?}", p);
    }

    #[test]
    fn test_affine_inverse_undoes_camera() {
        let camera = make_affine(Vec3::ONE, Vec3::new(0.26, 0.0, 0.0), Vec3::new(0.0, 1.9, -6.49));
        let view = inverse(camera);
        let world = Vec3::new(0.3, 0.2, 1.0);
        let back = transform_point(transform_point(world, view), camera);
        assert!(vec_approx_eq(back, world));
    }

    #[test]
    fn test_perspective_depth_range() {
        let m = make_perspective_fov(0.45, 16.0 / 9.0, 0.1, 100.0);
        assert_eq!(m[2][3], 1.0);
        let near = transform_point(Vec3::new(0.0, 0.0, 0.1), m);
        let far = transform_point(Vec3::new(0.0, 0.0, 100.0), m);
        assert!(near.z.abs() < EPSILON);
        assert!((far.z - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_perspective_near_equals_far_is_not_finite() {
        let m = make_perspective_fov(0.45, 1.0, 1.0, 1.0);
        assert!(!m[2][2].is_finite());
    }

    #[test]
    fn test_orthographic_maps_box_to_ndc() {
        let m = make_orthographic(-160.0, 160.0, 200.0, 300.0, 0.0, 1000.0);
        let left_top = transform_point(Vec3::new(-160.0, 160.0, 0.0), m);
        let right_bottom = transform_point(Vec3::new(200.0, 300.0, 1000.0), m);
        assert!(vec_approx_eq(left_top, Vec3::new(-1.0, 1.0, 0.0)), "got {:?}", left_top);
        assert!(vec_approx_eq(right_bottom, Vec3::new(1.0, -1.0, 1.0)), "got {:?}", right_bottom);
    }

    #[test]
    fn test_viewport_flips_y() {
        let m = make_viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0);
        assert_eq!(m[1][1], -360.0);

        let center = transform_point(Vec3::ZERO, m);
        assert!(vec_approx_eq(center, Vec3::new(640.0, 360.0, 0.0)));

        // NDC top-left lands at raster origin
        let top_left = transform_point(Vec3::new(-1.0, 1.0, 1.0), m);
        assert!(vec_approx_eq(top_left, Vec3::new(0.0, 0.0, 1.0)));
    }
}
