//! World to screen projection
//!
//! This is the bridge between the matrix layer and an external drawing layer:
//! a world point goes through view-projection (with the w-divide) into NDC,
//! then through the viewport matrix into raster coordinates.

use crate::mat4::{self, Mat4};
use crate::Vec3;

/// Project a world-space point to a raster position
///
/// `z` of the result is the mapped depth. Points with `w == 0` after the
/// view-projection (on the camera plane) produce non-finite output.
pub fn world_to_screen(point: Vec3, view_projection: Mat4, viewport: Mat4) -> Vec3 {
    let ndc = mat4::transform_point(point, view_projection);
    mat4::transform_point(ndc, viewport)
}

/// The pair of matrices needed to put world points on screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenProjector {
    pub view_projection: Mat4,
    pub viewport: Mat4,
}

impl ScreenProjector {
    pub fn new(view_projection: Mat4, viewport: Mat4) -> Self {
        Self {
            view_projection,
            viewport,
        }
    }

    /// Project a single world point, see [`world_to_screen`]
    #[inline]
    pub fn project(&self, point: Vec3) -> Vec3 {
        world_to_screen(point, self.view_projection, self.viewport)
    }

    /// Project both ends of a world-space line
    pub fn project_line(&self, start: Vec3, end: Vec3) -> (Vec3, Vec3) {
        (self.project(start), self.project(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat4::{inverse, mul, IDENTITY};
    use crate::transform::{make_affine, make_perspective_fov, make_viewport};

    const EPSILON: f32 = 0.001;

    #[test]
    fn test_identity_view_projection_maps_ndc_to_raster() {
        let viewport = make_viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0);
        let p = world_to_screen(Vec3::new(1.0, -1.0, 0.5), IDENTITY, viewport);
        assert!((p.x - 1280.0).abs() < EPSILON);
        assert!((p.y - 720.0).abs() < EPSILON);
        assert!((p.z - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_point_ahead_of_camera_lands_at_screen_center() {
        let camera = make_affine(Vec3::ONE, Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0));
        let view = inverse(camera);
        let projection = make_perspective_fov(0.45, 1280.0 / 720.0, 0.1, 100.0);
        let projector = ScreenProjector::new(
            mul(view, projection),
            make_viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0),
        );

        let p = projector.project(Vec3::ZERO);
        assert!((p.x - 640.0).abs() < EPSILON, "got {:?}", p);
        assert!((p.y - 360.0).abs() < EPSILON, "got {:?}", p);
        assert!(p.z > 0.0 && p.z < 1.0);

        // Up in world space is up on screen, which is a smaller raster y
        let (origin, up) = projector.project_line(Vec3::ZERO, Vec3::Y);
        assert!(up.y < origin.y);
    }

    #[test]
    fn test_point_on_camera_plane_is_not_finite() {
        let projection = make_perspective_fov(0.45, 1.0, 0.1, 100.0);
        let viewport = make_viewport(0.0, 0.0, 100.0, 100.0, 0.0, 1.0);
        let p = world_to_screen(Vec3::new(1.0, 0.0, 0.0), projection, viewport);
        assert!(!p.x.is_finite());
    }
}
