//! Camera and viewport
//!
//! Turns the camera's placement and lens settings into the matrices the
//! screen projection needs. Nothing here is cached; every call rebuilds
//! from the current values.

use affine3d_math::{
    mat4::{self, Mat4},
    transform::{make_affine, make_orthographic, make_perspective_fov, make_viewport},
    ScreenProjector, Vec3,
};
use serde::{Deserialize, Serialize};

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    Perspective,
    Orthographic,
}

/// Camera placement and lens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub scale: Vec3,
    pub rotate: Vec3,
    pub translate: Vec3,
    pub projection: ProjectionMode,
    /// Vertical field of view in radians (perspective)
    pub fov_y: f32,
    /// Visible height in world units (orthographic)
    pub ortho_height: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotate: Vec3::ZERO,
            translate: Vec3::new(0.0, 0.0, -10.0),
            projection: ProjectionMode::Perspective,
            fov_y: 0.45,
            ortho_height: 5.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Camera-to-world matrix
    pub fn camera_matrix(&self) -> Mat4 {
        make_affine(self.scale, self.rotate, self.translate)
    }

    /// World-to-camera matrix
    ///
    /// A camera with a zero scale component cannot be inverted; the result is
    /// then the zero matrix and everything projects to NaN.
    pub fn view_matrix(&self) -> Mat4 {
        let view = mat4::inverse(self.camera_matrix());
        if mat4::is_zero(&view) {
            log::warn!("Camera matrix is singular (scale {:?}); view matrix is zero", self.scale);
        }
        view
    }

    /// Camera-to-NDC matrix for the given width/height ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        if self.near == self.far {
            log::warn!("Camera near and far planes are both {}", self.near);
        }
        match self.projection {
            ProjectionMode::Perspective => make_perspective_fov(self.fov_y, aspect, self.near, self.far),
            ProjectionMode::Orthographic => {
                let half_height = self.ortho_height / 2.0;
                let half_width = half_height * aspect;
                make_orthographic(-half_width, half_height, half_width, -half_height, self.near, self.far)
            }
        }
    }

    /// `view · projection`
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        mat4::mul(self.view_matrix(), self.projection_matrix(aspect))
    }

    /// Everything needed to put world points on `viewport`
    pub fn projector(&self, viewport: &Viewport) -> ScreenProjector {
        ScreenProjector::new(self.view_projection(viewport.aspect()), viewport.matrix())
    }
}

/// Raster target rectangle and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full window viewport with depth `[0, 1]`
    pub fn window(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    /// Width divided by height
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn matrix(&self) -> Mat4 {
        make_viewport(self.left, self.top, self.width, self.height, self.min_depth, self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    #[test]
    fn test_view_inverts_camera() {
        let camera = Camera {
            rotate: Vec3::new(0.26, 0.3, 0.0),
            translate: Vec3::new(0.0, 1.9, -6.49),
            ..Camera::default()
        };
        let product = mat4::mul(camera.camera_matrix(), camera.view_matrix());
        for (i, row) in product.iter().enumerate() {
            for (j, e) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((e - expected).abs() < EPSILON, "[{}][{}] = {}", i, j, e);
            }
        }
    }

    #[test]
    fn test_zero_scale_gives_zero_view() {
        let camera = Camera {
            scale: Vec3::new(1.0, 0.0, 1.0),
            ..Camera::default()
        };
        assert!(mat4::is_zero(&camera.view_matrix()));
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = Camera::default();
        let viewport = Viewport::window(1280.0, 720.0);
        let p = camera.projector(&viewport).project(Vec3::ZERO);
        assert!((p.x - 640.0).abs() < EPSILON);
        assert!((p.y - 360.0).abs() < EPSILON);
    }

    #[test]
    fn test_orthographic_ignores_depth_for_position() {
        let camera = Camera {
            projection: ProjectionMode::Orthographic,
            ..Camera::default()
        };
        let projector = camera.projector(&Viewport::window(800.0, 800.0));
        let near = projector.project(Vec3::new(1.0, 1.0, 0.0));
        let far = projector.project(Vec3::new(1.0, 1.0, 20.0));
        assert!((near.x - far.x).abs() < EPSILON);
        assert!((near.y - far.y).abs() < EPSILON);
        assert!(far.z > near.z);
    }

    #[test]
    fn test_viewport_aspect() {
        assert!((Viewport::window(1280.0, 720.0).aspect() - 16.0 / 9.0).abs() < EPSILON);
    }
}
