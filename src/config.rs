//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`AFF_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use affine3d_collision::{Plane, Segment, Shape, Sphere, Triangle, AABB, OBB};
use affine3d_math::Vec3;

use crate::camera::{Camera, ProjectionMode, Viewport};
use crate::scene::{NamedShape, Scene};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Camera placement and projection
    #[serde(default)]
    pub camera: CameraConfig,
    /// Raster target
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Shapes to test against each other
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`AFF_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // AFF_CAMERA__FOV_Y=0.6 -> camera.fov_y = 0.6
        figment = figment.merge(Env::prefixed("AFF_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Camera configuration
///
/// The camera is placed with `scale · rotate · translate`; the view matrix is
/// its inverse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera scale [x, y, z]
    pub scale: [f32; 3],
    /// Camera rotation in radians [x, y, z], applied X then Y then Z
    pub rotate: [f32; 3],
    /// Camera position [x, y, z]
    pub translate: [f32; 3],
    /// Projection kind
    pub projection: ProjectionMode,
    /// Vertical field of view in radians (perspective)
    pub fov_y: f32,
    /// Visible height in world units (orthographic)
    pub ortho_height: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            scale: [1.0, 1.0, 1.0],
            rotate: [0.26, 0.0, 0.0],
            translate: [0.0, 1.9, -6.49],
            projection: ProjectionMode::Perspective,
            fov_y: 0.45,
            ortho_height: 5.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraConfig {
    /// Convert to the camera used for projection
    pub fn to_camera(&self) -> Camera {
        Camera {
            scale: Vec3::from_array(self.scale),
            rotate: Vec3::from_array(self.rotate),
            translate: Vec3::from_array(self.translate),
            projection: self.projection,
            fov_y: self.fov_y,
            ortho_height: self.ortho_height,
            near: self.near,
            far: self.far,
        }
    }
}

/// Viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Left edge in pixels
    pub left: f32,
    /// Top edge in pixels
    pub top: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
    /// Depth written for the near plane
    pub min_depth: f32,
    /// Depth written for the far plane
    pub max_depth: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 1280.0,
            height: 720.0,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

impl ViewportConfig {
    pub fn to_viewport(&self) -> Viewport {
        Viewport {
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
            min_depth: self.min_depth,
            max_depth: self.max_depth,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Emit the ground grid
    pub show_grid: bool,
    /// Lines per side of the ground grid
    pub grid_subdivision: u32,
    /// Latitude/longitude bands of sphere wireframes
    pub sphere_subdivision: u32,
    /// Shapes, tested pairwise
    pub shapes: Vec<NamedShape>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            grid_subdivision: 10,
            sphere_subdivision: 16,
            shapes: vec![
                NamedShape::new("sphere", Shape::Sphere(Sphere::new(Vec3::ZERO, 0.6))),
                NamedShape::new("plane", Shape::Plane(Plane::new(Vec3::Y, 0.5))),
                NamedShape::new(
                    "segment",
                    Shape::Segment(Segment::new(Vec3::new(-0.8, -0.3, -0.2), Vec3::new(1.2, 0.2, -0.2))),
                ),
                NamedShape::new(
                    "triangle",
                    Shape::Triangle(Triangle::new(
                        Vec3::new(0.0, 1.0, 0.0),
                        Vec3::new(-1.0, 0.0, 0.0),
                        Vec3::new(1.0, 0.0, 0.0),
                    )),
                ),
                NamedShape::new(
                    "aabb",
                    Shape::AABB(AABB::new(Vec3::new(-0.5, -0.5, -0.5), Vec3::ZERO)),
                ),
                NamedShape::new(
                    "obb",
                    Shape::OBB(OBB::from_rotation(Vec3::new(1.5, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.5), Vec3::new(0.5, 0.5, 0.5))),
                ),
            ],
        }
    }
}

impl SceneConfig {
    pub fn to_scene(&self) -> Scene {
        Scene::new(self.shapes.clone())
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Print camera matrices as text tables
    pub show_overlay: bool,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_overlay: false,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
