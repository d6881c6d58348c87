//! affine3d - 3D affine geometry and collision kernel
//!
//! Re-exports the math and collision crates and adds the application layer
//! used by the `affine3d` binary: layered configuration, a camera that builds
//! the view/projection/viewport matrices, a scene of named shapes, and
//! screen-space wireframe line lists for an external drawing layer.

pub mod camera;
pub mod config;
pub mod scene;
pub mod wireframe;

pub use affine3d_collision as collision;
pub use affine3d_math as math;

pub use camera::{Camera, ProjectionMode, Viewport};
pub use config::{AppConfig, ConfigError};
pub use scene::{NamedShape, PairResult, Scene};
pub use wireframe::ScreenLine;
