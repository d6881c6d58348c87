//! 3D Affine Mathematics Library
//!
//! Vector and 4x4 homogeneous matrix algebra for the affine3d kernel.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 row-major matrix acting on row vectors
//!
//! ## Modules
//!
//! - [`mat4`] - matrix algebra, inverse, point transform
//! - [`transform`] - translate/scale/rotate/affine/perspective/viewport builders
//! - [`projection`] - world to screen projection
//! - [`display`] - fixed-column text tables for vectors and matrices

mod vec3;
pub mod display;
pub mod mat4;
pub mod projection;
pub mod transform;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use projection::{world_to_screen, ScreenProjector};
