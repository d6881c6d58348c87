//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use affine3d::collision::Shape;
use affine3d::config::AppConfig;
use affine3d::ProjectionMode;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("AFF_CAMERA__FOV_Y", "0.9");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.camera.fov_y, 0.9);
    std::env::remove_var("AFF_CAMERA__FOV_Y");
}

#[test]
#[serial]
fn test_env_override_enum() {
    std::env::set_var("AFF_CAMERA__PROJECTION", "orthographic");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.camera.projection, ProjectionMode::Orthographic);
    std::env::remove_var("AFF_CAMERA__PROJECTION");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("AFF_CAMERA__FOV_Y");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.viewport.width, 1280.0);
    assert_eq!(config.camera.translate, [0.0, 1.9, -6.49]);

    let kinds: Vec<&str> = config.scene.shapes.iter().map(|s| s.shape.kind()).collect();
    assert_eq!(kinds, ["sphere", "plane", "segment", "triangle", "aabb", "obb"]);
    assert!(matches!(config.scene.shapes[0].shape, Shape::Sphere(s) if s.radius == 0.6));
}

#[test]
#[serial]
fn test_default_scene_evaluates() {
    let config = AppConfig::load().unwrap();
    let scene = config.scene.to_scene();
    let results = scene.evaluate();

    // Pairs are recorded in scene order; look them up in either order
    let find = |a: &str, b: &str| {
        results
            .iter()
            .find(|r| {
                let (first, second) = (&scene.shapes()[r.a].name, &scene.shapes()[r.b].name);
                (first == a && second == b) || (first == b && second == a)
            })
            .map(|r| r.colliding)
    };

    // Sphere of radius 0.6 reaches the plane at y = 0.5
    assert_eq!(find("sphere", "plane"), Some(true));
    // Segment runs below the plane and behind the triangle
    assert_eq!(find("segment", "plane"), Some(false));
    assert_eq!(find("segment", "triangle"), Some(false));
    assert_eq!(find("segment", "aabb"), Some(true));
    assert_eq!(find("segment", "obb"), Some(true));
    assert_eq!(find("sphere", "triangle"), None);
    assert_eq!(find("plane", "segment"), find("segment", "plane"));
    assert!(results.iter().all(|r| r.a < r.b));
}
