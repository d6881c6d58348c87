//! affine3d - evaluate one frame of a configured scene
//!
//! Loads the layered configuration, tests every shape pair, projects the grid
//! and shape wireframes to screen space and prints a summary. Drawing the
//! lines is left to whatever consumes the output.

use affine3d::config::AppConfig;
use affine3d::math::{display, mat4};
use affine3d::wireframe::{self, ScreenLine, HIT_COLOR, IDLE_COLOR};

fn main() {
    let config = AppConfig::load();

    // Initialize logging; RUST_LOG still wins over the configured level
    let level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting affine3d");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let camera = config.camera.to_camera();
    let viewport = config.viewport.to_viewport();
    let projector = camera.projector(&viewport);

    if config.debug.show_overlay {
        println!("{}", display::matrix_table(&camera.view_matrix(), "view"));
        println!("{}", display::matrix_table(&projector.view_projection, "viewProjection"));
        println!("{}", display::matrix_table(&projector.viewport, "viewport"));
        println!("{}", display::vector_row(camera.translate, "camera"));
    }
    if mat4::is_zero(&projector.view_projection) {
        log::warn!("View-projection matrix is zero; screen output will be NaN");
    }

    let scene = config.scene.to_scene();
    let results = scene.evaluate();
    let hits = scene.colliding_flags(&results);

    let mut lines: Vec<ScreenLine> = Vec::new();
    if config.scene.show_grid {
        lines.extend(wireframe::grid_lines(&projector, config.scene.grid_subdivision));
    }
    for (named, &hit) in scene.shapes().iter().zip(&hits) {
        let color = if hit { HIT_COLOR } else { IDLE_COLOR };
        lines.extend(wireframe::shape_lines(&named.shape, &projector, config.scene.sphere_subdivision, color));
    }

    for r in &results {
        let a = &scene.shapes()[r.a];
        let b = &scene.shapes()[r.b];
        println!(
            "{:<12} {:<12} {}",
            a.name,
            b.name,
            if r.colliding { "hit" } else { "-" }
        );
    }

    log::info!(
        "Evaluated {} pairs across {} shapes ({} colliding), {} screen lines",
        results.len(),
        scene.len(),
        results.iter().filter(|r| r.colliding).count(),
        lines.len()
    );
}
