//! Cube overlay demo: spins a cube on a virtual marker in front of a
//! pinhole camera and logs how each frame is resolved.
//!
//! Usage:
//! ```text
//! cargo run --example overlay                      # log only
//! cargo run --example overlay -- last_frame.png    # also write the final frame
//! RUST_LOG=arcube=trace cargo run --example overlay
//! ```

use std::f64::consts::TAU;

use arcube::cube::CUBE_POINT_COUNT;
use arcube::math::{Point2, Point3};
use arcube::{
    cube_object_points, Color, CubeOverlay, CubePoints, Face, Framebuffer, OverlayConfig,
    VertexMarkers,
};
use nalgebra::{Rotation3, Vector3};
use tracing::info;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 960;
const FOCAL_LENGTH: f64 = 950.0;
const MARKER_LENGTH: f64 = 0.7;
const FRAMES: u32 = 36;

/// Stand-in for the pose estimation and projection service: the marker lies
/// three units in front of the camera, tilted back by 120° and spun about
/// its normal by `spin`.
fn project(object: &[Point3; CUBE_POINT_COUNT], spin: f64) -> CubePoints {
    let pose = Rotation3::from_axis_angle(&Vector3::x_axis(), 120f64.to_radians())
        * Rotation3::from_axis_angle(&Vector3::z_axis(), spin);
    let translation = Vector3::new(0.0, 0.0, 3.0);
    let cx = f64::from(WIDTH) / 2.0;
    let cy = f64::from(HEIGHT) / 2.0;

    CubePoints::new(object.map(|p| {
        let cam = pose * p.coords + translation;
        Point2::new(
            FOCAL_LENGTH * cam.x / cam.z + cx,
            FOCAL_LENGTH * cam.y / cam.z + cy,
        )
    }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for the demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=arcube=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("overlay=info".parse().unwrap_or_default())
        .add_directive("arcube=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let object = cube_object_points(MARKER_LENGTH)?;
    let config = OverlayConfig::new().with_vertex_markers(VertexMarkers::default());
    let mut overlay = CubeOverlay::new(config);
    let mut frame = Framebuffer::new(WIDTH, HEIGHT)?;

    for i in 0..FRAMES {
        frame.clear(Color::WHITE);
        let spin = TAU * f64::from(i) / f64::from(FRAMES);
        let points = project(&object, spin);
        overlay.render_frame(&mut frame, &[points]);

        let faces = overlay.faces();
        info!(
            frame = i,
            spin_deg = spin.to_degrees(),
            positions = ?faces.iter().map(Face::position).collect::<Vec<_>>(),
            drawn = ?faces.iter().map(Face::should_draw).collect::<Vec<_>>(),
            "frame resolved"
        );
    }

    if let Some(path) = std::env::args().nth(1) {
        frame.pixmap().save_png(&path)?;
        info!(path = %path, "wrote last frame");
    }
    Ok(())
}
