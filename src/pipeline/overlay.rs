use tracing::{debug, trace};

use crate::config::OverlayConfig;
use crate::cube::{CubeFaces, CubePoints, FACE_COUNT};
use crate::render::Canvas;

use super::{run_resolution, snapshot, DrawCube, FaceRenderState};

/// Long-lived cube overlay for a video stream.
///
/// Owns the five faces for the whole run and rewrites them in place for
/// every projected cube.
#[derive(Debug, Clone)]
pub struct CubeOverlay {
    faces: CubeFaces,
    config: OverlayConfig,
    frames: u64,
}

impl CubeOverlay {
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            faces: CubeFaces::new(config.palette()),
            config,
            frames: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[must_use]
    pub fn faces(&self) -> &CubeFaces {
        &self.faces
    }

    /// Number of video frames passed to [`Self::render_frame`].
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Resolves and paints one projected cube onto `canvas`.
    ///
    /// Returns the resolved state of every face in drawing order.
    pub fn draw_cube<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        points: &CubePoints,
    ) -> [FaceRenderState; FACE_COUNT] {
        let mut resolved = run_resolution(&mut self.faces, points, &self.config);
        let drawn = DrawCube::new(self.config.outline()).execute(&mut resolved, canvas);
        trace!(front = ?resolved.front(), drawn, "cube drawn");

        if let Some(markers) = self.config.vertex_markers() {
            for point in points.as_array() {
                canvas.fill_circle(point, markers.radius(), markers.color());
            }
        }
        snapshot(&self.faces)
    }

    /// Paints one cube per detected marker in a video frame.
    ///
    /// An empty `detections` slice leaves the canvas untouched. Returns the
    /// number of cubes drawn.
    pub fn render_frame<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        detections: &[CubePoints],
    ) -> usize {
        self.frames += 1;
        if detections.is_empty() {
            debug!(frame = self.frames, "no marker detected");
            return 0;
        }
        for points in detections {
            self.draw_cube(canvas, points);
        }
        detections.len()
    }
}
