//! Face ordering and visibility for a cube overlaid on a fiducial marker.
//!
//! Given the eight projected corners of a cube standing on a detected
//! marker, decides per frame which lateral face is the front, which are
//! its left and right neighbours, which faces the camera can see, and
//! paints them in painter's order onto a [`render::Canvas`]. Marker
//! detection, pose estimation and projection happen upstream.

pub mod config;
pub mod cube;
pub mod error;
pub mod math;
pub mod pipeline;
pub mod render;
pub mod resolve;

pub use config::OverlayConfig;
pub use cube::{cube_object_points, CubeFaces, CubePoints, Face, FacePalette, Position};
pub use error::{CubeError, Result};
pub use pipeline::{resolve_frame, CubeOverlay, FaceRenderState, Stage};
pub use render::{Canvas, Color, Framebuffer, OutlineStyle, VertexMarkers};
pub use resolve::EdgeTolerance;
