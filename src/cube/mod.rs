mod face;
mod faces;
mod points;

pub use face::Face;
pub use faces::{CubeFaces, FACE_COUNT, FACE_LAYOUT, LATERAL_FACE_COUNT, TOP_FACE_INDEX};
pub use points::{cube_object_points, CubePoints, CUBE_POINT_COUNT};

use crate::render::Color;

/// Where a face sits on the cube, relative to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    /// Not yet resolved for the current frame.
    #[default]
    Nothing,
    Front,
    Back,
    Left,
    Right,
    Top,
}

impl Position {
    /// Returns `true` for the faces adjacent to the front face.
    #[must_use]
    pub fn is_side(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Fixed fill colors of the five faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacePalette {
    /// Colors of the lateral faces, in assembly order.
    pub lateral: [Color; LATERAL_FACE_COUNT],
    /// Color of the top face.
    pub top: Color,
}

impl Default for FacePalette {
    fn default() -> Self {
        Self {
            lateral: [Color::RED, Color::BLUE, Color::GREEN, Color::YELLOW],
            top: Color::PURPLE,
        }
    }
}
