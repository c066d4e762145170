use tracing::debug;

use crate::math::polygon_2d::polygon_centroid;
use crate::math::Point2;
use crate::render::{stroke_closed, Canvas, Color, OutlineStyle};
use crate::resolve::visibility::is_face_shown;

use super::Position;

/// One quadrilateral of the cube as seen in the image.
///
/// Corners are stored in `ld, rd, ru, lu` order (left-down, right-down,
/// right-up, left-up), which is also the contour order. Every face of a
/// cube is wound the same way, so two faces sharing a cube edge see that
/// edge's endpoints in mirrored slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    corners: [Point2; 4],
    color: Color,
    centroid: Point2,
    is_top: bool,
    position: Position,
    is_shown: bool,
}

impl Face {
    /// Creates a face with the given corners, fill color and role.
    #[must_use]
    pub fn new(corners: [Point2; 4], color: Color, is_top: bool) -> Self {
        let mut face = Self {
            corners,
            color,
            centroid: corners[0],
            is_top,
            position: Position::Nothing,
            is_shown: false,
        };
        let [ld, rd, ru, lu] = corners;
        face.rewrite(ld, rd, ru, lu);
        face
    }

    /// Creates a face with all four corners at the origin.
    #[must_use]
    pub fn degenerate(color: Color, is_top: bool) -> Self {
        Self::new([Point2::origin(); 4], color, is_top)
    }

    /// Replaces the corners for a new frame.
    ///
    /// Recomputes the centroid and clears every per-frame label: the position
    /// returns to [`Position::Nothing`] (or [`Position::Top`] for the top face)
    /// and the face is hidden until visibility is resolved again. A zero-area
    /// quadrilateral keeps `ld` as its centroid.
    pub fn rewrite(&mut self, ld: Point2, rd: Point2, ru: Point2, lu: Point2) {
        self.corners = [ld, rd, ru, lu];
        self.centroid = polygon_centroid(&self.corners).unwrap_or_else(|| {
            debug!(?ld, ?rd, ?ru, ?lu, "zero-area face, centroid falls back to first corner");
            ld
        });
        self.position = if self.is_top {
            Position::Top
        } else {
            Position::Nothing
        };
        self.is_shown = false;
    }

    #[must_use]
    pub fn ld(&self) -> Point2 {
        self.corners[0]
    }

    #[must_use]
    pub fn rd(&self) -> Point2 {
        self.corners[1]
    }

    #[must_use]
    pub fn ru(&self) -> Point2 {
        self.corners[2]
    }

    #[must_use]
    pub fn lu(&self) -> Point2 {
        self.corners[3]
    }

    /// The corners as a closed polygon, `ld → rd → ru → lu`.
    #[must_use]
    pub fn contour(&self) -> &[Point2; 4] {
        &self.corners
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Area-weighted centroid of the current contour.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        self.centroid
    }

    #[must_use]
    pub fn is_top(&self) -> bool {
        self.is_top
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.is_shown
    }

    /// Returns `true` if the face is painted this frame.
    ///
    /// The top face is always painted; its `is_shown` flag is ignored.
    #[must_use]
    pub fn should_draw(&self) -> bool {
        self.position == Position::Top || self.is_shown
    }

    /// Decides whether this face is visible against the frame's front and
    /// top contours. Either contour may be empty.
    pub fn check_shown(&mut self, front_contour: &[Point2], top_contour: &[Point2]) {
        self.is_shown = is_face_shown(self.position, &self.centroid, front_contour, top_contour);
    }

    /// Fills the face and strokes its closed outline.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, outline: &OutlineStyle) {
        canvas.fill_polygon(&self.corners, self.color);
        stroke_closed(canvas, &self.corners, outline);
    }

    /// Resolves visibility, then draws the face if it should be painted.
    pub fn step<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        front_contour: &[Point2],
        top_contour: &[Point2],
        outline: &OutlineStyle,
    ) {
        self.check_shown(front_contour, top_contour);
        if self.should_draw() {
            self.draw(canvas, outline);
        }
    }
}
