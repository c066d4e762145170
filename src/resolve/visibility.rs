use tracing::{debug, trace};

use crate::cube::Position;
use crate::math::polygon_2d::{classify_point, PointClassification};
use crate::math::Point2;
use crate::pipeline::{PositionedCube, ResolvedCube};

/// Decides whether a lateral face is visible.
///
/// - FRONT is always visible.
/// - LEFT and RIGHT are visible only when `centroid` lies strictly outside
///   both the top and the front contour; touching either boundary hides
///   the face.
/// - BACK, TOP and unresolved faces are never visible through this test.
///
/// An empty contour contains nothing, so it never hides a side face.
#[must_use]
pub fn is_face_shown(
    position: Position,
    centroid: &Point2,
    front_contour: &[Point2],
    top_contour: &[Point2],
) -> bool {
    match position {
        Position::Front => true,
        side if side.is_side() => {
            classify_point(centroid, top_contour) == PointClassification::Outside
                && classify_point(centroid, front_contour) == PointClassification::Outside
        }
        _ => false,
    }
}

/// Marks each lateral face shown or hidden against this frame's front and
/// top contours.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveVisibility;

impl ResolveVisibility {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Runs the stage on a positioned cube.
    #[must_use]
    pub fn execute<'a>(&self, cube: PositionedCube<'a>) -> ResolvedCube<'a> {
        let front_contour = cube.front_contour();
        let top_contour = cube.top_contour();
        if front_contour.is_empty() {
            debug!("no front face this frame, side faces are not occluded by it");
        }

        let front = cube.front();
        let faces = cube.into_faces();
        for face in faces.lateral_mut() {
            face.check_shown(&front_contour, &top_contour);
        }

        trace!(
            shown = ?faces.lateral().iter().map(|f| f.is_shown()).collect::<Vec<_>>(),
            "visibility resolved"
        );
        ResolvedCube::new(faces, front)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Point2> {
        vec![
            p(x0, y0 + size),
            p(x0 + size, y0 + size),
            p(x0 + size, y0),
            p(x0, y0),
        ]
    }

    #[test]
    fn front_is_always_shown() {
        let front = square(0.0, 0.0, 10.0);
        let top = square(0.0, -10.0, 10.0);
        // Even with its centroid inside both contours.
        assert!(is_face_shown(Position::Front, &p(5.0, 5.0), &front, &top));
    }

    #[test]
    fn back_is_never_shown() {
        assert!(!is_face_shown(Position::Back, &p(500.0, 500.0), &[], &[]));
    }

    #[test]
    fn unresolved_and_top_are_not_shown() {
        assert!(!is_face_shown(Position::Nothing, &p(500.0, 500.0), &[], &[]));
        assert!(!is_face_shown(Position::Top, &p(500.0, 500.0), &[], &[]));
    }

    #[test]
    fn side_outside_both_contours_is_shown() {
        let front = square(0.0, 0.0, 10.0);
        let top = square(0.0, -10.0, 10.0);
        assert!(is_face_shown(Position::Left, &p(-5.0, 0.0), &front, &top));
        assert!(is_face_shown(Position::Right, &p(15.0, 0.0), &front, &top));
    }

    #[test]
    fn side_inside_top_is_hidden() {
        let front = square(0.0, 0.0, 10.0);
        let top = square(0.0, -10.0, 10.0);
        assert!(!is_face_shown(Position::Left, &p(5.0, -5.0), &front, &top));
    }

    #[test]
    fn side_inside_front_is_hidden() {
        let front = square(0.0, 0.0, 10.0);
        let top = square(0.0, -10.0, 10.0);
        assert!(!is_face_shown(Position::Right, &p(5.0, 5.0), &front, &top));
    }

    #[test]
    fn side_on_top_vertex_is_hidden() {
        let front = square(0.0, 0.0, 10.0);
        let top = square(20.0, -10.0, 10.0);
        assert!(!is_face_shown(Position::Left, &p(20.0, -10.0), &front, &top));
    }

    #[test]
    fn side_on_front_edge_is_hidden() {
        let front = square(0.0, 0.0, 10.0);
        let top = square(0.0, -30.0, 10.0);
        assert!(!is_face_shown(Position::Right, &p(10.0, 5.0), &front, &top));
    }

    #[test]
    fn empty_front_contour_never_hides_sides() {
        let top = square(0.0, -10.0, 10.0);
        assert!(is_face_shown(Position::Left, &p(-5.0, 5.0), &[], &top));
        assert!(is_face_shown(Position::Right, &p(15.0, 5.0), &[], &top));
        assert!(is_face_shown(Position::Right, &p(5.0, 5.0), &[], &[]));
    }
}
