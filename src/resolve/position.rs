use tracing::trace;

use crate::cube::{Face, Position};
use crate::error::{ConfigError, Result};
use crate::math::distance_2d::points_coincide;
use crate::math::Point2;
use crate::pipeline::{AssembledCube, PositionedCube};

/// Maximum distance at which two projected corners count as the same point.
///
/// The default is exact equality: adjacent faces are rewritten from the same
/// projected corner, so their shared edge matches bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeTolerance(f64);

impl EdgeTolerance {
    /// Exact coordinate equality.
    pub const EXACT: Self = Self(0.0);

    /// Creates a tolerance in pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if `pixels` is negative or not finite.
    pub fn new(pixels: f64) -> Result<Self> {
        if !pixels.is_finite() || pixels < 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "edge tolerance",
                value: pixels,
                reason: "must be finite and non-negative",
            }
            .into());
        }
        Ok(Self(pixels))
    }

    #[must_use]
    pub fn pixels(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn matches(self, a: &Point2, b: &Point2) -> bool {
        points_coincide(a, b, self.0)
    }
}

/// Labels the lateral faces FRONT, LEFT, RIGHT or BACK from screen geometry.
///
/// The front face is the one whose centroid sits lowest in the image. A face
/// whose right edge is the front's left edge is LEFT; one whose left edge is
/// the front's right edge is RIGHT; everything else is BACK.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolvePositions {
    tolerance: EdgeTolerance,
}

impl ResolvePositions {
    /// Creates a resolver using exact edge matching.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shared-edge matching tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: EdgeTolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Runs the stage on a freshly assembled cube.
    #[must_use]
    pub fn execute<'a>(&self, cube: AssembledCube<'a>) -> PositionedCube<'a> {
        let faces = cube.into_faces();
        let front = self.resolve(faces.lateral_mut());
        PositionedCube::new(faces, front)
    }

    /// Labels every face in `lateral` and returns the index of the front face.
    ///
    /// Returns `None` only for an empty slice.
    pub fn resolve(&self, lateral: &mut [Face]) -> Option<usize> {
        let front_idx = select_front(lateral)?;
        let front = lateral[front_idx].clone();

        for (i, face) in lateral.iter_mut().enumerate() {
            let position = if i == front_idx {
                Position::Front
            } else {
                self.classify_neighbour(face, &front)
            };
            face.set_position(position);
        }

        trace!(
            front = front_idx,
            positions = ?lateral.iter().map(Face::position).collect::<Vec<_>>(),
            "lateral positions resolved"
        );
        Some(front_idx)
    }

    fn classify_neighbour(&self, face: &Face, front: &Face) -> Position {
        let tol = self.tolerance;
        if tol.matches(&face.rd(), &front.ld()) && tol.matches(&face.ru(), &front.lu()) {
            Position::Left
        } else if tol.matches(&face.ld(), &front.rd()) && tol.matches(&face.lu(), &front.ru()) {
            Position::Right
        } else {
            Position::Back
        }
    }
}

/// Picks the face whose centroid has the largest image `y`.
///
/// The scan starts from a baseline of `y = 0` and only moves on a strictly
/// greater value, so the first maximal face wins and, when no centroid lies
/// below `y = 0`, the first face is chosen.
// NOTE: the zero baseline looks accidental (a cube entirely above the image
// top still resolves to face 0), but callers rely on the resulting labels.
#[must_use]
pub fn select_front(faces: &[Face]) -> Option<usize> {
    if faces.is_empty() {
        return None;
    }
    let mut max_y = 0.0;
    let mut front = 0;
    for (i, face) in faces.iter().enumerate() {
        let y = face.centroid().y;
        if y > max_y {
            max_y = y;
            front = i;
        }
    }
    Some(front)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::Color;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    /// A 20x20 square face whose centroid is at `(cx, cy)`.
    fn face_at(cx: f64, cy: f64) -> Face {
        Face::new(
            [
                p(cx - 10.0, cy + 10.0),
                p(cx + 10.0, cy + 10.0),
                p(cx + 10.0, cy - 10.0),
                p(cx - 10.0, cy - 10.0),
            ],
            Color::RED,
            false,
        )
    }

    fn quad(ld: Point2, rd: Point2, ru: Point2, lu: Point2) -> Face {
        Face::new([ld, rd, ru, lu], Color::BLUE, false)
    }

    #[test]
    fn lowest_centroid_is_front() {
        let mut faces = vec![
            face_at(0.0, 10.0),
            face_at(50.0, 50.0),
            face_at(100.0, 90.0),
            face_at(150.0, 30.0),
        ];
        let front = ResolvePositions::new().resolve(&mut faces);
        assert_eq!(front, Some(2));
        assert_eq!(faces[2].position(), Position::Front);
        let fronts = faces.iter().filter(|f| f.position() == Position::Front).count();
        assert_eq!(fronts, 1);
    }

    #[test]
    fn first_maximal_face_wins_ties() {
        let faces = vec![face_at(0.0, 40.0), face_at(50.0, 80.0), face_at(100.0, 80.0)];
        assert_eq!(select_front(&faces), Some(1));
    }

    #[test]
    fn no_centroid_below_zero_defaults_to_first_face() {
        let faces = vec![face_at(0.0, -40.0), face_at(50.0, -5.0), face_at(100.0, 0.0)];
        assert_eq!(select_front(&faces), Some(0));
    }

    #[test]
    fn empty_input_has_no_front() {
        assert_eq!(ResolvePositions::new().resolve(&mut []), None);
    }

    #[test]
    fn face_sharing_front_left_edge_is_left() {
        let front = quad(p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0));
        let left = quad(p(-10.0, -5.0), p(0.0, 0.0), p(0.0, 10.0), p(-10.0, 5.0));
        let resolver = ResolvePositions::new();
        assert_eq!(resolver.classify_neighbour(&left, &front), Position::Left);
    }

    #[test]
    fn face_sharing_front_right_edge_is_right() {
        let front = quad(p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0));
        let right = quad(p(10.0, 0.0), p(20.0, -5.0), p(20.0, 5.0), p(10.0, 10.0));
        let resolver = ResolvePositions::new();
        assert_eq!(resolver.classify_neighbour(&right, &front), Position::Right);
    }

    #[test]
    fn half_shared_edge_is_back() {
        let front = quad(p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0));
        let other = quad(p(-10.0, -5.0), p(0.0, 0.0), p(0.0, 11.0), p(-10.0, 5.0));
        let resolver = ResolvePositions::new();
        assert_eq!(resolver.classify_neighbour(&other, &front), Position::Back);
    }

    #[test]
    fn tolerance_absorbs_projection_noise() {
        let front = quad(p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0));
        let noisy = quad(p(-10.0, -5.0), p(0.2, -0.1), p(-0.1, 10.2), p(-10.0, 5.0));

        assert_eq!(
            ResolvePositions::new().classify_neighbour(&noisy, &front),
            Position::Back
        );
        let tolerant = ResolvePositions::new().with_tolerance(EdgeTolerance::new(0.5).unwrap());
        assert_eq!(tolerant.classify_neighbour(&noisy, &front), Position::Left);
    }

    #[test]
    fn edge_tolerance_rejects_invalid_values() {
        assert!(EdgeTolerance::new(-0.1).is_err());
        assert!(EdgeTolerance::new(f64::NAN).is_err());
        assert!(EdgeTolerance::new(f64::INFINITY).is_err());
        assert_eq!(EdgeTolerance::default(), EdgeTolerance::EXACT);
    }

    #[test]
    fn every_face_is_labelled_once() {
        // Four walls of a cube seen from slightly above the front wall.
        let b = [p(0.0, 100.0), p(100.0, 100.0), p(90.0, 60.0), p(10.0, 60.0)];
        let t = [p(0.0, 0.0), p(100.0, 0.0), p(90.0, -30.0), p(10.0, -30.0)];
        let mut faces = vec![
            quad(b[0], b[1], t[1], t[0]),
            quad(b[1], b[2], t[2], t[1]),
            quad(b[2], b[3], t[3], t[2]),
            quad(b[3], b[0], t[0], t[3]),
        ];
        assert_eq!(ResolvePositions::new().resolve(&mut faces), Some(0));
        let positions: Vec<Position> = faces.iter().map(Face::position).collect();
        assert_eq!(
            positions,
            vec![Position::Front, Position::Right, Position::Back, Position::Left]
        );
    }
}
