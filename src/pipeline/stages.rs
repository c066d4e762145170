use tracing::trace;

use crate::cube::{CubeFaces, CubePoints, Position};
use crate::math::Point2;
use crate::render::{Canvas, OutlineStyle};

/// The named steps of per-frame resolution, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Assemble,
    ResolvePositions,
    ResolveVisibility,
    Draw,
}

/// Rewrites all five faces from a frame's projected corners.
#[derive(Debug, Clone, Copy)]
pub struct AssembleFaces<'p> {
    points: &'p CubePoints,
}

impl<'p> AssembleFaces<'p> {
    #[must_use]
    pub fn new(points: &'p CubePoints) -> Self {
        Self { points }
    }

    /// Executes the stage, clearing every face's per-frame labels.
    pub fn execute<'a>(&self, faces: &'a mut CubeFaces) -> AssembledCube<'a> {
        faces.rewrite(self.points);
        trace!(
            centroids = ?faces.iter().map(crate::cube::Face::centroid).collect::<Vec<_>>(),
            "faces assembled"
        );
        AssembledCube { faces }
    }
}

/// Faces rewritten for the current frame, positions not yet resolved.
#[derive(Debug)]
pub struct AssembledCube<'a> {
    faces: &'a mut CubeFaces,
}

impl<'a> AssembledCube<'a> {
    /// Treats `faces` as already rewritten for this frame.
    #[must_use]
    pub fn from_faces(faces: &'a mut CubeFaces) -> Self {
        Self { faces }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        Stage::Assemble
    }

    #[must_use]
    pub fn faces(&self) -> &CubeFaces {
        self.faces
    }

    pub(crate) fn into_faces(self) -> &'a mut CubeFaces {
        self.faces
    }
}

/// Faces with FRONT/LEFT/RIGHT/BACK labels assigned.
#[derive(Debug)]
pub struct PositionedCube<'a> {
    faces: &'a mut CubeFaces,
    front: Option<usize>,
}

impl<'a> PositionedCube<'a> {
    /// Treats `faces` as already labelled, with `front` as the index of the
    /// front face if one was found.
    #[must_use]
    pub fn new(faces: &'a mut CubeFaces, front: Option<usize>) -> Self {
        Self { faces, front }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        Stage::ResolvePositions
    }

    #[must_use]
    pub fn faces(&self) -> &CubeFaces {
        self.faces
    }

    #[must_use]
    pub fn front(&self) -> Option<usize> {
        self.front
    }

    /// Contour of the face labelled FRONT, or empty if there is none.
    #[must_use]
    pub fn front_contour(&self) -> Vec<Point2> {
        contour_of(self.faces, Position::Front)
    }

    /// Contour of the face labelled TOP, or empty if there is none.
    #[must_use]
    pub fn top_contour(&self) -> Vec<Point2> {
        contour_of(self.faces, Position::Top)
    }

    pub(crate) fn into_faces(self) -> &'a mut CubeFaces {
        self.faces
    }
}

/// Faces with positions and visibility resolved, ready to draw.
#[derive(Debug)]
pub struct ResolvedCube<'a> {
    faces: &'a mut CubeFaces,
    front: Option<usize>,
    front_contour: Vec<Point2>,
    top_contour: Vec<Point2>,
}

impl<'a> ResolvedCube<'a> {
    /// Treats `faces` as fully resolved for this frame.
    #[must_use]
    pub fn new(faces: &'a mut CubeFaces, front: Option<usize>) -> Self {
        let front_contour = contour_of(faces, Position::Front);
        let top_contour = contour_of(faces, Position::Top);
        Self {
            faces,
            front,
            front_contour,
            top_contour,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        Stage::ResolveVisibility
    }

    #[must_use]
    pub fn faces(&self) -> &CubeFaces {
        self.faces
    }

    #[must_use]
    pub fn front(&self) -> Option<usize> {
        self.front
    }
}

/// Paints every face that should be drawn, lateral faces first and the top
/// face last, so the top covers the upper parts of the walls.
#[derive(Debug, Clone, Copy)]
pub struct DrawCube<'s> {
    outline: &'s OutlineStyle,
}

impl<'s> DrawCube<'s> {
    #[must_use]
    pub fn new(outline: &'s OutlineStyle) -> Self {
        Self { outline }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        Stage::Draw
    }

    /// Executes the stage, stepping each face in painter's order against the
    /// frame's FRONT and TOP contours. Returns how many faces were painted.
    pub fn execute<C: Canvas + ?Sized>(
        &self,
        cube: &mut ResolvedCube<'_>,
        canvas: &mut C,
    ) -> usize {
        let mut drawn = 0;
        for face in cube.faces.iter_mut() {
            face.step(canvas, &cube.front_contour, &cube.top_contour, self.outline);
            if face.should_draw() {
                drawn += 1;
            }
        }
        trace!(drawn, "faces drawn");
        drawn
    }
}

fn contour_of(faces: &CubeFaces, position: Position) -> Vec<Point2> {
    faces
        .find(position)
        .map(|f| f.contour().to_vec())
        .unwrap_or_default()
}
