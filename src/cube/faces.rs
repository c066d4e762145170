use super::{CubePoints, Face, FacePalette, Position};

/// Number of rendered faces: four lateral walls plus the top.
pub const FACE_COUNT: usize = 5;

/// Number of lateral faces.
pub const LATERAL_FACE_COUNT: usize = 4;

/// Index of the top face within [`CubeFaces`].
pub const TOP_FACE_INDEX: usize = 4;

/// Indices into [`CubePoints`] forming each face, in `ld, rd, ru, lu` order.
///
/// Points `0..4` are the bottom corners and `4..8` the top corners above
/// them, so lateral face `i` spans bottom corners `i, i+1` and the top
/// corners directly above.
pub const FACE_LAYOUT: [[usize; 4]; FACE_COUNT] = [
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [4, 5, 6, 7],
];

/// The five faces of the overlay cube, lateral faces first.
///
/// Faces are created once and rewritten in place every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeFaces {
    faces: [Face; FACE_COUNT],
}

impl CubeFaces {
    /// Creates five collapsed faces colored from `palette`.
    #[must_use]
    pub fn new(palette: &FacePalette) -> Self {
        let [c0, c1, c2, c3] = palette.lateral;
        Self {
            faces: [
                Face::degenerate(c0, false),
                Face::degenerate(c1, false),
                Face::degenerate(c2, false),
                Face::degenerate(c3, false),
                Face::degenerate(palette.top, true),
            ],
        }
    }

    /// Wraps prepared faces; the last one is expected to be the top face.
    #[must_use]
    pub fn from_faces(faces: [Face; FACE_COUNT]) -> Self {
        Self { faces }
    }

    /// Rewrites every face from this frame's projected corners.
    pub fn rewrite(&mut self, points: &CubePoints) {
        for (face, layout) in self.faces.iter_mut().zip(FACE_LAYOUT.iter()) {
            let [ld, rd, ru, lu] = layout.map(|i| points[i]);
            face.rewrite(ld, rd, ru, lu);
        }
    }

    #[must_use]
    pub fn faces(&self) -> &[Face; FACE_COUNT] {
        &self.faces
    }

    #[must_use]
    pub fn lateral(&self) -> &[Face] {
        &self.faces[..LATERAL_FACE_COUNT]
    }

    pub fn lateral_mut(&mut self) -> &mut [Face] {
        &mut self.faces[..LATERAL_FACE_COUNT]
    }

    #[must_use]
    pub fn top(&self) -> &Face {
        &self.faces[TOP_FACE_INDEX]
    }

    /// Iterates faces in drawing order: lateral faces, then the top.
    pub fn iter(&self) -> std::slice::Iter<'_, Face> {
        self.faces.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Face> {
        self.faces.iter_mut()
    }

    /// Returns the first face labelled `position`, if any.
    #[must_use]
    pub fn find(&self, position: Position) -> Option<&Face> {
        self.faces.iter().find(|f| f.position() == position)
    }
}

impl<'a> IntoIterator for &'a CubeFaces {
    type Item = &'a Face;
    type IntoIter = std::slice::Iter<'a, Face>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
