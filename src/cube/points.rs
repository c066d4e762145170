use std::ops::Index;

use crate::error::{CubeError, GeometryError, Result};
use crate::math::{Point2, Point3};

/// Number of projected cube corners per frame.
pub const CUBE_POINT_COUNT: usize = 8;

/// The eight projected corners of the cube for one frame.
///
/// Points `0..4` are the bottom corners (on the marker plane) and `4..8` the
/// top corners, each directly above the bottom corner four slots earlier.
/// Both rings follow the same rotational order around the footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubePoints([Point2; CUBE_POINT_COUNT]);

impl CubePoints {
    #[must_use]
    pub fn new(points: [Point2; CUBE_POINT_COUNT]) -> Self {
        Self(points)
    }

    /// The four corners on the marker plane.
    #[must_use]
    pub fn bottom(&self) -> &[Point2] {
        &self.0[..4]
    }

    /// The four corners of the top face.
    #[must_use]
    pub fn top(&self) -> &[Point2] {
        &self.0[4..]
    }

    #[must_use]
    pub fn as_array(&self) -> &[Point2; CUBE_POINT_COUNT] {
        &self.0
    }

    /// Checks that every coordinate is finite.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` naming the first offending point.
    pub fn ensure_finite(&self) -> Result<()> {
        match self.0.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
            Some(index) => Err(GeometryError::NonFinite { index }.into()),
            None => Ok(()),
        }
    }
}

impl Index<usize> for CubePoints {
    type Output = Point2;

    fn index(&self, index: usize) -> &Point2 {
        &self.0[index]
    }
}

impl From<[Point2; CUBE_POINT_COUNT]> for CubePoints {
    fn from(points: [Point2; CUBE_POINT_COUNT]) -> Self {
        Self(points)
    }
}

impl TryFrom<&[Point2]> for CubePoints {
    type Error = CubeError;

    fn try_from(points: &[Point2]) -> Result<Self> {
        let array: [Point2; CUBE_POINT_COUNT] =
            points.try_into().map_err(|_| GeometryError::PointCount {
                expected: CUBE_POINT_COUNT,
                actual: points.len(),
            })?;
        Ok(Self(array))
    }
}

/// Object-space corners of a cube standing on a square marker.
///
/// The marker of edge `marker_length` is centered at the origin in the
/// `z = 0` plane; the cube shares its footprint and rises to
/// `z = marker_length`. The order matches [`CubePoints`], so projecting these
/// points yields a valid frame input.
///
/// # Errors
///
/// Returns an error if `marker_length` is not positive and finite.
pub fn cube_object_points(marker_length: f64) -> Result<[Point3; CUBE_POINT_COUNT]> {
    if !marker_length.is_finite() || marker_length <= 0.0 {
        return Err(GeometryError::NonPositive {
            parameter: "marker_length",
            value: marker_length,
        }
        .into());
    }
    let h = marker_length / 2.0;
    let footprint = [(h, -h), (h, h), (-h, h), (-h, -h)];

    let mut points = [Point3::origin(); CUBE_POINT_COUNT];
    for (i, &(x, y)) in footprint.iter().enumerate() {
        points[i] = Point3::new(x, y, 0.0);
        points[i + 4] = Point3::new(x, y, marker_length);
    }
    Ok(points)
}
