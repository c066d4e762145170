use super::distance_2d::point_to_segment_dist;
use super::{Point2, TOLERANCE};

/// Classification of a point relative to a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += cross(&points[i], &points[j]);
    }
    sum * 0.5
}

/// Computes the area-weighted centroid of a closed polygon.
///
/// Returns `None` when the polygon has (near) zero area, where the centroid
/// is undefined. Independent of winding direction.
#[must_use]
pub fn polygon_centroid(points: &[Point2]) -> Option<Point2> {
    let area = signed_area(points);
    if !area.is_finite() || area.abs() < TOLERANCE {
        return None;
    }

    let n = points.len();
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let w = cross(a, b);
        cx += (a.x + b.x) * w;
        cy += (a.y + b.y) * w;
    }
    let scale = 1.0 / (6.0 * area);
    Some(Point2::new(cx * scale, cy * scale))
}

/// Classifies `point` against the closed polygon `polygon`.
///
/// Points within [`TOLERANCE`] of an edge are [`PointClassification::OnBoundary`].
/// An empty polygon contains nothing, so every point is outside it.
#[must_use]
pub fn classify_point(point: &Point2, polygon: &[Point2]) -> PointClassification {
    let n = polygon.len();
    if n == 0 {
        return PointClassification::Outside;
    }

    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        if point_to_segment_dist(point, a, b) < TOLERANCE {
            return PointClassification::OnBoundary;
        }
    }

    if n >= 3 && winding_number(point, polygon) != 0 {
        PointClassification::Inside
    } else {
        PointClassification::Outside
    }
}

/// Winding number of `point` with respect to polygon `verts`.
///
/// Non-zero => inside, zero => outside.
fn winding_number(point: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let v0 = &verts[i];
        let v1 = &verts[(i + 1) % n];
        let side = (v1 - v0).perp(&(point - v0));

        if v0.y <= point.y {
            if v1.y > point.y && side > 0.0 {
                winding += 1;
            }
        } else if v1.y <= point.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// 2D cross product of two position vectors: `a.x * b.y - b.x * a.y`.
#[inline]
fn cross(a: &Point2, b: &Point2) -> f64 {
    a.x * b.y - b.x * a.y
}
