use super::Point2;

/// Returns the minimum distance from `point` to the line segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (point - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((point - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;

    (point - closest).norm()
}

/// Returns `true` if two points lie within `tolerance` of each other.
///
/// A zero tolerance degenerates to exact coordinate equality.
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2, tolerance: f64) -> bool {
    if tolerance <= 0.0 {
        return a == b;
    }
    (a - b).norm() <= tolerance
}
