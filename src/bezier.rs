//! Recursive linear interpolation (De Casteljau) evaluation of Bezier curves.
//!
//! A curve of degree `n` is defined by `n + 1` control points. Every
//! interpolation layer walks the same fraction `t` along each edge of the
//! current polygon, which leaves one point fewer; the last remaining point
//! lies on the curve.

use crate::line_segment::LineSegment;
use crate::point::Point;

/// One interpolation layer: the point at `t` on every edge between
/// neighbouring points. Yields `points.len() - 1` points.
pub fn reduce(points: &[Point], t: f64) -> Vec<Point> {
    points
        .windows(2)
        .map(|pair| LineSegment::new(pair[0], pair[1]).point_at(t))
        .collect()
}

/// The point on the curve defined by `points` at parameter `t`.
///
/// Returns `None` for an empty control polygon. `t` is used as given.
pub fn evaluate(points: &[Point], t: f64) -> Option<Point> {
    match points {
        [] => None,
        [point] => Some(*point),
        _ => evaluate(&reduce(points, t), t),
    }
}
