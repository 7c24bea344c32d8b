//! Flat function surface for hosts that do not want the typed API.
//!
//! Coordinates are plain `(x, y)` pairs; polygons are SVG `points` strings.

use nalgebra::Vector2;

use crate::geom2::{parse_points, point_in_polygon, point_near_segment, PointsError, Segment};
use crate::hit::{Decision, HitTester};

/// Pre: `polygon` has at least three vertices.
/// Post: true iff the ray-casting crossing count is odd.
pub fn is_point_in_polygon(point: (f64, f64), polygon: &[(f64, f64)]) -> bool {
    let verts: Vec<Vector2<f64>> = polygon.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
    point_in_polygon(Vector2::new(point.0, point.1), &verts)
}

/// Post: true iff `point` is strictly within `eps` of the infinite line through `a` and `b`.
pub fn is_point_near_line(point: (f64, f64), a: (f64, f64), b: (f64, f64), eps: f64) -> bool {
    let seg = Segment::from_coords(a.0, a.1, b.0, b.1);
    point_near_segment(Vector2::new(point.0, point.1), &seg, eps)
}

/// Classify a click against a `points` attribute with the default tester.
pub fn classify_points(point: (f64, f64), points: &str) -> Result<Decision, PointsError> {
    let poly = parse_points(points)?;
    Ok(HitTester::default().classify(Vector2::new(point.0, point.1), &poly))
}
