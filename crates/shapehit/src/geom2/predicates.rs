use nalgebra::Vector2;

use super::types::Segment;

/// Ray-casting containment test (even-odd rule).
///
/// For each edge `(v[i], v[j])` with `j = i - 1` (wrapping), a crossing is
/// counted when the edge straddles the horizontal line through `p`
/// (`(yi > y) != (yj > y)`) and the edge's x-intercept on that line lies
/// strictly right of `p`. Horizontal edges never straddle, so the division
/// below never sees `yj == yi`.
///
/// Points on non-horizontal edges may land on either side. Fewer than three
/// vertices enclose no area and return `false`.
pub fn point_in_polygon(p: Vector2<f64>, verts: &[Vector2<f64>]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (verts[i], verts[j]);
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// True iff `p` lies strictly within `eps` of the infinite line through `seg`.
///
/// Collinear points beyond either endpoint are still near. Degenerate
/// segments have no line and are never near (the distance is non-finite).
#[inline]
pub fn point_near_segment(p: Vector2<f64>, seg: &Segment, eps: f64) -> bool {
    seg.line_distance(p) < eps
}
