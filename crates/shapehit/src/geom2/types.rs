//! Basic 2D types and tolerances used by the hit tester.
//!
//! - `HitCfg`: centralizes the edge tolerance.
//! - `Segment`: two endpoints; distance queries are against the infinite line.
//! - `Polygon`: ordered, implicitly closed vertex list (at least three vertices).
//!
//! Code cross-refs: `predicates::{point_in_polygon, point_near_segment}`, `hit::HitTester`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Hit-test configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HitCfg {
    /// A point counts as "near" a segment when its line distance is strictly below this.
    pub eps_edge: f64,
}

impl Default for HitCfg {
    fn default() -> Self {
        Self { eps_edge: 5.0 }
    }
}

/// Segment between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }

    /// Shorthand for `Segment::new` from raw coordinates.
    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Vector2::new(x1, y1), Vector2::new(x2, y2))
    }

    /// Perpendicular distance from `p` to the infinite line through `a` and `b`.
    ///
    /// Coincident endpoints give a non-finite result (0/0 or x/0).
    #[inline]
    pub fn line_distance(&self, p: Vector2<f64>) -> f64 {
        let (x1, y1, x2, y2) = (self.a.x, self.a.y, self.b.x, self.b.y);
        let num = ((y2 - y1) * p.x - (x2 - x1) * p.y + x2 * y1 - y2 * x1).abs();
        let den = ((y2 - y1).powi(2) + (x2 - x1).powi(2)).sqrt();
        num / den
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

/// Ordered, implicitly closed polygon.
///
/// Invariants:
/// - At least three vertices.
/// - All coordinates finite.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Polygon {
    v: Vec<Vector2<f64>>,
}

impl Polygon {
    /// `None` if fewer than three vertices or any coordinate is non-finite.
    pub fn new(v: Vec<Vector2<f64>>) -> Option<Self> {
        if v.len() < 3 {
            return None;
        }
        if !v.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
            return None;
        }
        Some(Self { v })
    }

    /// Build from `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Option<Self> {
        Self::new(coords.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    /// Literal layouts known to satisfy the invariants.
    pub(crate) fn from_literal(coords: &[(f64, f64)]) -> Self {
        debug_assert!(coords.len() >= 3, "literal polygon needs 3 vertices");
        Self {
            v: coords.iter().map(|&(x, y)| Vector2::new(x, y)).collect(),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.v
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.v.len()
    }

    /// Always false for a constructed polygon; present for the `len` convention.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    /// Edge `k` as `(v[k], v[k+1])`, wrapping at the end.
    pub fn edge(&self, k: usize) -> Option<Segment> {
        let n = self.v.len();
        if k >= n {
            return None;
        }
        Some(Segment::new(self.v[k], self.v[(k + 1) % n]))
    }

    /// Ray-casting containment (see `predicates::point_in_polygon`).
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        super::predicates::point_in_polygon(p, &self.v)
    }
}
