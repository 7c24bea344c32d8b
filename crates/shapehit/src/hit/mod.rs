//! Click classification against a polygon with four named edges.
//!
//! Purpose
//! - Turn one point plus the current polygon into a `Decision`: inside and
//!   near a named edge, inside with no edge, or outside.
//!
//! Model
//! - Containment is tested first (ray casting). Only inside points are
//!   matched against edges, in the fixed priority top, bottom, left, right.
//! - Edge tests measure distance to the infinite line through each segment.
//! - `EdgeAnchor` chooses whether the edges are the fixed layout literals or
//!   follow the live quadrilateral.
//!
//! Code cross-refs: `geom2::{point_in_polygon, point_near_segment}`, `morph::MorphTable`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geom2::{point_near_segment, HitCfg, Polygon, Segment};

/// Named edge of the shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Order in which edges are tested; the first match wins.
    pub const PRIORITY: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

/// Outcome of classifying one click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Inside, not near any edge.
    Inside,
    Outside,
    /// Inside and near this edge. Serialized as the bare edge name.
    #[serde(untagged)]
    Edge(Edge),
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Edge(e) => e.as_str(),
            Decision::Inside => "inside",
            Decision::Outside => "outside",
        }
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        !matches!(self, Decision::Outside)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Four named segments.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EdgeSet {
    pub top: Segment,
    pub bottom: Segment,
    pub left: Segment,
    pub right: Segment,
}

impl EdgeSet {
    /// The trapezoid's layout: segments anchored to the original drawing.
    pub fn trapezoid() -> Self {
        Self {
            top: Segment::from_coords(150.0, 150.0, 350.0, 150.0),
            bottom: Segment::from_coords(200.0, 300.0, 300.0, 300.0),
            left: Segment::from_coords(150.0, 150.0, 200.0, 300.0),
            right: Segment::from_coords(350.0, 150.0, 300.0, 300.0),
        }
    }

    /// Edges of a quadrilateral `v0..v3`: top `v0-v1`, right `v1-v2`,
    /// bottom `v2-v3`, left `v3-v0`. `None` for other vertex counts.
    pub fn from_quad(poly: &Polygon) -> Option<Self> {
        if poly.len() != 4 {
            return None;
        }
        Some(Self {
            top: poly.edge(0)?,
            right: poly.edge(1)?,
            bottom: poly.edge(2)?,
            left: poly.edge(3)?,
        })
    }

    #[inline]
    pub fn get(&self, edge: Edge) -> &Segment {
        match edge {
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
            Edge::Right => &self.right,
        }
    }
}

impl Default for EdgeSet {
    fn default() -> Self {
        Self::trapezoid()
    }
}

/// Where edge segments come from at classification time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeAnchor {
    /// Always the configured `EdgeSet`, whatever the polygon currently looks like.
    #[default]
    Fixed,
    /// Follow the live polygon when it is a quadrilateral; otherwise fall back to `Fixed`.
    Live,
}

/// Stateless click classifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct HitTester {
    pub edges: EdgeSet,
    pub anchor: EdgeAnchor,
    pub cfg: HitCfg,
}

impl HitTester {
    pub fn new(edges: EdgeSet, anchor: EdgeAnchor, cfg: HitCfg) -> Self {
        Self { edges, anchor, cfg }
    }

    /// Segments in effect for `poly`.
    pub fn edges_for(&self, poly: &Polygon) -> EdgeSet {
        match self.anchor {
            EdgeAnchor::Fixed => self.edges,
            EdgeAnchor::Live => EdgeSet::from_quad(poly).unwrap_or(self.edges),
        }
    }

    /// First edge in priority order whose line passes within `eps_edge` of `p`.
    ///
    /// Does not check containment.
    pub fn near_edge(&self, p: Vector2<f64>, poly: &Polygon) -> Option<Edge> {
        let edges = self.edges_for(poly);
        Edge::PRIORITY
            .into_iter()
            .find(|&e| point_near_segment(p, edges.get(e), self.cfg.eps_edge))
    }

    /// Classify a click at `p` (surface-local coordinates) against `poly`.
    pub fn classify(&self, p: Vector2<f64>, poly: &Polygon) -> Decision {
        if !poly.contains(p) {
            return Decision::Outside;
        }
        match self.near_edge(p, poly) {
            Some(e) => Decision::Edge(e),
            None => Decision::Inside,
        }
    }
}
