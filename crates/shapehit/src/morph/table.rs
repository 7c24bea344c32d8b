use serde::Serialize;

use super::ease::Transition;
use crate::geom2::Polygon;
use crate::hit::{Decision, Edge};

/// Original trapezoid as drawn before any click.
pub const TRAPEZOID: [(f64, f64); 4] =
    [(150.0, 150.0), (350.0, 150.0), (325.0, 300.0), (175.0, 300.0)];

const TOP: [(f64, f64); 4] = [(150.0, 150.0), (350.0, 150.0), (325.0, 300.0), (175.0, 300.0)];
const BOTTOM: [(f64, f64); 4] = [(125.0, 150.0), (375.0, 150.0), (300.0, 300.0), (200.0, 300.0)];
const LEFT: [(f64, f64); 4] = [(150.0, 150.0), (350.0, 150.0), (275.0, 300.0), (175.0, 300.0)];
const RIGHT: [(f64, f64); 4] = [(150.0, 150.0), (350.0, 150.0), (325.0, 300.0), (225.0, 300.0)];
const EXPAND: [(f64, f64); 4] = [(100.0, 100.0), (400.0, 100.0), (350.0, 400.0), (150.0, 400.0)];

/// Lookup table from `Decision` to target shape, fixed at construction.
///
/// `Inside` maps to `reset`, the shape captured before any morph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MorphTable {
    pub top: Polygon,
    pub bottom: Polygon,
    pub left: Polygon,
    pub right: Polygon,
    pub expand: Polygon,
    pub reset: Polygon,
    pub transition: Transition,
}

impl MorphTable {
    /// Trapezoid presets with the given reset shape and the default transition.
    pub fn trapezoid(reset: Polygon) -> Self {
        Self {
            top: Polygon::from_literal(&TOP),
            bottom: Polygon::from_literal(&BOTTOM),
            left: Polygon::from_literal(&LEFT),
            right: Polygon::from_literal(&RIGHT),
            expand: Polygon::from_literal(&EXPAND),
            reset,
            transition: Transition::default(),
        }
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    #[inline]
    pub fn edge_target(&self, edge: Edge) -> &Polygon {
        match edge {
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
            Edge::Right => &self.right,
        }
    }

    /// Target shape for a decision.
    pub fn target(&self, d: Decision) -> &Polygon {
        match d {
            Decision::Edge(e) => self.edge_target(e),
            Decision::Inside => &self.reset,
            Decision::Outside => &self.expand,
        }
    }
}

/// The trapezoid as originally drawn.
pub fn trapezoid() -> Polygon {
    Polygon::from_literal(&TRAPEZOID)
}

impl Default for MorphTable {
    fn default() -> Self {
        Self::trapezoid(trapezoid())
    }
}
