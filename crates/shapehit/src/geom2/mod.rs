//! 2D geometry for hit testing.
//!
//! Purpose
//! - Provide the polygon and segment types plus the two predicates the hit
//!   tester is built on: ray-casting containment and point-to-line distance.
//! - Keep the API minimal and numerically explicit (strict `<` comparisons,
//!   no hidden snapping).
//!
//! Code cross-refs: `Polygon`, `Segment`, `HitCfg`, `hit::HitTester`

pub mod points;
mod predicates;
pub mod rand;
mod types;

pub use points::{format_points, parse_points, PointsError};
pub use predicates::{point_in_polygon, point_near_segment};
pub use types::{HitCfg, Polygon, Segment};

#[cfg(test)]
mod tests;
