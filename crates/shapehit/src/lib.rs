//! Hit testing for a clickable polygon and the shape morphs it triggers.
//!
//! A click is classified against the live polygon (`hit::HitTester`), the
//! resulting `Decision` selects a target shape (`morph::MorphTable`), and a
//! host-provided `morph::ShapeRenderer` performs the transition.
//!
//! API Policy
//! - The crate is small and pre-1.0; breaking changes are fine when they
//!   improve clarity.

pub mod api;
pub mod geom2;
pub mod hit;
pub mod morph;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{HitCfg, Polygon, Segment};
pub use hit::{Decision, Edge, HitTester};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        format_points, parse_points, point_in_polygon, point_near_segment, HitCfg, Polygon,
        Segment,
    };
    pub use crate::hit::{Decision, Edge, EdgeAnchor, EdgeSet, HitTester};
    pub use crate::morph::{
        Ease, MorphController, MorphTable, ShapeRenderer, SnapRenderer, Transition,
    };
    pub use nalgebra::Vector2 as Vec2;
}
