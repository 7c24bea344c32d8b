//! Decision-to-shape mapping and the click controller.
//!
//! Purpose
//! - Map each `Decision` to a target vertex list and a transition (`MorphTable`).
//! - Drive an external `ShapeRenderer` from clicks (`MorphController`).
//!
//! The crate does not animate. Renderers receive a target and a `Transition`
//! and own everything after that; `SnapRenderer` applies targets at once.
//!
//! Code cross-refs: `hit::HitTester`, `geom2::Polygon`

mod controller;
mod ease;
mod renderer;
mod table;

pub use controller::{to_local, MorphController};
pub use ease::{Ease, Transition};
pub use renderer::{ShapeRenderer, SnapRenderer};
pub use table::{trapezoid, MorphTable, TRAPEZOID};
