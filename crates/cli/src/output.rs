//! JSON documents printed by `classify` and `presets`.

use anyhow::Result;
use nalgebra::Vector2;
use serde::Serialize;
use shapehit::geom2::format_points;
use shapehit::hit::{Decision, Edge};
use shapehit::morph::Transition;

use crate::config::ShapeConfig;

/// `classify` output: `{ decision, target, transition }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassifyOutput {
    pub decision: Decision,
    /// Shape the renderer should move to, as a `points` attribute.
    pub target: String,
    pub transition: Transition,
}

/// Classify `p` against the current shape.
///
/// `current` (the `--points` flag) is the shape being clicked. The reset
/// target stays the configured starting shape, not `current`.
pub fn classify_click(
    cfg: &ShapeConfig,
    p: Vector2<f64>,
    current: Option<&str>,
) -> Result<ClassifyOutput> {
    let poly = cfg.polygon(current)?;
    let table = cfg.table(cfg.polygon(None)?);
    let decision = cfg.tester().classify(p, &poly);
    Ok(ClassifyOutput {
        decision,
        target: format_points(table.target(decision)),
        transition: table.transition,
    })
}

/// Target per decision, in classification priority order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PresetTargets {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub inside: String,
    pub outside: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PresetTable {
    pub targets: PresetTargets,
    pub transition: Transition,
}

pub fn preset_table(cfg: &ShapeConfig) -> Result<PresetTable> {
    let table = cfg.table(cfg.polygon(None)?);
    let edge = |e: Edge| format_points(table.edge_target(e));
    Ok(PresetTable {
        targets: PresetTargets {
            top: edge(Edge::Top),
            bottom: edge(Edge::Bottom),
            left: edge(Edge::Left),
            right: edge(Edge::Right),
            inside: format_points(&table.reset),
            outside: format_points(&table.expand),
        },
        transition: table.transition,
    })
}
