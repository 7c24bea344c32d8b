//! Optional JSON config file for the CLI.
//!
//! Every field may be omitted; omitted fields take the library defaults.
//!
//! ```json
//! { "points": "150,150 350,150 325,300 175,300", "eps_edge": 5.0,
//!   "anchor": "fixed", "duration": 1.0, "ease": "power2.out" }
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use shapehit::geom2::{parse_points, HitCfg, Polygon};
use shapehit::hit::{EdgeAnchor, EdgeSet, HitTester};
use shapehit::morph::{trapezoid, Ease, MorphController, MorphTable, SnapRenderer, Transition};
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeConfig {
    pub points: Option<String>,
    pub eps_edge: Option<f64>,
    pub anchor: Option<EdgeAnchor>,
    pub duration: Option<f64>,
    pub ease: Option<Ease>,
}

impl ShapeConfig {
    /// Read `path` if given, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let cfg: Self = serde_json::from_slice(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), ?cfg, "config");
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if let Some(eps) = self.eps_edge {
            if !(eps.is_finite() && eps > 0.0) {
                bail!("eps_edge must be positive and finite, got {eps}");
            }
        }
        if let Some(d) = self.duration {
            if !(d.is_finite() && d >= 0.0) {
                bail!("duration must be non-negative and finite, got {d}");
            }
        }
        Ok(())
    }

    /// Starting shape: `override_points`, else the config's `points`, else the trapezoid.
    pub fn polygon(&self, override_points: Option<&str>) -> Result<Polygon> {
        match override_points.or(self.points.as_deref()) {
            Some(s) => parse_points(s).with_context(|| format!("parsing points {s:?}")),
            None => Ok(trapezoid()),
        }
    }

    pub fn tester(&self) -> HitTester {
        let defaults = HitCfg::default();
        HitTester::new(
            EdgeSet::trapezoid(),
            self.anchor.unwrap_or_default(),
            HitCfg {
                eps_edge: self.eps_edge.unwrap_or(defaults.eps_edge),
            },
        )
    }

    pub fn transition(&self) -> Transition {
        let defaults = Transition::default();
        Transition {
            duration: self.duration.unwrap_or(defaults.duration),
            ease: self.ease.unwrap_or(defaults.ease),
        }
    }

    /// Presets with `reset` as the inside-no-edge target.
    pub fn table(&self, reset: Polygon) -> MorphTable {
        MorphTable::trapezoid(reset).with_transition(self.transition())
    }

    pub fn controller(
        &self,
        override_points: Option<&str>,
    ) -> Result<MorphController<SnapRenderer>> {
        let start = self.polygon(override_points)?;
        let table = self.table(start.clone());
        Ok(MorphController::with_table(
            self.tester(),
            table,
            SnapRenderer::new(start),
        ))
    }
}
