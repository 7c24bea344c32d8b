//! Replay a CSV of clicks through one controller.
//!
//! Input: CSV with numeric columns `x` and `y` (surface-local), one click per row.
//! Output: JSON array of `ClickRecord`, in input order. Each click sees the
//! shape left behind by the previous one.

use anyhow::{anyhow, Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;
use serde::Serialize;
use shapehit::geom2::format_points;
use shapehit::hit::Decision;
use shapehit::morph::{MorphController, ShapeRenderer};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClickRecord {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub decision: Decision,
    /// Shape after the click, as a `points` attribute.
    pub shape: String,
}

/// Read the `x`/`y` columns of `input`.
pub fn read_clicks(input: &Path) -> Result<Vec<Vector2<f64>>> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y from {}", input.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
            _ => Err(anyhow!("row {row}: missing x or y")),
        })
        .collect()
}

/// Feed `clicks` through `ctl` in order.
pub fn replay<R: ShapeRenderer>(
    ctl: &mut MorphController<R>,
    clicks: &[Vector2<f64>],
) -> Vec<ClickRecord> {
    clicks
        .iter()
        .enumerate()
        .map(|(index, &p)| {
            let decision = ctl.handle_click(p);
            ClickRecord {
                index,
                x: p.x,
                y: p.y,
                decision,
                shape: format_points(ctl.renderer().current()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapehit::hit::{Edge, HitTester};
    use shapehit::morph::{trapezoid, SnapRenderer};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_columns_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clicks.csv");
        fs::write(&path, "x,y,label\n250,150,a\n10.5,10,b\n").unwrap();
        let clicks = read_clicks(&path).unwrap();
        assert_eq!(clicks, vec![Vector2::new(250.0, 150.0), Vector2::new(10.5, 10.0)]);
    }

    #[test]
    fn missing_cell_reports_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clicks.csv");
        fs::write(&path, "x,y\n1,2\n3,\n").unwrap();
        let err = read_clicks(&path).unwrap_err();
        assert!(err.to_string().contains("row 1"), "{err}");
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clicks.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();
        assert!(read_clicks(&path).is_err());
    }

    #[test]
    fn replay_threads_shape_between_clicks() {
        let mut ctl = MorphController::new(HitTester::default(), SnapRenderer::new(trapezoid()));
        let clicks = [
            Vector2::new(120.0, 120.0),
            Vector2::new(120.0, 120.0),
            Vector2::new(250.0, 150.0),
        ];
        let recs = replay(&mut ctl, &clicks);
        let got: Vec<_> = recs.iter().map(|r| r.decision).collect();
        assert_eq!(
            got,
            vec![Decision::Outside, Decision::Inside, Decision::Edge(Edge::Top)]
        );
        assert_eq!(recs[0].shape, "100,100 400,100 350,400 150,400");
        assert_eq!(recs[2].index, 2);
        let json = serde_json::to_value(&recs[2]).unwrap();
        assert_eq!(json["decision"], "top");
    }
}
