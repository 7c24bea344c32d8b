use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nalgebra::Vector2;
use shapehit::geom2::format_points;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod config;
mod output;
mod provenance;

use config::ShapeConfig;

#[derive(Parser)]
#[command(name = "shapehit")]
#[command(about = "Classify clicks against the trapezoid and report the resulting morph")]
struct Cmd {
    /// Optional JSON config (points, eps_edge, anchor, duration, ease)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify one click and print the decision, target shape, and transition
    Classify {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        /// Shape being clicked, as an SVG points attribute; the reset target stays the configured start
        #[arg(long)]
        points: Option<String>,
    },
    /// Replay a CSV of clicks (columns x,y) and write per-click decisions as JSON
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        points: Option<String>,
    },
    /// Print the decision-to-shape table
    Presets,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = ShapeConfig::load(cmd.config.as_deref())?;
    match cmd.action {
        Action::Classify { x, y, points } => classify(&cfg, x, y, points.as_deref()),
        Action::Batch { input, out, points } => run_batch(&cfg, &input, &out, points.as_deref()),
        Action::Presets => presets(&cfg),
        Action::Report => report(),
    }
}

fn classify(cfg: &ShapeConfig, x: f64, y: f64, points: Option<&str>) -> Result<()> {
    let out = output::classify_click(cfg, Vector2::new(x, y), points)?;
    tracing::info!(x, y, decision = %out.decision, "classify");
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run_batch(cfg: &ShapeConfig, input: &Path, out: &Path, points: Option<&str>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let clicks = batch::read_clicks(input)?;
    let mut ctl = cfg.controller(points)?;
    let records = batch::replay(&mut ctl, &clicks);
    tracing::info!(clicks = records.len(), "replayed");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&records)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let tester = ctl.tester();
    let params = provenance::BatchParams {
        input: input.to_string_lossy().into_owned(),
        clicks: records.len(),
        start: format_points(&ctl.table().reset),
        eps_edge: tester.cfg.eps_edge,
        anchor: tester.anchor,
    };
    let prov = provenance::write_sidecar(out, &params)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn presets(cfg: &ShapeConfig) -> Result<()> {
    let table = output::preset_table(cfg)?;
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", provenance::report_block()?);
    Ok(())
}
