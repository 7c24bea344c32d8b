//! Provenance sidecars for `batch` outputs.
//!
//! `decisions.json` gets `decisions.provenance.json` next to it, recording
//! what produced it: code revision, library version, and the batch settings.

use anyhow::{Context, Result};
use serde::Serialize;
use shapehit::hit::EdgeAnchor;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Settings a batch run was made with.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchParams {
    pub input: String,
    pub clicks: usize,
    /// Starting (and reset) shape as a `points` attribute.
    pub start: String,
    pub eps_edge: f64,
    pub anchor: EdgeAnchor,
}

#[derive(Debug, Serialize)]
struct Sidecar<'a, P: Serialize> {
    code_rev: String,
    shapehit: &'static str,
    params: &'a P,
    outputs: Vec<String>,
}

/// Sidecar location: the artifact's extension becomes `provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Write the sidecar for `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, params: &BatchParams) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let doc = Sidecar {
        code_rev: code_rev(),
        shapehit: shapehit::VERSION,
        params,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Provenance block with no params or outputs, for `report`.
pub fn report_block() -> Result<String> {
    let doc = Sidecar {
        code_rev: code_rev(),
        shapehit: shapehit::VERSION,
        params: &serde_json::Map::new(),
        outputs: Vec::new(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    from_env
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
