//! `<out>.provenance.json` sidecar for batch results.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What a batch run read, how it scored, and what it wrote.
#[derive(Debug, Serialize)]
pub struct BatchRecord {
    pub code_rev: String,
    pub version: &'static str,
    pub input: String,
    pub output: String,
    pub symmetrize: String,
    pub rows: usize,
    pub failed: usize,
}

impl BatchRecord {
    pub fn new(input: &Path, output: &Path, symmetrize: impl ToString) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: shapedist::VERSION,
            input: input.to_string_lossy().into_owned(),
            output: output.to_string_lossy().into_owned(),
            symmetrize: symmetrize.to_string(),
            rows: 0,
            failed: 0,
        }
    }
}

/// `scores.csv` -> `scores.provenance.json`, next to the artifact.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

pub fn write_sidecar(record: &BatchRecord) -> Result<PathBuf> {
    let path = sidecar_path(Path::new(&record.output));
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `GIT_COMMIT` from build time, else from the environment, else "unknown".
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
