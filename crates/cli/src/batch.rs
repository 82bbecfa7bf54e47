//! CSV batch scoring: one row per polygon pair, every metric per row.
//!
//! A row whose polygons fail to parse or validate keeps its id, gets null
//! metric columns and an `error` message; the batch carries on.

use anyhow::{Context, Result};
use polars::prelude::*;
use shapedist::api::*;
use std::fs::File;
use std::path::Path;

use crate::provenance::{self, BatchRecord};

/// Metric values for one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Scores {
    pub turning: f64,
    pub chamfer: f64,
    pub hausdorff: f64,
    pub polis: f64,
    pub perimeter_ratio: f64,
    pub centroid_distance: f64,
}

pub(crate) fn score_pair(test: &str, reference: &str, symmetrize: Symmetrize) -> Result<Scores> {
    let test: Ring = serde_json::from_str(test).context("test polygon")?;
    let reference: Ring = serde_json::from_str(reference).context("reference polygon")?;
    Ok(Scores {
        turning: turning_function_distance(&test, &reference)?,
        chamfer: chamfer_distance(&test, &reference, symmetrize),
        hausdorff: hausdorff_distance(&test, &reference, symmetrize),
        polis: polis_distance(&test, &reference, symmetrize),
        perimeter_ratio: perimeter_ratio(&test, &reference),
        centroid_distance: centroid_distance(&test, &reference),
    })
}

/// Column buffers for the output frame.
#[derive(Default)]
struct Columns {
    id: Vec<String>,
    turning: Vec<Option<f64>>,
    chamfer: Vec<Option<f64>>,
    hausdorff: Vec<Option<f64>>,
    polis: Vec<Option<f64>>,
    perimeter_ratio: Vec<Option<f64>>,
    centroid_distance: Vec<Option<f64>>,
    error: Vec<Option<String>>,
}

impl Columns {
    fn push(&mut self, id: String, scored: Result<Scores>) {
        let (s, err) = match scored {
            Ok(s) => (Some(s), None),
            Err(e) => (None, Some(format!("{e:#}"))),
        };
        self.id.push(id);
        self.turning.push(s.map(|s| s.turning));
        self.chamfer.push(s.map(|s| s.chamfer));
        self.hausdorff.push(s.map(|s| s.hausdorff));
        self.polis.push(s.map(|s| s.polis));
        self.perimeter_ratio.push(s.map(|s| s.perimeter_ratio));
        self.centroid_distance.push(s.map(|s| s.centroid_distance));
        self.error.push(err);
    }

    fn into_frame(self) -> PolarsResult<DataFrame> {
        df!(
            "id" => self.id,
            "turning" => self.turning,
            "chamfer" => self.chamfer,
            "hausdorff" => self.hausdorff,
            "polis" => self.polis,
            "perimeter_ratio" => self.perimeter_ratio,
            "centroid_distance" => self.centroid_distance,
            "error" => self.error,
        )
    }
}

/// Score `input` into `out` and write the provenance sidecar next to it.
pub(crate) fn run(input: &Path, out: &Path, symmetrize: Symmetrize) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), %symmetrize, "batch");
    let pairs = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .select([
            col("id").cast(DataType::String),
            col("test"),
            col("reference"),
        ])
        .collect()
        .with_context(|| format!("reading {}", input.display()))?;

    let ids = pairs.column("id")?.str()?;
    let tests = pairs.column("test")?.str()?;
    let refs = pairs.column("reference")?.str()?;

    let mut cols = Columns::default();
    for ((id, test), reference) in ids.into_iter().zip(tests).zip(refs) {
        let id = id.unwrap_or_default().to_string();
        let scored = match (test, reference) {
            (Some(t), Some(r)) => score_pair(t, r, symmetrize),
            _ => Err(anyhow::anyhow!("missing polygon")),
        };
        if let Err(e) = &scored {
            tracing::warn!(id = %id, error = %e, "row skipped");
        }
        cols.push(id, scored);
    }
    let failed = cols.error.iter().filter(|e| e.is_some()).count();
    let mut frame = cols.into_frame()?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(rows = frame.height(), failed, "batch_written");

    let mut record = BatchRecord::new(input, out, symmetrize);
    record.rows = frame.height();
    record.failed = failed;
    provenance::write_sidecar(&record)?;
    Ok(())
}
