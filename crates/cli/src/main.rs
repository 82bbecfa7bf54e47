use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use shapedist::api::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;

#[derive(Parser)]
#[command(name = "shapedist")]
#[command(about = "Shape-similarity distances between 2D polygons")]
struct Cmd {
    /// Log verbosity (error, warn, info, debug, trace); logs go to stderr
    #[arg(long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Metric {
    Turning,
    Chamfer,
    Hausdorff,
    Polis,
}

#[derive(Subcommand)]
enum Action {
    /// Print the turning function of a polygon as JSON
    Turning {
        /// JSON file holding `[[x, y], ...]`
        #[arg(long)]
        input: PathBuf,
        /// Rebuild clockwise rings in counter-clockwise order
        #[arg(long)]
        ccw: bool,
        /// Express angles as fractions of a full turn, both columns rounded
        #[arg(long)]
        normalize: bool,
    },
    /// Print one distance between two polygons
    Distance {
        #[arg(long, value_enum)]
        metric: Metric,
        #[arg(long)]
        a: PathBuf,
        #[arg(long)]
        b: PathBuf,
        /// min, max, average or directed; ignored by the turning metric
        #[arg(long, default_value = "directed")]
        symmetrize: Symmetrize,
    },
    /// Score every row of an `id,test,reference` CSV and write a result CSV
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "average")]
        symmetrize: Symmetrize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Turning {
            input,
            ccw,
            normalize,
        } => turning(&input, ccw, normalize),
        Action::Distance {
            metric,
            a,
            b,
            symmetrize,
        } => distance(metric, &a, &b, symmetrize),
        Action::Batch {
            input,
            out,
            symmetrize,
        } => batch::run(&input, &out, symmetrize),
        Action::Report => report(),
    }
}

/// Read a ring from a JSON coordinate list.
fn read_ring(path: &Path) -> Result<Ring> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing polygon {}", path.display()))
}

fn turning(input: &Path, ccw: bool, normalize: bool) -> Result<()> {
    tracing::info!(input = %input.display(), ccw, normalize, "turning");
    let ring = read_ring(input)?;
    let mut tf = turning_function(&ring, ccw)?;
    if normalize {
        tf = tf.normalized()?;
    }
    println!("{}", serde_json::to_string_pretty(&tf)?);
    Ok(())
}

fn distance(metric: Metric, a: &Path, b: &Path, symmetrize: Symmetrize) -> Result<()> {
    tracing::info!(?metric, a = %a.display(), b = %b.display(), %symmetrize, "distance");
    let (ra, rb) = (read_ring(a)?, read_ring(b)?);
    let d = match metric {
        Metric::Turning => turning_function_distance(&ra, &rb)?,
        Metric::Chamfer => chamfer_distance(&ra, &rb, symmetrize),
        Metric::Hausdorff => hausdorff_distance(&ra, &rb, symmetrize),
        Metric::Polis => polis_distance(&ra, &rb, symmetrize),
    };
    println!("{d}");
    Ok(())
}

#[derive(Serialize)]
struct Report {
    code_rev: String,
    version: &'static str,
    metrics: [&'static str; 4],
}

fn report() -> Result<()> {
    let obj = Report {
        code_rev: provenance::current_git_rev(),
        version: shapedist::VERSION,
        metrics: ["turning", "chamfer", "hausdorff", "polis"],
    };
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
