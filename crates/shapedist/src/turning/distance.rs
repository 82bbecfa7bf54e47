//! Alignment evaluation and the top-level turning-function distance.

use tracing::debug;

use super::align::{align, locate, start_index};
use super::build::turning_function_with;
use super::types::{Alignment, EvaluatedAlignment, TurnCfg};
use crate::error::Result;
use crate::geom2::Ring;

/// Euclidean distance of an alignment: over the de-duplicated merged
/// breakpoints (first one skipped), sum `sqrt(Δangle² + Δlength²)` of the
/// owning intervals of `a` and `b`.
pub fn evaluate(alignment: Alignment) -> EvaluatedAlignment {
    let mut points = alignment.merged.clone();
    points.dedup();

    let (a, b) = (&alignment.a, &alignment.b);
    let mut ia = start_index(a.len());
    let mut ib = start_index(b.len());
    let mut total = 0.0;
    for &x in points.iter().skip(1) {
        // Monotone in x, so each lookup resumes where the previous one ended.
        ia = locate(&alignment.breakpoints_a, x, ia, ia);
        ib = locate(&alignment.breakpoints_b, x, ib, ib);
        let d_angle = a.angles()[ia] - b.angles()[ib];
        let d_length = a.lengths()[ia] - b.lengths()[ib];
        total += (d_angle * d_angle + d_length * d_length).sqrt();
    }
    EvaluatedAlignment {
        alignment,
        total_distance: total,
    }
}

/// Turning-function distance between two rings (0 for identical shapes).
pub fn turning_function_distance(a: &Ring, b: &Ring) -> Result<f64> {
    Ok(turning_function_alignment(a, b, TurnCfg::default())?.total_distance)
}

pub fn turning_function_distance_with(a: &Ring, b: &Ring, cfg: TurnCfg) -> Result<f64> {
    Ok(turning_function_alignment(a, b, cfg)?.total_distance)
}

/// The winning evaluated alignment behind `turning_function_distance`.
///
/// Both rings are built as CCW turning functions and normalized. They are
/// aligned as built and again in their clockwise-equivalent arrangement
/// (`TurningFunction::mirrored`); the smaller evaluated distance wins, the
/// CCW one on ties.
pub fn turning_function_alignment(a: &Ring, b: &Ring, cfg: TurnCfg) -> Result<EvaluatedAlignment> {
    let ta = turning_function_with(a, true, cfg)?.normalized()?;
    let tb = turning_function_with(b, true, cfg)?.normalized()?;

    let ccw = evaluate(align(&ta, &tb)?);
    let cw = evaluate(align(&ta.mirrored(), &tb.mirrored())?);
    debug!(
        ccw = ccw.total_distance,
        cw = cw.total_distance,
        "turning function distance candidates"
    );
    if ccw.total_distance <= cw.total_distance {
        Ok(ccw)
    } else {
        Ok(cw)
    }
}
