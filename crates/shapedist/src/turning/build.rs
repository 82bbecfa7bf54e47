//! Turning-function construction from a closed ring.
//!
//! Steps: walk consecutive vertex triples (wrap-around included), record the
//! signed turn and the outgoing edge length, normalize lengths, fold
//! collinear entries into their cyclic predecessor, then check closure and
//! optionally redo the walk on the reversed ring to get a CCW function.

use tracing::{debug, trace};

use super::types::{Digitization, Turn, TurnCfg, TurningFunction};
use crate::error::{Error, Result};
use crate::geom2::{Orientation, Point2, Ring, Seg2};

/// Output of one walk before any merging.
struct RawWalk {
    angles: Vec<f64>,
    lengths: Vec<f64>,
    direction: Vec<Turn>,
}

/// Turning function with the default configuration.
///
/// With `ccw = true` a clockwise ring is rebuilt by walking its vertices in
/// reverse, so the result always has `Digitization::Ccw`.
pub fn turning_function(ring: &Ring, ccw: bool) -> Result<TurningFunction> {
    turning_function_with(ring, ccw, TurnCfg::default())
}

pub fn turning_function_with(ring: &Ring, ccw: bool, cfg: TurnCfg) -> Result<TurningFunction> {
    let forward = build_pass(ring.vertices().iter().copied(), cfg)?;
    if forward.digitization_direction() == Digitization::Ccw || !ccw {
        return Ok(forward);
    }
    // A reversed walk regroups edges and collinear runs; flipping signs would not.
    debug!(vertices = ring.vertex_count(), "clockwise ring, rebuilding in reverse");
    build_pass(ring.vertices().iter().rev().copied(), cfg)
}

fn build_pass(points: impl Iterator<Item = Point2>, cfg: TurnCfg) -> Result<TurningFunction> {
    let points: Vec<Point2> = points.collect();
    let raw = walk(&points)?;
    let total_turn: f64 = raw.angles.iter().sum();
    let (angles, lengths, direction) = merge_collinear(raw)?;
    let digitization = classify_closure(total_turn, cfg)?;
    trace!(total_turn, entries = angles.len(), ?digitization, "turning function pass");
    TurningFunction::from_parts(angles, lengths, direction, digitization)
}

fn signed_turn(incoming: &Seg2, outgoing: &Seg2) -> Result<(f64, Turn)> {
    match incoming.orientation(outgoing.head) {
        Orientation::Left => Ok((incoming.angle_to(outgoing)?, Turn::Left)),
        Orientation::Right => Ok((-incoming.angle_to(outgoing)?, Turn::Right)),
        Orientation::Colinear => Ok((0.0, Turn::Straight)),
    }
}

/// One entry per edge: entry `i` holds the turn at vertex `i+1` and the length
/// of edge `(i+1 → i+2)`; the last entry closes the ring at vertex 0.
fn walk(points: &[Point2]) -> Result<RawWalk> {
    let n = points.len();
    if n < 4 {
        return Err(Error::degenerate(format!(
            "ring needs at least 3 vertices, got {}",
            n.saturating_sub(1)
        )));
    }
    let mut angles = Vec::with_capacity(n - 1);
    let mut lengths = Vec::with_capacity(n - 1);
    let mut direction = Vec::with_capacity(n - 1);
    for w in points.windows(3) {
        let vx = Seg2::new(w[0], w[1]);
        let vy = Seg2::new(w[1], w[2]);
        let (angle, turn) = signed_turn(&vx, &vy)?;
        angles.push(angle);
        direction.push(turn);
        lengths.push(vy.length());
    }
    let last = Seg2::new(points[n - 2], points[n - 1]);
    let first = Seg2::new(points[0], points[1]);
    let (angle, turn) = signed_turn(&last, &first)?;
    angles.push(angle);
    direction.push(turn);
    lengths.push(first.length());

    let total: f64 = lengths.iter().sum();
    if !(total > 0.0) || !total.is_finite() {
        return Err(Error::degenerate("ring has zero perimeter"));
    }
    for l in &mut lengths {
        *l /= total;
    }
    Ok(RawWalk {
        angles,
        lengths,
        direction,
    })
}

/// Fold every `Straight` entry's length into its cyclic predecessor that
/// turns, then drop the `Straight` entries.
fn merge_collinear(raw: RawWalk) -> Result<(Vec<f64>, Vec<f64>, Vec<Turn>)> {
    let RawWalk {
        angles,
        mut lengths,
        direction,
    } = raw;
    let n = lengths.len();
    for i in (1..n).rev() {
        if direction[i] == Turn::Straight {
            lengths[i - 1] += lengths[i];
        }
    }
    if direction[0] == Turn::Straight {
        let host = (1..n)
            .rev()
            .find(|&i| direction[i] != Turn::Straight)
            .ok_or_else(|| Error::degenerate("all vertices are collinear"))?;
        lengths[host] += lengths[0];
    }
    let keep: Vec<usize> = (0..n).filter(|&i| direction[i] != Turn::Straight).collect();
    if keep.len() < 3 {
        return Err(Error::degenerate(format!(
            "ring has {} effective vertices, need at least 3",
            keep.len()
        )));
    }
    Ok((
        keep.iter().map(|&i| angles[i]).collect(),
        keep.iter().map(|&i| lengths[i]).collect(),
        keep.iter().map(|&i| direction[i]).collect(),
    ))
}

/// Classify by the nearest whole number of turns. Only ±1 turn is a simple
/// ring; 0 or ±2 turns mean the boundary crosses itself.
fn classify_closure(total_turn: f64, cfg: TurnCfg) -> Result<Digitization> {
    let turns = (total_turn / 360.0).round();
    let off = (total_turn - 360.0 * turns).abs();
    match turns as i64 {
        1 if off <= cfg.closure_tol_deg => Ok(Digitization::Ccw),
        -1 if off <= cfg.closure_tol_deg => Ok(Digitization::Cw),
        _ => Err(Error::invariant(format!(
            "turn angles sum to {total_turn:.3}°, expected ±360° (self-intersecting ring?)"
        ))),
    }
}
