//! Cyclic alignment of two turning functions.
//!
//! Two sweeps share one running minimum: every cyclic shift of `a` against
//! `b` unshifted, then every shift of `b` against `a` unshifted. A shift is
//! an offset into the caller's data; nothing is rotated in place, and the
//! winning pair is materialized only when it improves the minimum.
//!
//! Cost of a shift: over the merged breakpoints (sorted union of both
//! cumulative-length sequences, outer 0 and 1 dropped, rounded), skipping
//! the first, sum `|angle_a − angle_b|` of the intervals owning the point.

use tracing::{debug, trace};

use super::types::{Alignment, TurningFunction};
use crate::error::{Error, Result};
use crate::geom2::round3;

/// Offset view: entry `i` is entry `(i + offset) mod n` of `tf`.
#[derive(Clone, Copy)]
struct Shifted<'a> {
    tf: &'a TurningFunction,
    offset: usize,
}

impl<'a> Shifted<'a> {
    #[inline]
    fn new(tf: &'a TurningFunction, offset: usize) -> Self {
        Self { tf, offset }
    }
    #[inline]
    fn angle(&self, i: usize) -> f64 {
        self.tf.angles()[(i + self.offset) % self.tf.len()]
    }
    fn breakpoints(&self) -> Vec<f64> {
        let n = self.tf.len();
        let lengths = self.tf.lengths();
        let mut out = Vec::with_capacity(n + 1);
        let mut acc = 0.0;
        out.push(acc);
        for i in 0..n {
            acc += lengths[(i + self.offset) % n];
            out.push(acc);
        }
        out
    }
}

/// Index of the interval `(breaks[j-1], breaks[j]]` holding `x`, searching
/// upward from `from`; `fallback` if no interval holds it.
///
/// Intervals are open on the left, so a point equal to a breakpoint belongs
/// to the interval that ends there. The first interval's left edge (0) is
/// never queried: callers skip the first merged breakpoint.
pub(crate) fn locate(breaks: &[f64], x: f64, from: usize, fallback: usize) -> usize {
    (from.max(1)..breaks.len())
        .find(|&j| breaks[j - 1] < x && x <= breaks[j])
        .map_or(fallback, |j| j - 1)
}

/// Interval index assumed before the first lookup succeeds.
#[inline]
pub(crate) fn start_index(len: usize) -> usize {
    1.min(len.saturating_sub(1))
}

/// Sorted union with one leading and one trailing entry removed, rounded.
pub(crate) fn merged_breakpoints(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut merged: Vec<f64> = a.iter().chain(b).copied().collect();
    merged.sort_by(f64::total_cmp);
    merged.remove(0);
    merged.pop();
    for x in &mut merged {
        *x = round3(*x);
    }
    merged
}

fn shift_cost(a: Shifted, b: Shifted, bp_a: &[f64], bp_b: &[f64], merged: &[f64]) -> f64 {
    let mut ia = start_index(a.tf.len());
    let mut ib = start_index(b.tf.len());
    let mut cost = 0.0;
    for &x in merged.iter().skip(1) {
        ia = locate(bp_a, x, 1, ia);
        ib = locate(bp_b, x, 1, ib);
        cost += (a.angle(ia) - b.angle(ib)).abs();
    }
    cost
}

/// Keep the candidate if it beats the current best (ties keep the earlier one).
fn consider(best: &mut Option<Alignment>, a: Shifted, b: Shifted, bp_a: &[f64], bp_b: &[f64]) {
    let merged = merged_breakpoints(bp_a, bp_b);
    let cost = shift_cost(a, b, bp_a, bp_b, &merged);
    trace!(shift_a = a.offset, shift_b = b.offset, cost, "alignment candidate");
    if best.as_ref().map_or(true, |cur| cost < cur.cost) {
        *best = Some(Alignment {
            a: a.tf.rotated(a.offset),
            b: b.tf.rotated(b.offset),
            shift_a: a.offset,
            shift_b: b.offset,
            breakpoints_a: bp_a.to_vec(),
            breakpoints_b: bp_b.to_vec(),
            merged,
            cost,
        });
    }
}

/// Minimum-cost cyclic alignment of `a` and `b`. Inputs are left untouched.
pub fn align(a: &TurningFunction, b: &TurningFunction) -> Result<Alignment> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::degenerate("cannot align an empty turning function"));
    }
    let mut best: Option<Alignment> = None;

    let fixed_b = Shifted::new(b, 0);
    let bp_b = fixed_b.breakpoints();
    for shift in 0..a.len() {
        let sa = Shifted::new(a, shift);
        consider(&mut best, sa, fixed_b, &sa.breakpoints(), &bp_b);
    }

    let fixed_a = Shifted::new(a, 0);
    let bp_a = fixed_a.breakpoints();
    for shift in 0..b.len() {
        let sb = Shifted::new(b, shift);
        consider(&mut best, fixed_a, sb, &bp_a, &sb.breakpoints());
    }

    let best = best.ok_or_else(|| Error::invariant("alignment search produced no candidate"))?;
    debug!(
        shift_a = best.shift_a,
        shift_b = best.shift_b,
        cost = best.cost,
        "best cyclic alignment"
    );
    Ok(best)
}
