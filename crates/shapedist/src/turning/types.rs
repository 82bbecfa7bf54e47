//! Data types for turning functions and their alignment.
//!
//! Kept small and explicit to make `build`, `align` and `distance` easy to read.

use crate::error::{Error, Result};
use crate::geom2::round3;

/// Turn label at a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Left,
    Right,
    /// Collinear vertex; merged away by the builder.
    Straight,
}

impl Turn {
    /// One-character label: `L`, `R` or `-`.
    pub fn label(self) -> char {
        match self {
            Turn::Left => 'L',
            Turn::Right => 'R',
            Turn::Straight => '-',
        }
    }

    pub(crate) fn mirrored(self) -> Turn {
        match self {
            Turn::Left => Turn::Right,
            Turn::Right => Turn::Left,
            Turn::Straight => Turn::Straight,
        }
    }
}

/// Digitization sense of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Digitization {
    Ccw,
    Cw,
}

impl Digitization {
    pub fn opposite(self) -> Digitization {
        match self {
            Digitization::Ccw => Digitization::Cw,
            Digitization::Cw => Digitization::Ccw,
        }
    }
}

/// Piecewise-constant turn-angle function over normalized perimeter.
///
/// Invariants:
/// - `angles`, `lengths` and `direction` have one shared length (checked on construction).
/// - Entry `k` pairs the turn INTO an edge with that edge's share of the perimeter.
/// - Lengths sum to 1 (up to rounding). Angles sum to ±360° as built, or to
///   ±1 after `normalized`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurningFunction {
    angles: Vec<f64>,
    lengths: Vec<f64>,
    direction: Vec<Turn>,
    digitization_direction: Digitization,
}

impl TurningFunction {
    /// Assemble from parallel sequences; fails if their lengths differ.
    pub fn from_parts(
        angles: Vec<f64>,
        lengths: Vec<f64>,
        direction: Vec<Turn>,
        digitization_direction: Digitization,
    ) -> Result<Self> {
        if angles.len() != lengths.len() || angles.len() != direction.len() {
            return Err(Error::invariant(format!(
                "turning function sequences differ in length: angles={}, lengths={}, direction={}",
                angles.len(),
                lengths.len(),
                direction.len()
            )));
        }
        Ok(Self {
            angles,
            lengths,
            direction,
            digitization_direction,
        })
    }

    #[inline]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }
    #[inline]
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }
    #[inline]
    pub fn direction(&self) -> &[Turn] {
        &self.direction
    }
    #[inline]
    pub fn digitization_direction(&self) -> Digitization {
        self.digitization_direction
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.angles.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn total_angle(&self) -> f64 {
        self.angles.iter().sum()
    }

    /// Prefix sums of `lengths`, starting at 0 and ending at (about) 1.
    pub fn breakpoints(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.lengths.len() + 1);
        let mut acc = 0.0;
        out.push(acc);
        for l in &self.lengths {
            acc += l;
            out.push(acc);
        }
        out
    }

    /// Copy whose entry `i` is entry `(i + k) mod n` of `self`.
    pub fn rotated(&self, k: usize) -> TurningFunction {
        let n = self.len();
        if n == 0 {
            return self.clone();
        }
        let k = k % n;
        let rot = |v: &[f64]| v[k..].iter().chain(&v[..k]).copied().collect::<Vec<_>>();
        TurningFunction {
            angles: rot(&self.angles),
            lengths: rot(&self.lengths),
            direction: self.direction[k..]
                .iter()
                .chain(&self.direction[..k])
                .copied()
                .collect(),
            digitization_direction: self.digitization_direction,
        }
    }

    /// Angles rescaled so they sum to 1 (not 360); angles and lengths
    /// rounded to three decimals.
    pub fn normalized(&self) -> Result<TurningFunction> {
        let total = self.total_angle();
        if !(total.abs() > 0.0) || !total.is_finite() {
            return Err(Error::invariant(format!(
                "cannot normalize turning function with total angle {total}"
            )));
        }
        Ok(TurningFunction {
            angles: self.angles.iter().map(|a| round3(a / total)).collect(),
            lengths: self.lengths.iter().map(|&l| round3(l)).collect(),
            direction: self.direction.clone(),
            digitization_direction: self.digitization_direction,
        })
    }

    /// Clockwise-equivalent rearrangement: lengths shifted one step forward,
    /// angles negated, then every sequence reversed and rotated left by one.
    pub fn mirrored(&self) -> TurningFunction {
        fn reverse_rotate<T: Copy>(v: impl DoubleEndedIterator<Item = T>) -> Vec<T> {
            let mut out: Vec<T> = v.rev().collect();
            if !out.is_empty() {
                out.rotate_left(1);
            }
            out
        }
        let n = self.len();
        if n == 0 {
            return self.clone();
        }
        let shifted = std::iter::once(self.lengths[n - 1])
            .chain(self.lengths[..n - 1].iter().copied());
        TurningFunction {
            angles: reverse_rotate(self.angles.iter().map(|a| -a)),
            lengths: reverse_rotate(shifted),
            direction: reverse_rotate(self.direction.iter().map(|t| t.mirrored())),
            digitization_direction: self.digitization_direction.opposite(),
        }
    }
}

/// Best cyclic shift found by `align`.
///
/// `a`/`b` are the shifted copies that achieved `cost`; `breakpoints_*` are
/// their cumulative lengths and `merged` the rounded, sorted union used for
/// the cost. Only `align` constructs one, so the breakpoints always match
/// the functions they index.
#[derive(Clone, Debug, PartialEq)]
pub struct Alignment {
    pub(crate) a: TurningFunction,
    pub(crate) b: TurningFunction,
    pub(crate) shift_a: usize,
    pub(crate) shift_b: usize,
    pub(crate) breakpoints_a: Vec<f64>,
    pub(crate) breakpoints_b: Vec<f64>,
    pub(crate) merged: Vec<f64>,
    pub(crate) cost: f64,
}

impl Alignment {
    pub fn a(&self) -> &TurningFunction {
        &self.a
    }
    pub fn b(&self) -> &TurningFunction {
        &self.b
    }
    /// Offset applied to the first input (0 if the second one was shifted).
    pub fn shift_a(&self) -> usize {
        self.shift_a
    }
    pub fn shift_b(&self) -> usize {
        self.shift_b
    }
    pub fn breakpoints_a(&self) -> &[f64] {
        &self.breakpoints_a
    }
    pub fn breakpoints_b(&self) -> &[f64] {
        &self.breakpoints_b
    }
    pub fn merged(&self) -> &[f64] {
        &self.merged
    }
    /// Summed absolute angle difference over the merged breakpoints.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// An `Alignment` plus its Euclidean angle/length distance.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluatedAlignment {
    pub alignment: Alignment,
    pub total_distance: f64,
}

/// Builder configuration.
#[derive(Clone, Copy, Debug)]
pub struct TurnCfg {
    /// Allowed deviation, in degrees, of the summed turn angles from ±360.
    ///
    /// The default (half a turn) accepts any sum whose nearest multiple of
    /// 360 is ±360. The rounded cosine costs up to about 1.8° per vertex, so
    /// a tight window rejects simple rings with many shallow turns.
    pub closure_tol_deg: f64,
}

impl Default for TurnCfg {
    fn default() -> Self {
        Self {
            closure_tol_deg: 180.0,
        }
    }
}
