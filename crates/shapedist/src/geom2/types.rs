//! Point and directed-segment primitives.
//!
//! - `Point2`: plain `nalgebra` 2-vector used as a position.
//! - `Seg2`: directed edge tail → head with orientation and angle queries.
//!
//! Both rounding points of this module (cross product in `orientation`,
//! cosine in `angle_to`) go through `util::round3`.

use nalgebra::Vector2;

use super::util::round3;
use crate::error::{Error, Result};

/// A position in the plane.
pub type Point2 = Vector2<f64>;

/// Side of a directed segment a query point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Right,
    Colinear,
}

/// Squared Euclidean distance. Only for relative comparisons; take the
/// square root when the true distance is needed.
#[inline]
pub fn distance_sq(a: Point2, b: Point2) -> f64 {
    (a - b).norm_squared()
}

/// Directed segment (tail → head).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seg2 {
    pub tail: Point2,
    pub head: Point2,
}

impl Seg2 {
    #[inline]
    pub fn new(tail: Point2, head: Point2) -> Self {
        Self { tail, head }
    }

    #[inline]
    pub fn dir(&self) -> Vector2<f64> {
        self.head - self.tail
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.dir().norm()
    }

    /// Side of `p` relative to this segment, judged from the head: sign of
    /// `dir × (p − head)` after rounding to three decimals. Near-collinear
    /// points therefore classify as exactly `Colinear`.
    pub fn orientation(&self, p: Point2) -> Orientation {
        let v1 = self.dir();
        let v2 = p - self.head;
        let cross = round3(v1.x * v2.y - v1.y * v2.x);
        if cross > 0.0 {
            Orientation::Left
        } else if cross < 0.0 {
            Orientation::Right
        } else {
            Orientation::Colinear
        }
    }

    /// Unsigned angle in degrees, in [0, 180], between the directions of
    /// `self` and `other`. The cosine is rounded to three decimals before
    /// `acos`, which also keeps it inside [-1, 1].
    pub fn angle_to(&self, other: &Seg2) -> Result<f64> {
        let denom = self.length() * other.length();
        if !(denom > 0.0) || !denom.is_finite() {
            return Err(Error::degenerate("angle between zero-length segments"));
        }
        let cos = round3(self.dir().dot(&other.dir()) / denom);
        Ok(cos.acos().to_degrees())
    }

    /// Euclidean distance from `p` to the closest point of the segment.
    pub fn distance_to_point(&self, p: Point2) -> f64 {
        let d = self.dir();
        let len_sq = d.norm_squared();
        if len_sq == 0.0 {
            return (p - self.tail).norm();
        }
        let t = ((p - self.tail).dot(&d) / len_sq).clamp(0.0, 1.0);
        (p - (self.tail + d * t)).norm()
    }
}
