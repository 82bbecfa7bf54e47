//! Closed polygon ring (single exterior boundary).
//!
//! Invariants (checked in `Ring::new`):
//! - first and last stored points coincide;
//! - at least three distinct vertices (four stored points);
//! - finite coordinates, no zero-length edge.
//!
//! Simplicity (no self-intersection) is NOT checked; the turning-function
//! builder reports the common symptom through its closure check.

use super::types::{Point2, Seg2};
use crate::error::{Error, Result};

/// Closed ring of vertices; `vertices()` includes the repeated closing point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>"))]
pub struct Ring {
    pts: Vec<Point2>,
}

impl Ring {
    /// Build a ring, closing it if the last point differs from the first.
    pub fn new(mut pts: Vec<Point2>) -> Result<Self> {
        if pts.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(Error::degenerate("non-finite coordinate"));
        }
        match (pts.first(), pts.last()) {
            (Some(&first), Some(&last)) if first != last => pts.push(first),
            (None, _) | (_, None) => return Err(Error::degenerate("empty ring")),
            _ => {}
        }
        if pts.len() < 4 {
            return Err(Error::degenerate(format!(
                "ring needs at least 3 vertices, got {}",
                pts.len().saturating_sub(1)
            )));
        }
        if let Some(k) = pts.windows(2).position(|w| w[0] == w[1]) {
            return Err(Error::degenerate(format!("zero-length edge at vertex {k}")));
        }
        Ok(Self { pts })
    }

    /// Convenience constructor from `(x, y)` tuples.
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// All stored points, closing point included.
    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.pts
    }

    /// Distinct vertices (closing point excluded).
    #[inline]
    pub fn corners(&self) -> &[Point2] {
        &self.pts[..self.pts.len() - 1]
    }

    /// True vertex count N (stored count minus one).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pts.len() - 1
    }

    /// Boundary edges in ring order.
    pub fn edges(&self) -> impl Iterator<Item = Seg2> + '_ {
        self.pts.windows(2).map(|w| Seg2::new(w[0], w[1]))
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(|e| e.length()).sum()
    }

    pub fn max_edge_length(&self) -> f64 {
        self.edges().map(|e| e.length()).fold(0.0, f64::max)
    }

    /// Shoelace area; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .pts
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum::<f64>()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Area centroid. Falls back to the vertex mean for zero-area rings.
    pub fn centroid(&self) -> Point2 {
        let a = self.signed_area();
        if a.abs() < 1e-15 {
            let n = self.vertex_count() as f64;
            return self.corners().iter().fold(Point2::zeros(), |acc, p| acc + p) / n;
        }
        let mut c = Point2::zeros();
        for w in self.pts.windows(2) {
            let cross = w[0].x * w[1].y - w[1].x * w[0].y;
            c += (w[0] + w[1]) * cross;
        }
        c / (6.0 * a)
    }

    /// Same boundary walked the other way round.
    pub fn reversed(&self) -> Ring {
        let mut pts = self.pts.clone();
        pts.reverse();
        Ring { pts }
    }

    /// Same boundary starting at vertex `k` (mod N).
    pub fn rotated_start(&self, k: usize) -> Ring {
        let corners = self.corners();
        let n = corners.len();
        let mut pts: Vec<Point2> = (0..n).map(|i| corners[(i + k) % n]).collect();
        pts.push(pts[0]);
        Ring { pts }
    }

    /// Uniform scale about the origin. `s` must be non-zero and finite.
    pub fn scaled(&self, s: f64) -> Result<Ring> {
        Ring::new(self.pts.iter().map(|p| p * s).collect())
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Ring {
        let t = Point2::new(dx, dy);
        Ring {
            pts: self.pts.iter().map(|p| p + t).collect(),
        }
    }

    /// Insert the midpoint of edge `edge` (mod N) as an extra, collinear vertex.
    pub fn with_midpoint(&self, edge: usize) -> Ring {
        let n = self.vertex_count();
        let e = edge % n;
        let mid = (self.pts[e] + self.pts[e + 1]) * 0.5;
        let mut pts = self.pts.clone();
        pts.insert(e + 1, mid);
        Ring { pts }
    }
}

impl TryFrom<Vec<[f64; 2]>> for Ring {
    type Error = Error;
    fn try_from(coords: Vec<[f64; 2]>) -> Result<Self> {
        Ring::new(coords.into_iter().map(|[x, y]| Point2::new(x, y)).collect())
    }
}

impl From<Ring> for Vec<[f64; 2]> {
    fn from(ring: Ring) -> Self {
        ring.pts.into_iter().map(|p| [p.x, p.y]).collect()
    }
}
