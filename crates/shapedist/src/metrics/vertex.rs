//! Chamfer, Hausdorff and PoLiS distances.
//!
//! All three are O(N·M) nearest-neighbour scans from the vertices of one
//! ring to the vertices (Chamfer, Hausdorff) or boundary (PoLiS) of the other.

use super::Symmetrize;
use crate::geom2::{distance_sq, Point2, Ring};

/// Distance from `p` to the nearest vertex of `ring`.
fn nearest_vertex(p: Point2, ring: &Ring) -> f64 {
    ring.corners()
        .iter()
        .map(|&q| distance_sq(p, q))
        .fold(f64::INFINITY, f64::min)
        .sqrt()
}

/// Distance from `p` to the nearest point on the boundary of `ring`.
fn nearest_boundary(p: Point2, ring: &Ring) -> f64 {
    ring.edges()
        .map(|e| e.distance_to_point(p))
        .fold(f64::INFINITY, f64::min)
}

fn directed_chamfer(a: &Ring, b: &Ring) -> f64 {
    a.corners().iter().map(|&p| nearest_vertex(p, b)).sum()
}

fn directed_hausdorff(a: &Ring, b: &Ring) -> f64 {
    a.corners()
        .iter()
        .map(|&p| nearest_vertex(p, b))
        .fold(0.0, f64::max)
}

fn directed_polis(a: &Ring, b: &Ring) -> f64 {
    let total: f64 = a.corners().iter().map(|&p| nearest_boundary(p, b)).sum();
    total / a.vertex_count() as f64
}

/// Sum over the vertices of `a` of the distance to the nearest vertex of `b`.
///
/// `Average` weights the two directed sums by the vertex counts of their
/// source rings, which keeps it between `Min` and `Max`.
pub fn chamfer_distance(a: &Ring, b: &Ring, symmetrize: Symmetrize) -> f64 {
    let ab = directed_chamfer(a, b);
    if symmetrize == Symmetrize::Directed {
        return ab;
    }
    let ba = directed_chamfer(b, a);
    let weights = (a.vertex_count() as f64, b.vertex_count() as f64);
    symmetrize.combine(ab, ba, weights)
}

/// Largest distance from a vertex of `a` to the nearest vertex of `b`.
pub fn hausdorff_distance(a: &Ring, b: &Ring, symmetrize: Symmetrize) -> f64 {
    let ab = directed_hausdorff(a, b);
    if symmetrize == Symmetrize::Directed {
        return ab;
    }
    symmetrize.combine(ab, directed_hausdorff(b, a), (1.0, 1.0))
}

/// Mean distance from the vertices of `a` to the boundary of `b` (PoLiS).
pub fn polis_distance(a: &Ring, b: &Ring, symmetrize: Symmetrize) -> f64 {
    let ab = directed_polis(a, b);
    if symmetrize == Symmetrize::Directed {
        return ab;
    }
    symmetrize.combine(ab, directed_polis(b, a), (1.0, 1.0))
}
